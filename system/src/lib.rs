mod broadcast;
mod error;
mod message;
mod operation_log;
mod router;
mod session;
mod traits;
mod types;
mod user_registry;

pub use broadcast::*;
pub use error::*;
pub use message::*;
pub use operation_log::*;
pub use session::*;
pub use traits::*;
pub use types::*;
pub use user_registry::*;

pub extern crate serde;
pub extern crate serde_json;
