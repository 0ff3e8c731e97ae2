use crate::error::ChannelClosed;
use std::sync::Arc;

/// One encoded message, shared between every recipient of a fan-out.
pub type Frame = Arc<str>;

/// Send side of a participant's ordered connection.
///
/// Implementations must preserve the order of `send` calls for a single
/// channel. Sending never blocks.
pub trait Channel {
    fn is_open(&self) -> bool;

    fn send(&mut self, frame: Frame) -> Result<(), ChannelClosed>;
}
