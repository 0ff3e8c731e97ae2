pub extern crate actix_web;

pub mod config;
pub mod connection;
mod connection_tx;
pub mod handlers;
mod identity;
pub mod server;
