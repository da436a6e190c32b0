//! HTTP handlers for the server.

pub mod catalog;
pub mod render;
