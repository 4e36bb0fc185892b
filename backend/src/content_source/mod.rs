//! Content-source HTTP client and wire formats.

pub mod client;
pub mod wire;
