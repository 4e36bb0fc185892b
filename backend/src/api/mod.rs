//! Content API route handlers and module exports.

pub mod content_types;
pub mod engage;
pub mod listing;
pub mod posts;
