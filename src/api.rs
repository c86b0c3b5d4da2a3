//! HTTP contract with the remote coaching backend.

pub mod client;
pub mod types;
