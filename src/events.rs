//! Events sent from the UI thread to the API worker.

pub mod types;
