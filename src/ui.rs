//! Terminal UI: store, views, components, and the render loop.

pub mod app;
pub mod colors;
pub mod components;
pub mod store;
pub mod views;
