//! Terminal user interface: components, drawing, and the event loop.

pub mod components;
pub mod main;
pub mod runtime;
