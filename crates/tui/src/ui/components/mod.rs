//! UI components: the number input widget and its shared building blocks.

pub mod common;
pub mod component;
pub mod number_input;

pub use component::Component;
pub use number_input::NumberInputComponent;
