//! The number input widget: state, events, rendering, icon mapping.

pub mod icon;
mod number_input_component;
mod state;

pub use number_input_component::NumberInputComponent;
pub use state::{FocusTransition, NumberInputState};
