//! Shared building blocks for field widgets.

mod edit_buffer;

pub use edit_buffer::EditBuffer;
