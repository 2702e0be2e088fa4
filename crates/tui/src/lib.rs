//! # Numfield TUI Library
//!
//! This library provides the numfield number input widget for terminal
//! applications built on Ratatui, plus a small demo application that wires
//! two widgets into an event loop.
//!
//! ## Key Features
//!
//! - Format-on-blur, raw-on-focus editing: an unfocused field shows the
//!   locale-formatted value, a focused field shows exactly what was entered
//! - Swallowed formatting failures: invalid input is shown verbatim with an
//!   error style instead of aborting the edit
//! - Convention-based left icon: a `glyphicon-` class renders a symbol, any
//!   other icon string renders as a literal character
//! - Focus management via `rat-focus` and keyboard navigation
//!
//! ## Architecture
//!
//! The widget follows a component-based architecture: `NumberInputState`
//! owns the observable state (value, digit info, icon, display, error flag)
//! and `NumberInputComponent` handles events and renders itself.

mod app;
mod ui;

pub use app::{App, DemoOptions, FieldId};
pub use ui::components::common::EditBuffer;
pub use ui::components::number_input::{FocusTransition, NumberInputComponent, NumberInputState};

use anyhow::Result;

/// Runs the demo application loop.
///
/// Initializes the terminal, builds the demo [`App`] from `options`, and
/// drives the event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures, an invalid digit-info
/// specifier in `options`, or event loop runtime errors.
pub async fn run(options: DemoOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
