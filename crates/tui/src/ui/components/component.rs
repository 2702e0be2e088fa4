//! Component trait for the numfield demo application.
//!
//! Components are self-contained UI elements that handle their own state,
//! events, and rendering while integrating with the application through a
//! consistent interface: `init` once, key events while relevant, `render`
//! into a provided `Rect`. Side effects are reported back as
//! [`Effect`](numfield_types::Effect)s rather than applied to global state
//! directly.

use anyhow::Result;
use crossterm::event::KeyEvent;
use numfield_types::Effect;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
pub trait Component {
    /// Initialize any internal state. Called once when the component is
    /// created, after its inputs are available.
    fn init(&mut self, _app: &mut App) -> Result<()> {
        Ok(())
    }

    /// Handle a key event. Components should only consume keys that are
    /// meaningful to them (typically only while they hold focus) and report
    /// resulting side effects.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. Implementations should be
    /// side-effect free except for frame drawing and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
