//! Event handling and rendering for the number input widget.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use numfield_types::{Effect, RawValue};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, FieldId};
use crate::ui::components::component::Component;
use crate::ui::components::number_input::icon;

/// Component driving one [`NumberInputState`](super::NumberInputState)
/// inside the demo [`App`]. The same component type serves every field; it
/// is parameterized by the field it owns.
#[derive(Debug)]
pub struct NumberInputComponent {
    field: FieldId,
}

impl NumberInputComponent {
    pub fn new(field: FieldId) -> Self {
        Self { field }
    }

    pub fn field(&self) -> FieldId {
        self.field
    }
}

impl Component for NumberInputComponent {
    fn init(&mut self, app: &mut App) -> Result<()> {
        app.field_mut(self.field).init();
        Ok(())
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !app.field(self.field).is_focused() {
            return Vec::new();
        }

        match key.code {
            // Enter commits by moving focus away; the blur edge emits.
            KeyCode::Enter => {
                app.focus.next();
            }
            KeyCode::Left => app.field_mut(self.field).edit_mut().move_left(),
            KeyCode::Right => app.field_mut(self.field).edit_mut().move_right(),
            KeyCode::Home => app.field_mut(self.field).edit_mut().move_home(),
            KeyCode::End => app.field_mut(self.field).edit_mut().move_end(),
            KeyCode::Backspace => app.field_mut(self.field).edit_mut().backspace(),
            KeyCode::Delete => app.field_mut(self.field).edit_mut().delete(),
            KeyCode::Char(c) if !c.is_control() => {
                app.field_mut(self.field).edit_mut().insert_char(c);
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let state = app.field(self.field);
        let focused = state.is_focused();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else if state.has_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(self.field.label())
            .border_style(border_style);
        let inner = block.inner(rect);

        let mut spans: Vec<Span> = Vec::with_capacity(3);
        let mut icon_width = 0usize;
        if let Some(icon_spec) = state.left_icon() {
            let symbol = if state.show_glyph_icon() {
                icon::glyph_symbol(icon_spec)
            } else {
                icon_spec
            };
            let cell = format!("{symbol} ");
            icon_width = cell.width();
            spans.push(Span::styled(
                cell,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let text = if focused {
            state.edit().text().to_string()
        } else {
            state.display().to_string()
        };
        let value_style = if state.has_error() && !focused {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let show_placeholder = !focused && text.is_empty();
        if show_placeholder {
            spans.push(Span::styled(
                placeholder_for(state.display()),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(text, value_style));
        }

        frame.render_widget(block, rect);
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        if focused {
            let cursor = state.edit().cursor();
            let prefix_width = state.edit().text()[..cursor].width();
            let x = inner.x + (icon_width + prefix_width) as u16;
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}

/// Hint shown in an empty unfocused field.
fn placeholder_for(display: &RawValue) -> &'static str {
    match display {
        RawValue::Null => "(unset)",
        _ => "",
    }
}
