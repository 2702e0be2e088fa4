//! Top-level frame drawing for the demo application.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::{Block, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::ui::components::{Component, NumberInputComponent};

pub fn draw(frame: &mut Frame, app: &mut App, fields: &mut [NumberInputComponent]) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(frame.area());

    frame.render_widget(
        Paragraph::new("numfield demo").style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    for (component, rect) in fields.iter_mut().zip([chunks[1], chunks[2]]) {
        component.render(frame, rect, app);
    }

    render_updates(frame, chunks[3], app);

    frame.render_widget(
        Paragraph::new("Tab/Shift+Tab move focus · Enter commits · Esc blurs · q quits")
            .style(Style::default().add_modifier(Modifier::DIM)),
        chunks[4],
    );
}

/// Emitted updates, newest first.
fn render_updates(frame: &mut Frame, rect: ratatui::layout::Rect, app: &App) {
    let visible = rect.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .updates
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();
    frame.render_widget(List::new(items).block(Block::bordered().title("Updates")), rect);
}
