//! Demo application state: two number input fields wired the way a host
//! view would bind them.
//!
//! The two fields are the classic "amount"/"value" pair: identical widgets
//! that differ only in naming. The app plays the host role: it owns the
//! bound values, and when a field emits an update it logs the emission and
//! feeds the emitted value back into the widget, like an `(update)` binding
//! re-assigning the input.

use std::fmt;

use anyhow::Result;
use numfield_format::{DigitInfo, Locale};
use numfield_types::{Effect, RawValue, UpdateEvent};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::number_input::{FocusTransition, NumberInputState};

/// Options for the demo application, usually parsed from the command line.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Digit-info specifier applied to both fields, e.g. `"1.5-5"`.
    pub format: String,
    /// Left icon for the amount field: a `glyphicon-` class or a literal
    /// character such as `"$"`.
    pub left_icon: Option<String>,
    /// Initial raw value for the amount field.
    pub value: Option<String>,
    /// Separators used when formatting.
    pub locale: Locale,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            format: "1.5-5".to_string(),
            left_icon: Some("$".to_string()),
            value: None,
            locale: Locale::default(),
        }
    }
}

/// Identifies one of the demo's two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Amount,
    Value,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::Amount, FieldId::Value];

    /// Title shown on the field's border.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Amount => "Amount",
            FieldId::Value => "Value",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Amount => f.write_str("amount"),
            FieldId::Value => f.write_str("value"),
        }
    }
}

pub struct App {
    /// Focus ring over the demo's fields; rebuilt before each render.
    pub focus: Focus,
    container_focus: FocusFlag,
    amount: NumberInputState,
    value: NumberInputState,
    /// Log of emitted updates, newest last.
    pub updates: Vec<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: &DemoOptions) -> Result<Self> {
        let digit_info = DigitInfo::parse(&options.format)?;

        let mut amount = NumberInputState::new("demo.amount");
        amount.set_digit_info(digit_info);
        amount.set_locale(options.locale.clone());
        amount.set_left_icon(options.left_icon.clone());
        amount.set_value(
            options
                .value
                .as_deref()
                .map(RawValue::from)
                .unwrap_or(RawValue::Number(12345.0003)),
        );

        let mut value = NumberInputState::new("demo.value");
        value.set_digit_info(digit_info);
        value.set_locale(options.locale.clone());
        value.set_left_icon(Some("glyphicon-usd".to_string()));
        // Starts unset; blurring through it demonstrates the zero emission.

        Ok(Self {
            focus: Focus::default(),
            container_focus: FocusFlag::new().with_name("demo"),
            amount,
            value,
            updates: Vec::new(),
            should_quit: false,
        })
    }

    pub fn field(&self, field: FieldId) -> &NumberInputState {
        match field {
            FieldId::Amount => &self.amount,
            FieldId::Value => &self.value,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut NumberInputState {
        match field {
            FieldId::Amount => &mut self.amount,
            FieldId::Value => &mut self.value,
        }
    }

    /// Rebuilds the focus ring so structural changes are reflected.
    pub fn rebuild_focus(&mut self) {
        let old_focus = std::mem::take(&mut self.focus);
        self.focus = FocusBuilder::rebuild_for(self, Some(old_focus));
    }

    /// Observes focus edges on every field and applies the host side of the
    /// contract for each blur: log the update and rebind the emitted value.
    pub fn sync_focus_transitions(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for field in FieldId::ALL {
            let transition = self.field_mut(field).poll_focus_transition();
            if let Some(FocusTransition::Blurred(event)) = transition {
                self.note_update(field, &event);
                effects.push(Effect::EmitUpdate(event));
            }
        }
        effects
    }

    fn note_update(&mut self, field: FieldId, event: &UpdateEvent) {
        self.updates
            .push(format!("{field} update: {}", describe(&event.value)));
        self.field_mut(field).set_value(event.value.clone());
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.amount);
        builder.widget(&self.value);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

fn describe(value: &RawValue) -> String {
    match value {
        RawValue::Null => "null".to_string(),
        RawValue::Number(n) => n.to_string(),
        RawValue::Text(text) => format!("{text:?}"),
        RawValue::Timestamp(ts) => ts.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_option_is_rejected() {
        let options = DemoOptions {
            format: "five".to_string(),
            ..DemoOptions::default()
        };
        assert!(App::new(&options).is_err());
    }

    #[test]
    fn blur_updates_are_logged_and_rebound() {
        let mut app = App::new(&DemoOptions::default()).expect("demo app");
        app.field_mut(FieldId::Amount).init();

        app.field_mut(FieldId::Amount).f_input.set(true);
        assert!(app.sync_focus_transitions().is_empty());

        app.field_mut(FieldId::Amount).edit_mut().load("777");
        app.field_mut(FieldId::Amount).f_input.set(false);
        let effects = app.sync_focus_transitions();

        assert_eq!(effects.len(), 1);
        assert_eq!(app.field(FieldId::Amount).value(), &RawValue::Number(777.0));
        assert_eq!(app.updates.len(), 1);
        assert!(app.updates[0].starts_with("amount update: 777"));
    }
}
