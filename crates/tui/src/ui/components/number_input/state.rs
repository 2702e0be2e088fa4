//! Observable state of the number input widget.
//!
//! The state machine has two display modes: unfocused (showing the
//! locale-formatted value) and focused (showing the raw value verbatim for
//! editing). Formatting failures never escape the widget; they flip the
//! error flag and fall back to the raw value.

use numfield_format::{DigitInfo, Locale, format_decimal};
use numfield_types::{RawValue, UpdateEvent};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::EditBuffer;

/// A focus edge observed by [`NumberInputState::poll_focus_transition`].
#[derive(Debug, Clone, PartialEq)]
pub enum FocusTransition {
    /// The field gained focus; the display now shows the raw value.
    Focused,
    /// The field lost focus; carries the update emitted by the blur.
    Blurred(UpdateEvent),
}

#[derive(Debug)]
pub struct NumberInputState {
    /// The raw bound value; may be reassigned by the host at any time.
    value: RawValue,
    /// Digit counts passed to the formatter.
    digit_info: DigitInfo,
    /// Separators used by the formatter.
    locale: Locale,
    /// Optional left icon: a `glyphicon-` class or a literal character.
    left_icon: Option<String>,
    /// What the field currently shows: the formatted text, or the raw value
    /// when formatting failed or the field is being edited.
    display: RawValue,
    /// True iff the most recent formatting attempt failed.
    has_error: bool,
    /// Edit buffer active while the field has focus.
    edit: EditBuffer,
    container_focus: FocusFlag,
    /// Focus flag for the editable input itself.
    pub f_input: FocusFlag,
    was_focused: bool,
}

impl NumberInputState {
    /// Creates an empty field. `name` scopes the focus flags, e.g.
    /// `"demo.amount"`.
    pub fn new(name: &str) -> Self {
        Self {
            value: RawValue::Null,
            digit_info: DigitInfo::default(),
            locale: Locale::default(),
            left_icon: None,
            display: RawValue::Null,
            has_error: false,
            edit: EditBuffer::new(),
            container_focus: FocusFlag::new().with_name(name),
            f_input: FocusFlag::new().with_name(&format!("{name}.input")),
            was_focused: false,
        }
    }

    // ----- Host-assignable inputs -----

    /// Reassigns the bound value. Does not recompute the display; that
    /// happens on the next init/blur, mirroring how a host rebinding an
    /// input does not re-run the widget lifecycle.
    pub fn set_value(&mut self, value: RawValue) {
        self.value = value;
    }

    pub fn set_digit_info(&mut self, digit_info: DigitInfo) {
        self.digit_info = digit_info;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Sets the left icon. An empty string counts as no icon.
    pub fn set_left_icon(&mut self, icon: Option<String>) {
        self.left_icon = icon.filter(|icon| !icon.is_empty());
    }

    // ----- Selectors -----

    pub fn value(&self) -> &RawValue {
        &self.value
    }

    pub fn display(&self) -> &RawValue {
        &self.display
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn left_icon(&self) -> Option<&str> {
        self.left_icon.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.f_input.get()
    }

    pub fn edit(&self) -> &EditBuffer {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut EditBuffer {
        &mut self.edit
    }

    /// True iff an icon is set and it is a literal character rather than a
    /// `glyphicon-` class.
    pub fn show_glyph_char(&self) -> bool {
        self.left_icon.is_some() && !self.show_glyph_icon()
    }

    /// True iff an icon is set and it names a `glyphicon-` icon-font class.
    pub fn show_glyph_icon(&self) -> bool {
        self.left_icon
            .as_deref()
            .is_some_and(|icon| icon.contains("glyphicon-"))
    }

    // ----- Lifecycle -----

    /// Computes the first formatted display value. Called once after the
    /// widget's inputs are first available.
    pub fn init(&mut self) {
        let value = self.value.clone();
        self.display = self.format_value(&value);
    }

    /// Discards the formatted display and shows the raw value verbatim for
    /// editing. No recomputation and no error-flag change: the user should
    /// see their unmodified input, not a locale-formatted rendering.
    pub fn on_focus(&mut self) {
        self.display = self.value.clone();
        self.edit.load(self.display.to_string());
    }

    /// Finishes an edit: reformats `raw` into the display, updates the
    /// error flag, and returns the update to emit.
    ///
    /// The emitted value is the numeric coercion of `raw` when formatting
    /// succeeded, and `raw` unchanged when it failed — with one exception:
    /// an unset value always emits `0`, because the numeric coercion of
    /// "nothing" is `0` and existing hosts depend on receiving it.
    pub fn on_blur(&mut self, raw: RawValue) -> UpdateEvent {
        self.display = self.format_value(&raw);

        let emitted = if self.has_error {
            match raw {
                RawValue::Null => RawValue::Number(0.0),
                other => other,
            }
        } else {
            RawValue::Number(raw.to_number())
        };
        UpdateEvent::new(emitted)
    }

    /// Observes focus edges and runs the matching lifecycle hook.
    ///
    /// Call once per event-loop turn after focus may have moved. A gained
    /// edge switches the field into raw editing mode; a lost edge commits
    /// the edit buffer through [`NumberInputState::on_blur`].
    pub fn poll_focus_transition(&mut self) -> Option<FocusTransition> {
        let focused = self.is_focused();
        if focused == self.was_focused {
            return None;
        }
        self.was_focused = focused;
        if focused {
            self.on_focus();
            Some(FocusTransition::Focused)
        } else {
            let entered = RawValue::Text(self.edit.take());
            Some(FocusTransition::Blurred(self.on_blur(entered)))
        }
    }

    // ----- Formatting -----

    /// Formats `raw` under the current digit info and locale.
    ///
    /// On success clears the error flag and returns the formatted text; on
    /// failure logs the rejection, sets the error flag, and returns the raw
    /// value unchanged. Failures are swallowed here and never propagated.
    fn format_value(&mut self, raw: &RawValue) -> RawValue {
        match format_decimal(raw, &self.digit_info, &self.locale) {
            Ok(formatted) => {
                self.has_error = false;
                RawValue::Text(formatted)
            }
            Err(error) => {
                tracing::debug!(
                    value = %raw,
                    digit_info = ?self.digit_info,
                    %error,
                    "value could not be formatted as a decimal"
                );
                self.has_error = true;
                raw.clone()
            }
        }
    }
}

impl HasFocus for NumberInputState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_input);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use numfield_types::RawValue;

    fn widget() -> NumberInputState {
        let mut state = NumberInputState::new("test.amount");
        state.set_digit_info(DigitInfo::parse("1.5-5").expect("valid digit info"));
        state
    }

    fn a_timestamp() -> RawValue {
        RawValue::Timestamp(Utc.with_ymd_and_hms(2017, 3, 15, 12, 30, 0).unwrap())
    }

    const VALID_TEXT_INPUTS: &[(&str, &str)] = &[
        ("0.00001", "0.00001"),
        ("0.012", "0.01200"),
        ("0.123", "0.12300"),
        ("0.1", "0.10000"),
        ("1.1", "1.10000"),
        ("123", "123.00000"),
        ("12345", "12,345.00000"),
        ("12345.0003", "12,345.00030"),
        ("-12345.0003", "-12,345.00030"),
    ];

    #[test]
    fn init_formats_valid_inputs() {
        for (raw, expected) in VALID_TEXT_INPUTS {
            let mut state = widget();
            state.set_value(RawValue::from(*raw));
            state.init();
            assert_eq!(
                state.display(),
                &RawValue::Text(expected.to_string()),
                "formatting {raw:?}"
            );
            assert!(!state.has_error());
        }
    }

    #[test]
    fn init_formats_valid_numbers() {
        let mut state = widget();
        state.set_value(RawValue::Number(-12345.0003));
        state.init();
        assert_eq!(state.display(), &RawValue::Text("-12,345.00030".into()));
        assert!(!state.has_error());
    }

    #[test]
    fn init_passes_invalid_inputs_through_and_flags_them() {
        let invalid = [
            RawValue::from("abracadabra"),
            RawValue::from("123re"),
            RawValue::from("123.45.67"),
            RawValue::Null,
            a_timestamp(),
        ];
        for raw in invalid {
            let mut state = widget();
            state.set_value(raw.clone());
            state.init();
            assert_eq!(state.display(), &raw, "display for {raw:?}");
            assert!(state.has_error(), "error flag for {raw:?}");
        }
    }

    #[test]
    fn error_flag_clears_after_formatting_a_valid_value() {
        let mut state = widget();
        state.set_value(RawValue::from("abracadabra"));
        state.init();
        assert!(state.has_error());

        state.set_value(RawValue::from("123"));
        state.init();
        assert!(!state.has_error());
    }

    #[test]
    fn on_focus_drops_previously_formatted_valid_value() {
        let mut state = widget();
        state.set_value(RawValue::Number(123.0));
        state.init();
        assert_eq!(state.display(), &RawValue::Text("123.00000".into()));

        state.on_focus();
        assert_eq!(state.display(), &RawValue::Number(123.0));
    }

    #[test]
    fn on_focus_keeps_showing_an_invalid_value_verbatim() {
        let mut state = widget();
        state.set_value(RawValue::from("abracadabra"));
        state.init();

        state.on_focus();
        assert_eq!(state.display(), &RawValue::from("abracadabra"));
        assert!(state.has_error());
    }

    #[test]
    fn on_blur_reformats_valid_values_like_init() {
        for (raw, expected) in VALID_TEXT_INPUTS {
            let mut state = widget();
            let event = state.on_blur(RawValue::from(*raw));
            assert_eq!(state.display(), &RawValue::Text(expected.to_string()));
            assert!(!state.has_error());
            assert_eq!(
                event.value,
                RawValue::Number(raw.parse::<f64>().unwrap()),
                "emission for {raw:?}"
            );
        }
    }

    #[test]
    fn on_blur_passes_invalid_values_through() {
        for raw in [
            RawValue::from("abracadabra"),
            RawValue::from("123re"),
            RawValue::from("123.45.67"),
        ] {
            let mut state = widget();
            let event = state.on_blur(raw.clone());
            assert_eq!(state.display(), &raw);
            assert!(state.has_error());
            assert_eq!(event.value, raw, "emission for {raw:?}");
        }
    }

    #[test]
    fn on_blur_with_unset_value_emits_zero() {
        // The coercion quirk: formatting Null fails, but the emission is the
        // numeric coercion of "nothing", which is 0 rather than Null.
        let mut state = widget();
        let event = state.on_blur(RawValue::Null);
        assert_eq!(state.display(), &RawValue::Null);
        assert!(state.has_error());
        assert_eq!(event.value, RawValue::Number(0.0));
    }

    #[test]
    fn on_blur_with_timestamp_emits_it_unchanged() {
        let mut state = widget();
        let raw = a_timestamp();
        let event = state.on_blur(raw.clone());
        assert_eq!(state.display(), &raw);
        assert!(state.has_error());
        assert_eq!(event.value, raw);
    }

    #[test]
    fn blur_formatting_is_idempotent() {
        let mut state = widget();
        let first = state.on_blur(RawValue::from("12345.0003"));
        let first_display = state.display().clone();
        let second = state.on_blur(RawValue::from("12345.0003"));
        assert_eq!(first, second);
        assert_eq!(state.display(), &first_display);
    }

    #[test]
    fn glyph_icon_classification() {
        let mut state = widget();
        assert!(!state.show_glyph_char());
        assert!(!state.show_glyph_icon());

        state.set_left_icon(Some("glyphicon-time".into()));
        assert!(state.show_glyph_icon());
        assert!(!state.show_glyph_char());

        state.set_left_icon(Some("$".into()));
        assert!(state.show_glyph_char());
        assert!(!state.show_glyph_icon());

        state.set_left_icon(Some(String::new()));
        assert!(!state.show_glyph_char());
        assert!(!state.show_glyph_icon());
    }

    #[test]
    fn focus_transitions_drive_the_lifecycle() {
        let mut state = widget();
        state.set_value(RawValue::from("12345.0003"));
        state.init();
        assert_eq!(state.poll_focus_transition(), None);

        state.f_input.set(true);
        assert_eq!(state.poll_focus_transition(), Some(FocusTransition::Focused));
        assert_eq!(state.display(), &RawValue::from("12345.0003"));
        assert_eq!(state.edit().text(), "12345.0003");
        assert_eq!(state.poll_focus_transition(), None);

        state.edit_mut().backspace();
        state.f_input.set(false);
        let transition = state.poll_focus_transition().expect("blur edge");
        match transition {
            FocusTransition::Blurred(event) => {
                assert_eq!(event.value, RawValue::Number(12345.0));
                assert_eq!(state.display(), &RawValue::Text("12,345.00000".into()));
            }
            other => panic!("expected blur, got {other:?}"),
        }
    }
}
