//! Event handling for the labeled input.

use super::directives::{render, VisualDirectives};
use super::model::{paste, Model};
use super::property::InputTextProperty;
use super::state::InputState;
use super::types::{ActionTapMsg, PasteErrMsg, PasteMsg};
use super::validation::{InputDelegate, ValidationOutcome};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// The current text, `None` after a reset or before any text was set.
    pub fn text(&self) -> Option<&str> {
        self.control.text.as_deref()
    }

    /// Replaces the text without validating it or notifying the delegate.
    ///
    /// The state is derived from the new text and the previous validation
    /// result. Use [`text_changed`](Self::text_changed) afterwards to validate.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.observe_state(|m| {
            match text {
                Some(t) => m.field.set_value(t),
                None => m.field.clear(),
            }
            // the field may have truncated to the char limit
            m.control.set_text(text.map(|_| m.field.value()));
        });
    }

    /// Runs the text-changed pipeline on the current text: validate, apply the
    /// outcome, then notify the delegate.
    ///
    /// Absent text stays absent: after a reset or `set_text(None)` the
    /// delegate is asked about `None`, not an empty string.
    pub fn text_changed(&mut self) -> ValidationOutcome {
        let text = if self.control.text.is_none() && self.field.is_empty() {
            None
        } else {
            Some(self.field.value())
        };
        let outcome = self.observe_state(|m| {
            let delegate = m
                .delegate
                .as_deref_mut()
                .map(|d| d as &mut dyn InputDelegate);
            m.control.text_changed(text, delegate)
        });
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.text_did_change(self.control.text.as_deref());
        }
        outcome
    }

    /// Inserts text at the cursor as if typed, then runs the text-changed
    /// pipeline. Nothing happens when the character limit leaves no room.
    pub fn insert_text(&mut self, s: &str) {
        if self.field.insert(s) {
            self.text_changed();
        }
    }

    /// Gives the field focus.
    pub fn focus(&mut self) {
        self.observe_state(|m| m.control.focus());
    }

    /// Takes focus away from the field.
    pub fn blur(&mut self) {
        self.observe_state(|m| m.control.blur());
    }

    /// Whether the field is focused.
    pub fn focused(&self) -> bool {
        self.control.focused
    }

    /// Clears text and error. Focus is unchanged.
    pub fn reset(&mut self) {
        self.observe_state(|m| {
            m.field.clear();
            m.control.reset();
        });
        self.paste_err = None;
    }

    /// Sets the hint shown below the field while no error is displayed.
    pub fn set_hint_text(&mut self, hint: Option<&str>) {
        self.control.set_hint_text(hint.map(str::to_string));
    }

    /// The hint text.
    pub fn hint_text(&self) -> Option<&str> {
        self.control.hint_text.as_deref()
    }

    /// The error message from the last validation.
    pub fn error_message(&self) -> Option<&str> {
        self.control.error_message.as_deref()
    }

    /// The action button title from the last validation.
    pub fn action_title(&self) -> Option<&str> {
        self.control.action_title.as_deref()
    }

    /// Whether the last validation passed.
    pub fn is_valid(&self) -> bool {
        self.control.is_valid
    }

    /// The last clipboard error, if any.
    pub fn paste_error(&self) -> Option<&str> {
        self.paste_err.as_deref()
    }

    /// The derived visual state.
    pub fn state(&self) -> InputState {
        self.control.state()
    }

    /// The visual directives for the current model.
    pub fn directives(&self) -> VisualDirectives {
        render(&self.control)
    }

    /// Cursor position in graphemes.
    pub fn position(&self) -> usize {
        self.field.position()
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.field.set_cursor(pos);
    }

    /// Replaces the presentation settings.
    ///
    /// A lower character limit that shortens the text revalidates it.
    pub fn set_property(&mut self, property: InputTextProperty) {
        let before = self.field.len();
        self.field.set_char_limit(property.char_limit);
        self.property = property;
        if self.control.text.is_some() && self.field.len() != before {
            self.text_changed();
        }
    }

    /// The presentation settings.
    pub fn property(&self) -> &InputTextProperty {
        &self.property
    }

    /// Replaces the delegate. `None` falls back to the fail policy.
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn InputDelegate>>) {
        self.delegate = delegate;
    }

    /// Activates the action button. Ignored while the button is hidden.
    /// Returns whether the delegate was notified.
    pub fn tap_action(&mut self) -> bool {
        if !self.control.has_action_button() {
            return false;
        }
        tracing::debug!(title = ?self.control.action_title, "action activated");
        match self.delegate.as_mut() {
            Some(delegate) => {
                delegate.action_did_tap();
                true
            }
            None => false,
        }
    }

    /// Handles messages: key presses and pastes while focused, and action
    /// taps at any time.
    ///
    /// ```rust
    /// use bubbletea_labeled_input::labeledinput::new;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut input = new();
    /// input.focus();
    /// input.update(Box::new(KeyMsg { key: KeyCode::Char('a'), modifiers: KeyModifiers::NONE }));
    /// assert_eq!(input.text(), Some("a"));
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<ActionTapMsg>().is_some() {
            self.tap_action();
            return None;
        }

        if !self.control.focused {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.paste_err = None;
            self.insert_text(&paste_msg.0);
        } else if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::debug!(error = %paste_err.0, "paste failed");
            self.paste_err = Some(paste_err.0.clone());
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(key_msg, &self.key_map.submit)
            || matches_binding(key_msg, &self.key_map.dismiss)
        {
            self.blur();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.activate_action) {
            self.tap_action();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.paste) {
            return Some(paste());
        }

        if self.handle_deletion_keys(key_msg) {
            self.text_changed();
            return None;
        }
        if self.handle_movement_keys(key_msg) {
            return None;
        }

        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_text(ch.encode_utf8(&mut [0; 4]));
            }
        }
        None
    }

    /// Returns true when the text changed.
    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if matches_binding(key_msg, &km.delete_word_backward) {
            self.field.delete_word_backward()
        } else if matches_binding(key_msg, &km.delete_word_forward) {
            self.field.delete_word_forward()
        } else if matches_binding(key_msg, &km.delete_character_backward) {
            self.field.delete_backward()
        } else if matches_binding(key_msg, &km.delete_character_forward) {
            self.field.delete_forward()
        } else if matches_binding(key_msg, &km.delete_after_cursor) {
            self.field.delete_after_cursor()
        } else if matches_binding(key_msg, &km.delete_before_cursor) {
            self.field.delete_before_cursor()
        } else {
            false
        }
    }

    /// Returns true when a movement binding matched.
    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if matches_binding(key_msg, &km.word_backward) {
            self.field.word_backward();
        } else if matches_binding(key_msg, &km.character_backward) {
            self.field.move_left();
        } else if matches_binding(key_msg, &km.word_forward) {
            self.field.word_forward();
        } else if matches_binding(key_msg, &km.character_forward) {
            self.field.move_right();
        } else if matches_binding(key_msg, &km.line_start) {
            self.field.cursor_start();
        } else if matches_binding(key_msg, &km.line_end) {
            self.field.cursor_end();
        } else {
            return false;
        }
        true
    }

    /// Runs `f` and logs when the derived state differs afterwards.
    fn observe_state<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let before = self.control.state();
        let out = f(self);
        let after = self.control.state();
        if before != after {
            tracing::debug!(from = ?before, to = ?after, "input state changed");
        }
        out
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
