//! The runtime model behind the control.
//!
//! [`ControlModel`] holds only what changes while the user interacts: text,
//! focus, and the result of the last validation. Presentation lives in
//! [`InputTextProperty`](super::property::InputTextProperty) and never feeds
//! back into state derivation.

use super::state::{compute_state, is_blank, InputState};
use super::validation::{FailPolicy, InputDelegate, ValidationOutcome};

/// Text, focus and validation result of one control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlModel {
    /// Current text. `None` until text is entered or after a reset.
    pub text: Option<String>,
    /// Whether the field is being edited or is selected.
    pub focused: bool,
    /// Result of the last validation.
    pub is_valid: bool,
    /// Error message from the last failed validation.
    pub error_message: Option<String>,
    /// Title of the action button.
    pub action_title: Option<String>,
    /// Hint shown below the field when no error is displayed.
    pub hint_text: Option<String>,
    /// Outcome used when no delegate is registered.
    pub fail_policy: FailPolicy,
}

impl ControlModel {
    /// A model with default values and the given fail policy.
    pub fn new(fail_policy: FailPolicy) -> Self {
        Self {
            fail_policy,
            ..Self::default()
        }
    }

    /// The derived visual state.
    pub fn state(&self) -> InputState {
        compute_state(self.text.as_deref(), self.focused, self.is_valid)
    }

    /// Whether there is non-empty text.
    pub fn has_text(&self) -> bool {
        !is_blank(self.text.as_deref())
    }

    /// Whether a non-empty error message is stored.
    pub fn has_error_message(&self) -> bool {
        !is_blank(self.error_message.as_deref())
    }

    /// Whether a non-empty hint is stored.
    pub fn has_hint(&self) -> bool {
        !is_blank(self.hint_text.as_deref())
    }

    /// Whether the action button has a non-empty title.
    pub fn has_action_button(&self) -> bool {
        !is_blank(self.action_title.as_deref())
    }

    /// The floating title shows while focused with text.
    pub fn is_title_visible(&self) -> bool {
        self.focused && self.has_text()
    }

    /// Replaces the text without validating it.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Sets the hint text.
    pub fn set_hint_text(&mut self, hint: Option<String>) {
        self.hint_text = hint;
    }

    /// Marks the field as focused.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Marks the field as not focused.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Stores `text`, validates it, and applies the outcome.
    ///
    /// Without a delegate the model's [`FailPolicy`] decides the outcome.
    /// Returns the outcome that was applied.
    pub fn text_changed(
        &mut self,
        text: Option<String>,
        delegate: Option<&mut (dyn InputDelegate + '_)>,
    ) -> ValidationOutcome {
        self.text = text;
        let outcome = match delegate {
            Some(delegate) => {
                let outcome = delegate.validate(self.text.as_deref());
                tracing::trace!(valid = outcome.is_valid(), "delegate validated text");
                outcome
            }
            None => {
                tracing::trace!(policy = ?self.fail_policy, "no delegate, using fail policy");
                self.fail_policy.outcome()
            }
        };
        self.apply_outcome(&outcome);
        outcome
    }

    /// Applies a validation outcome.
    pub fn apply_outcome(&mut self, outcome: &ValidationOutcome) {
        self.is_valid = outcome.is_valid();
        self.error_message = outcome.error_message().map(str::to_string);
        self.action_title = outcome.action_title().map(str::to_string);
    }

    /// Clears text, error message and validity. Focus, hint and action title
    /// are left as they are.
    pub fn reset(&mut self) {
        self.text = None;
        self.error_message = None;
        self.is_valid = false;
    }
}
