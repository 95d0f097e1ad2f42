//! Validation outcomes and the delegate seam.
//!
//! The control never decides on its own whether text is acceptable. It hands
//! the current text to an [`InputDelegate`] and renders whatever
//! [`ValidationOutcome`] comes back.

/// Result of validating the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The text is acceptable. An action button may still be offered.
    Valid {
        /// Title of the action button, if one should be shown.
        action_title: Option<String>,
    },
    /// The text is rejected.
    Invalid {
        /// Message for the error row.
        error_message: Option<String>,
        /// Title of the action button, if one should be shown.
        action_title: Option<String>,
    },
}

impl ValidationOutcome {
    /// A valid outcome without an action.
    pub fn valid() -> Self {
        ValidationOutcome::Valid { action_title: None }
    }

    /// A valid outcome offering an action.
    pub fn valid_with_action(action_title: impl Into<String>) -> Self {
        ValidationOutcome::Valid {
            action_title: Some(action_title.into()),
        }
    }

    /// An invalid outcome with an error message.
    pub fn invalid(error_message: impl Into<String>) -> Self {
        ValidationOutcome::Invalid {
            error_message: Some(error_message.into()),
            action_title: None,
        }
    }

    /// An invalid outcome with an error message and an action.
    pub fn invalid_with_action(
        error_message: impl Into<String>,
        action_title: impl Into<String>,
    ) -> Self {
        ValidationOutcome::Invalid {
            error_message: Some(error_message.into()),
            action_title: Some(action_title.into()),
        }
    }

    /// Whether the text passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    /// The error message. Always `None` for valid outcomes.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Invalid { error_message, .. } => error_message.as_deref(),
            ValidationOutcome::Valid { .. } => None,
        }
    }

    /// The action button title, for either variant.
    pub fn action_title(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid { action_title }
            | ValidationOutcome::Invalid { action_title, .. } => action_title.as_deref(),
        }
    }
}

/// What happens when text changes and no delegate is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailPolicy {
    /// Treat the text as valid with no error and no action.
    #[default]
    Open,
    /// Treat the text as invalid with no error message and no action.
    Closed,
}

impl FailPolicy {
    /// The outcome used in place of a delegate's answer.
    pub fn outcome(self) -> ValidationOutcome {
        match self {
            FailPolicy::Open => ValidationOutcome::valid(),
            FailPolicy::Closed => ValidationOutcome::Invalid {
                error_message: None,
                action_title: None,
            },
        }
    }
}

/// Supplies validation and receives notifications from the control.
///
/// Only [`validate`](InputDelegate::validate) is required. Delegates must be
/// `Send` because bubbletea-rs models are moved across threads by the runtime.
///
/// ```rust
/// use bubbletea_labeled_input::labeledinput::{InputDelegate, ValidationOutcome};
///
/// struct NonEmpty;
///
/// impl InputDelegate for NonEmpty {
///     fn validate(&mut self, text: Option<&str>) -> ValidationOutcome {
///         match text {
///             Some(t) if !t.trim().is_empty() => ValidationOutcome::valid(),
///             _ => ValidationOutcome::invalid("Required"),
///         }
///     }
/// }
/// ```
pub trait InputDelegate: Send {
    /// Validates `text`. Called on every text change.
    fn validate(&mut self, text: Option<&str>) -> ValidationOutcome;

    /// Called after the control has applied a text change.
    fn text_did_change(&mut self, _text: Option<&str>) {}

    /// Called when the action button is activated.
    fn action_did_tap(&mut self) {}
}

/// Wraps a closure as a validate-only delegate.
pub struct FnDelegate<F>(
    /// The validation closure.
    pub F,
);

impl<F> InputDelegate for FnDelegate<F>
where
    F: FnMut(Option<&str>) -> ValidationOutcome + Send,
{
    fn validate(&mut self, text: Option<&str>) -> ValidationOutcome {
        (self.0)(text)
    }
}

/// Accepts text whose character count lies in an inclusive range.
///
/// Rejected non-empty text offers a retry action; rejected empty text does
/// not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthValidator {
    /// Minimum accepted character count.
    pub min: usize,
    /// Maximum accepted character count.
    pub max: usize,
    /// Message shown for rejected text.
    pub error_message: String,
    /// Action offered for rejected non-empty text.
    pub retry_title: Option<String>,
}

impl LengthValidator {
    /// Accepts `min..=max` characters.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            error_message: "Please enter valid text".to_string(),
            retry_title: Some("Try again?".to_string()),
        }
    }

    /// Sets the error message.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Sets or removes the retry action.
    pub fn with_retry_title(mut self, title: Option<String>) -> Self {
        self.retry_title = title;
        self
    }

    /// Checks `text` against the range.
    pub fn check(&self, text: Option<&str>) -> ValidationOutcome {
        let count = text.map_or(0, |t| t.chars().count());
        if (self.min..=self.max).contains(&count) {
            return ValidationOutcome::valid();
        }
        let action_title = if count > 0 {
            self.retry_title.clone()
        } else {
            None
        };
        ValidationOutcome::Invalid {
            error_message: Some(self.error_message.clone()),
            action_title,
        }
    }
}

impl InputDelegate for LengthValidator {
    fn validate(&mut self, text: Option<&str>) -> ValidationOutcome {
        self.check(text)
    }
}
