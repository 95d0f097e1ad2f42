//! Visual state derivation.
//!
//! The control shows exactly one of four states. The state is never stored: it
//! is recomputed from the current text, the focus flag and the outcome of the
//! last validation every time it is asked for.

/// The visual state of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputState {
    /// Empty and not focused.
    #[default]
    Normal,
    /// Empty and focused.
    NormalActive,
    /// Has text that passed validation.
    Valid,
    /// Has text that failed validation.
    Error,
}

/// Three-way color selector shared by the border, the title and the field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Resting colors.
    #[default]
    Normal,
    /// Highlight colors for an active or valid control.
    Active,
    /// Error colors.
    Error,
}

impl InputState {
    /// The color selector for this state.
    pub fn tone(self) -> Tone {
        match self {
            InputState::Normal => Tone::Normal,
            InputState::NormalActive | InputState::Valid => Tone::Active,
            InputState::Error => Tone::Error,
        }
    }

    /// Whether the status icon is shown in this state.
    pub fn shows_status_icon(self) -> bool {
        matches!(self, InputState::Valid | InputState::Error)
    }
}

/// Returns true when `text` is absent or empty.
pub(crate) fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

/// Derives the state from text, focus and the last validation result.
///
/// Total over its inputs: every combination maps to exactly one state.
///
/// ```rust
/// use bubbletea_labeled_input::labeledinput::{compute_state, InputState};
///
/// assert_eq!(compute_state(None, true, false), InputState::NormalActive);
/// assert_eq!(compute_state(Some(""), false, true), InputState::Normal);
/// assert_eq!(compute_state(Some("abc"), false, true), InputState::Valid);
/// assert_eq!(compute_state(Some("abc"), true, false), InputState::Error);
/// ```
pub fn compute_state(text: Option<&str>, focused: bool, is_valid: bool) -> InputState {
    if is_blank(text) {
        if focused {
            InputState::NormalActive
        } else {
            InputState::Normal
        }
    } else if is_valid {
        InputState::Valid
    } else {
        InputState::Error
    }
}
