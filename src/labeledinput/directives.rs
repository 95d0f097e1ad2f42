//! Mapping from the runtime model to what the view should show.

use super::control::ControlModel;
use super::state::{InputState, Tone};

/// Which status icon to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    /// The text passed validation.
    Valid,
    /// The text failed validation.
    Invalid,
}

/// Everything the view layer needs to draw the control.
///
/// Produced by [`render`]; contains no styling, only selectors, flags and
/// label texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualDirectives {
    /// The derived state.
    pub state: InputState,
    /// Border color selector.
    pub border: Tone,
    /// Title color selector.
    pub title: Tone,
    /// Field text color selector.
    pub text: Tone,
    /// Whether the floating title is shown.
    pub title_visible: bool,
    /// The status icon, `None` when hidden.
    pub status_icon: Option<StatusIcon>,
    /// Whether the error row is shown.
    pub error_visible: bool,
    /// Whether the hint row is shown.
    pub hint_visible: bool,
    /// Whether the action button is shown.
    pub action_visible: bool,
    /// Whether the row holding error, hint and action is shown at all.
    pub bottom_row_visible: bool,
    /// Error row text.
    pub error_text: Option<String>,
    /// Hint row text.
    pub hint_text: Option<String>,
    /// Action button title.
    pub action_title: Option<String>,
}

impl VisualDirectives {
    /// Whether the status icon is shown.
    pub fn status_visible(&self) -> bool {
        self.status_icon.is_some()
    }
}

/// Derives the visual directives for `model`.
///
/// Pure and total; calling it twice on the same model yields equal results.
pub fn render(model: &ControlModel) -> VisualDirectives {
    let state = model.state();
    let tone = state.tone();

    let status_icon = state.shows_status_icon().then(|| {
        if model.is_valid {
            StatusIcon::Valid
        } else {
            StatusIcon::Invalid
        }
    });

    let error_visible = state == InputState::Error && model.has_error_message();
    let hint_visible = !error_visible && model.has_hint();
    let action_visible = model.has_action_button();

    VisualDirectives {
        state,
        border: tone,
        title: tone,
        text: tone,
        title_visible: model.is_title_visible(),
        status_icon,
        error_visible,
        hint_visible,
        action_visible,
        bottom_row_visible: error_visible || hint_visible || action_visible,
        error_text: model.error_message.clone(),
        hint_text: model.hint_text.clone(),
        action_title: model.action_title.clone(),
    }
}
