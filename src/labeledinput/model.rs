//! Core model for the labeled input component.

use super::control::ControlModel;
use super::field::Field;
use super::keymap::{default_key_map, KeyMap};
use super::property::InputTextProperty;
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::PasteErrMsg;
use super::validation::{FailPolicy, InputDelegate};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// A labeled text input with inline validation feedback.
///
/// The component is made of a floating title, a bordered row holding an
/// optional leading adornment, the editable field and a status icon, and a
/// bottom row with either an error or a hint plus an optional action button.
/// Which of these show, and in which colors, follows from the text, the focus
/// and what the [`InputDelegate`] said about the text last time it changed.
///
/// # Examples
///
/// ```rust
/// use bubbletea_labeled_input::labeledinput::{
///     new, InputState, InputTextProperty, LengthValidator,
/// };
///
/// let mut input = new()
///     .with_property(InputTextProperty::default().with_title("Email"))
///     .with_delegate(LengthValidator::new(4, 9));
/// input.set_hint_text(Some("Please enter your email"));
/// input.focus();
/// assert_eq!(input.state(), InputState::NormalActive);
///
/// input.insert_text("ab");
/// assert_eq!(input.state(), InputState::Error);
/// assert_eq!(input.error_message(), Some("Please enter valid text"));
/// ```
pub struct Model {
    pub(super) control: ControlModel,
    pub(super) field: Field,
    pub(super) property: InputTextProperty,
    /// Key bindings.
    pub key_map: KeyMap,
    pub(super) delegate: Option<Box<dyn InputDelegate>>,
    pub(super) paste_err: Option<String>,
}

/// Creates a labeled input with default settings, no delegate, and the
/// fail-open policy.
///
/// The returned model is not focused. Call `focus()` to accept keyboard input.
pub fn new() -> Model {
    Model {
        control: ControlModel::new(FailPolicy::Open),
        field: Field::new(),
        property: InputTextProperty::default(),
        key_map: default_key_map(),
        delegate: None,
        paste_err: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Sets the presentation settings.
    pub fn with_property(mut self, property: InputTextProperty) -> Self {
        self.set_property(property);
        self
    }

    /// Registers the delegate.
    pub fn with_delegate(mut self, delegate: impl InputDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Sets what happens when the text changes without a delegate.
    pub fn with_fail_policy(mut self, policy: FailPolicy) -> Self {
        self.control.fail_policy = policy;
        self
    }

    /// Sets the key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command resolves to a [`PasteMsg`](super::types::PasteMsg) with the
/// clipboard text, or a [`PasteErrMsg`] when the clipboard cannot be read.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
