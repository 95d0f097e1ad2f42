#![warn(missing_docs)]

//! # bubbletea-labeled-input
//!
//! A labeled single-line text input with inline validation feedback for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! The input is drawn as a floating title, a bordered row holding the field
//! and a status icon, and a bottom row carrying either a hint or an error
//! message next to an optional action button. The component follows the Elm
//! Architecture with `update()` and `view()` methods, like the other
//! bubbletea-rs components.
//!
//! Validation is delegated: an [`InputDelegate`](labeledinput::InputDelegate)
//! is asked about the text on every change and answers with a
//! [`ValidationOutcome`](labeledinput::ValidationOutcome). From that answer,
//! the text, and the focus flag the control derives one of four
//! [`InputState`](labeledinput::InputState)s and a set of
//! [`VisualDirectives`](labeledinput::VisualDirectives) describing what to
//! show. Both derivations are pure functions and can be used on their own.
//!
//! ## Focus Management
//!
//! ```rust
//! use bubbletea_labeled_input::prelude::*;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = labeled_input_new();
//! handle_focus(&mut input);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_labeled_input::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     email: LabeledInput,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut email = labeled_input_new()
//!             .with_property(InputTextProperty::default().with_title("Email"))
//!             .with_delegate(LengthValidator::new(4, 9));
//!         email.set_hint_text(Some("Please enter your email"));
//!         email.focus();
//!         (Self { email }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.email.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.email.view()
//!     }
//! }
//! ```

pub mod key;
pub mod labeledinput;
pub mod runeutil;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
///
/// - `focus()` marks the component as receiving keyboard input and may return
///   a command to run.
/// - `blur()` marks it as no longer receiving input.
/// - `focused()` reports the current state.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns whether the component is focused.
    fn focused(&self) -> bool;
}

pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use labeledinput::{
    compute_state, default_key_map as labeled_input_default_key_map, new as labeled_input_new,
    render, ActionTapMsg, ControlModel, FailPolicy, FnDelegate, InputDelegate, InputState,
    InputTextProperty, KeyMap as LabeledInputKeyMap, LengthValidator, Model as LabeledInput,
    PasteErrMsg, PasteMsg, StatusIcon, Tone, ValidationOutcome, VisualDirectives,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_labeled_input::prelude::*;
///
/// let input: LabeledInput = labeled_input_new();
/// assert_eq!(input.state(), InputState::Normal);
/// ```
pub mod prelude {
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::labeledinput::{
        compute_state, default_key_map as labeled_input_default_key_map,
        new as labeled_input_new, render, ActionTapMsg, ControlModel, FailPolicy, FnDelegate,
        InputDelegate, InputState, InputTextProperty, KeyMap as LabeledInputKeyMap,
        LengthValidator, Model as LabeledInput, PasteErrMsg, PasteMsg, StatusIcon, Tone,
        ValidationOutcome, VisualDirectives,
    };
    pub use crate::Component;
}
