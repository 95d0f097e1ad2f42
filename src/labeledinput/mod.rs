//! Labeled text input with inline validation feedback.
//!
//! A single-line input framed by a title above it and a feedback row below
//! it. An [`InputDelegate`] decides whether the text is acceptable every time
//! it changes; the control turns that answer, the text and the focus into one
//! of four [`InputState`]s and draws the border, title, status icon, error or
//! hint, and action button to match.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_labeled_input::labeledinput::{
//!     new, FnDelegate, InputState, InputTextProperty, ValidationOutcome,
//! };
//!
//! let mut input = new()
//!     .with_property(InputTextProperty::default().with_title("Email"))
//!     .with_delegate(FnDelegate(|text: Option<&str>| match text {
//!         Some(t) if t.contains('@') => ValidationOutcome::valid(),
//!         _ => ValidationOutcome::invalid("Not an email address"),
//!     }));
//!
//! input.focus();
//! input.insert_text("me@example.com");
//! assert_eq!(input.state(), InputState::Valid);
//! assert!(input.directives().title_visible);
//! ```
//!
//! # States
//!
//! | State | Text | Focus | Valid |
//! |-------|------|-------|-------|
//! | `Normal` | empty | no | any |
//! | `NormalActive` | empty | yes | any |
//! | `Valid` | non-empty | any | yes |
//! | `Error` | non-empty | any | no |
//!
//! The pure pieces, [`compute_state`] and [`render`], can be used without the
//! component by driving a [`ControlModel`] directly.

pub mod control;
pub mod directives;
pub mod field;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod property;
pub mod state;
pub mod types;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use control::ControlModel;
pub use directives::{render, StatusIcon, VisualDirectives};
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use property::{InputTextProperty, ToneColors, ToneStyles};
pub use state::{compute_state, InputState, Tone};
pub use types::{ActionTapMsg, PasteErrMsg, PasteMsg};
pub use validation::{FailPolicy, FnDelegate, InputDelegate, LengthValidator, ValidationOutcome};
