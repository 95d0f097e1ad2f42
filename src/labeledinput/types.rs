//! Messages understood by the labeled input.

use bubbletea_rs::Msg;

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Activates the action button, as if the user tapped it.
#[derive(Debug, Clone, Copy)]
pub struct ActionTapMsg;

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ActionTapMsg> for Msg {
    fn from(msg: ActionTapMsg) -> Self {
        Box::new(msg) as Msg
    }
}
