//! Tests for the labeled input component.

use super::*;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Validated(Option<String>),
    Changed(Option<String>),
    ActionTapped,
}

/// Delegate that follows the email demo rules and records every call.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl InputDelegate for Recorder {
    fn validate(&mut self, text: Option<&str>) -> ValidationOutcome {
        self.events
            .lock()
            .unwrap()
            .push(Event::Validated(text.map(str::to_string)));
        let count = text.map_or(0, |t| t.chars().count());
        match count {
            4..=9 => ValidationOutcome::valid_with_action("Try again?"),
            0 => ValidationOutcome::invalid("Please enter valid text"),
            _ => ValidationOutcome::invalid_with_action("Please enter valid text", "Try again?"),
        }
    }

    fn text_did_change(&mut self, text: Option<&str>) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Changed(text.map(str::to_string)));
    }

    fn action_did_tap(&mut self) {
        self.events.lock().unwrap().push(Event::ActionTapped);
    }
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(ch: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn type_str(input: &mut Model, s: &str) {
    for ch in s.chars() {
        input.update(key(KeyCode::Char(ch)));
    }
}

fn plain(s: &str) -> String {
    lipgloss::strip_ansi(s).to_string()
}

fn email_input() -> (Model, Recorder) {
    let recorder = Recorder::default();
    let input = new()
        .with_property(InputTextProperty::default().with_title("Email"))
        .with_delegate(recorder.clone());
    (input, recorder)
}

#[test]
fn test_new_default_values() {
    let input = new();
    assert_eq!(input.text(), None);
    assert!(!input.focused());
    assert!(!input.is_valid());
    assert_eq!(input.state(), InputState::Normal);
    assert_eq!(input.error_message(), None);
    assert_eq!(input.action_title(), None);
    assert_eq!(input.hint_text(), None);
    assert_eq!(input.position(), 0);
}

#[test]
fn test_focus_empty_shows_hint() {
    let (mut input, _) = email_input();
    input.set_hint_text(Some("Please enter your email"));
    input.focus();

    let d = input.directives();
    assert_eq!(d.state, InputState::NormalActive);
    assert!(!d.title_visible);
    assert!(!d.error_visible);
    assert!(d.hint_visible);

    let view = plain(&input.view());
    assert!(view.contains("Please enter your email"));
    assert!(!view.contains("Email\n"));
}

#[test]
fn test_short_text_is_error_without_action() {
    let mut input = new().with_delegate(FnDelegate(|_: Option<&str>| {
        ValidationOutcome::invalid("Please enter valid text")
    }));
    input.focus();
    type_str(&mut input, "ab");

    let d = input.directives();
    assert_eq!(d.state, InputState::Error);
    assert!(d.error_visible);
    assert_eq!(d.error_text.as_deref(), Some("Please enter valid text"));
    assert!(!d.action_visible);
    assert_eq!(d.status_icon, Some(StatusIcon::Invalid));

    let view = plain(&input.view());
    assert!(view.contains("Please enter valid text"));
    assert!(view.contains(property::DEFAULT_INVALID_ICON));
}

#[test]
fn test_valid_text_shows_icon_and_action() {
    let (mut input, _) = email_input();
    input.focus();
    type_str(&mut input, "abcd");

    let d = input.directives();
    assert_eq!(d.state, InputState::Valid);
    assert_eq!(d.status_icon, Some(StatusIcon::Valid));
    assert!(d.action_visible);
    assert_eq!(d.action_title.as_deref(), Some("Try again?"));
    assert!(d.title_visible);

    let view = plain(&input.view());
    assert!(view.starts_with("Email"));
    assert!(view.contains("abcd"));
    assert!(view.contains(property::DEFAULT_VALID_ICON));
    assert!(view.contains("Try again?"));
}

#[test]
fn test_too_long_shows_error_and_action_together() {
    let (mut input, _) = email_input();
    input.focus();
    type_str(&mut input, "abcdefghij");

    let d = input.directives();
    assert_eq!(d.state, InputState::Error);
    assert!(d.error_visible);
    assert!(d.action_visible);
    assert!(d.bottom_row_visible);

    let view = plain(&input.view());
    let last = view.lines().last().unwrap_or_default();
    assert!(last.contains("Please enter valid text"));
    assert!(last.contains("Try again?"));
}

#[test]
fn test_delegate_called_on_every_change_then_notified() {
    let (mut input, recorder) = email_input();
    input.focus();
    type_str(&mut input, "ab");
    input.update(key(KeyCode::Backspace));

    assert_eq!(
        recorder.events(),
        vec![
            Event::Validated(Some("a".into())),
            Event::Changed(Some("a".into())),
            Event::Validated(Some("ab".into())),
            Event::Changed(Some("ab".into())),
            Event::Validated(Some("a".into())),
            Event::Changed(Some("a".into())),
        ]
    );
}

#[test]
fn test_movement_does_not_validate() {
    let (mut input, recorder) = email_input();
    input.focus();
    type_str(&mut input, "abc");
    let before = recorder.events().len();

    input.update(key(KeyCode::Left));
    input.update(key(KeyCode::Home));
    input.update(ctrl('e'));
    assert_eq!(recorder.events().len(), before);
    assert_eq!(input.position(), 3);

    // backspace at the start changes nothing
    input.update(key(KeyCode::Home));
    input.update(key(KeyCode::Backspace));
    assert_eq!(recorder.events().len(), before);
}

#[test]
fn test_unfocused_ignores_keys() {
    let (mut input, recorder) = email_input();
    type_str(&mut input, "abc");
    assert_eq!(input.text(), None);
    assert!(recorder.events().is_empty());
}

#[test]
fn test_enter_and_esc_resign_focus() {
    let (mut input, _) = email_input();
    input.focus();
    type_str(&mut input, "abcd");
    assert!(input.directives().title_visible);

    input.update(key(KeyCode::Enter));
    assert!(!input.focused());
    assert!(!input.directives().title_visible);
    assert_eq!(input.state(), InputState::Valid);

    input.focus();
    input.update(key(KeyCode::Esc));
    assert!(!input.focused());
}

#[test]
fn test_reset_keeps_focus() {
    let (mut input, recorder) = email_input();
    input.focus();
    type_str(&mut input, "ab");
    assert_eq!(input.state(), InputState::Error);
    let before = recorder.events().len();

    input.reset();
    assert_eq!(input.text(), None);
    assert_eq!(input.error_message(), None);
    assert!(input.focused());
    assert_eq!(input.state(), InputState::NormalActive);
    assert_eq!(input.position(), 0);
    // reset does not consult the delegate
    assert_eq!(recorder.events().len(), before);

    input.blur();
    input.reset();
    assert_eq!(input.state(), InputState::Normal);
}

#[test]
fn test_set_text_does_not_validate() {
    let (mut input, recorder) = email_input();
    input.set_text(Some("hello"));
    assert_eq!(input.text(), Some("hello"));
    assert!(recorder.events().is_empty());
    // no validation has run yet, so the default invalid result applies
    assert_eq!(input.state(), InputState::Error);
    assert!(!input.directives().error_visible);

    input.text_changed();
    assert_eq!(input.state(), InputState::Valid);

    input.set_text(None);
    assert_eq!(input.text(), None);
    assert_eq!(input.state(), InputState::Normal);
}

#[test]
fn test_fail_open_without_delegate() {
    let mut input = new();
    input.focus();
    type_str(&mut input, "x");
    assert_eq!(input.state(), InputState::Valid);
    assert_eq!(input.error_message(), None);
    assert_eq!(input.action_title(), None);
}

#[test]
fn test_fail_closed_without_delegate() {
    let mut input = new().with_fail_policy(FailPolicy::Closed);
    input.focus();
    type_str(&mut input, "x");
    assert_eq!(input.state(), InputState::Error);
    assert!(!input.directives().error_visible);
}

#[test]
fn test_action_tap_only_when_visible() {
    let (mut input, recorder) = email_input();
    input.focus();
    assert!(!input.tap_action());

    type_str(&mut input, "abcd");
    input.update(ctrl('o'));
    assert_eq!(recorder.events().last(), Some(&Event::ActionTapped));

    input.blur();
    input.update(Box::new(ActionTapMsg));
    let taps = recorder
        .events()
        .iter()
        .filter(|e| **e == Event::ActionTapped)
        .count();
    assert_eq!(taps, 2);
}

#[test]
fn test_paste_message_inserts_and_validates() {
    let (mut input, recorder) = email_input();
    input.focus();
    input.update(Box::new(PasteMsg("pasted".into())));
    assert_eq!(input.text(), Some("pasted"));
    assert_eq!(input.state(), InputState::Valid);
    assert_eq!(recorder.events().len(), 2);

    input.update(Box::new(PasteErrMsg("no clipboard".into())));
    assert_eq!(input.paste_error(), Some("no clipboard"));
    assert_eq!(input.text(), Some("pasted"));
}

#[test]
fn test_ctrl_v_returns_paste_command() {
    let (mut input, _) = email_input();
    input.focus();
    assert!(input.update(ctrl('v')).is_some());
}

#[test]
fn test_char_limit_applies_to_typing() {
    let mut input = new().with_property(InputTextProperty::default().with_char_limit(3));
    input.focus();
    type_str(&mut input, "abcdef");
    assert_eq!(input.text(), Some("abc"));
}

#[test]
fn test_control_modifiers_do_not_insert() {
    let (mut input, recorder) = email_input();
    input.focus();
    input.update(Box::new(KeyMsg {
        key: KeyCode::Char('z'),
        modifiers: KeyModifiers::ALT,
    }));
    assert_eq!(input.text(), None);
    assert!(recorder.events().is_empty());
}

#[test]
fn test_word_delete_runs_pipeline() {
    let (mut input, _) = email_input();
    input.focus();
    type_str(&mut input, "hello world");
    input.update(ctrl('w'));
    assert_eq!(input.text(), Some("hello "));
    assert_eq!(input.state(), InputState::Valid);
}

#[test]
fn test_placeholder_when_empty() {
    let input = new().with_property(InputTextProperty::default().with_placeholder("Type here"));
    let view = plain(&input.view());
    assert!(view.contains("Type here"));
}

#[test]
fn test_view_without_border_is_single_row() {
    let mut input = new().with_property(
        InputTextProperty::default()
            .with_border(false, false)
            .with_padding(0)
            .with_leading(">"),
    );
    input.set_text(Some("abc"));
    assert_eq!(plain(&input.view()), "> abc ✗");
}

#[test]
fn test_view_is_stable() {
    let (mut input, _) = email_input();
    input.focus();
    type_str(&mut input, "abcdefghij");
    assert_eq!(input.view(), input.view());
    assert_eq!(input.directives(), input.directives());
}

#[test]
fn test_component_trait() {
    fn cycle<T: Component>(c: &mut T) {
        assert!(c.focus().is_none());
        assert!(c.focused());
        c.blur();
        assert!(!c.focused());
    }
    let mut input = new();
    cycle(&mut input);
}

#[test]
fn test_set_property_truncates_text() {
    let mut input = new();
    input.set_text(Some("abcdef"));
    input.set_property(InputTextProperty::default().with_char_limit(2));
    assert_eq!(input.text(), Some("ab"));
    assert_eq!(input.property().char_limit, 2);
}

#[test]
fn test_replace_delegate() {
    let mut input = new();
    input.focus();
    input.set_delegate(Some(Box::new(FnDelegate(|_: Option<&str>| {
        ValidationOutcome::invalid("nope")
    }))));
    type_str(&mut input, "a");
    assert_eq!(input.error_message(), Some("nope"));

    input.set_delegate(None);
    type_str(&mut input, "b");
    assert!(input.is_valid());
}


#[test]
fn test_lower_char_limit_revalidates_truncated_text() {
    let mut input = new().with_delegate(LengthValidator::new(4, 9));
    input.focus();
    input.insert_text("abcdef");
    assert_eq!(input.state(), InputState::Valid);

    input.set_property(InputTextProperty::default().with_char_limit(2));
    assert_eq!(input.text(), Some("ab"));
    assert_eq!(input.state(), InputState::Error);
    assert_eq!(input.error_message(), Some("Please enter valid text"));
    assert!(input.directives().error_visible);
}

#[test]
fn test_same_char_limit_does_not_revalidate() {
    let (mut input, recorder) = email_input();
    input.focus();
    type_str(&mut input, "abcd");
    let calls = recorder.events().len();

    input.set_property(InputTextProperty::default().with_char_limit(20));
    assert_eq!(input.text(), Some("abcd"));
    assert_eq!(recorder.events().len(), calls);
}

#[test]
fn test_paste_line_breaks_stay_on_one_row() {
    let mut input = new().with_delegate(FnDelegate(|_: Option<&str>| ValidationOutcome::valid()));
    input.focus();
    input.update(Box::new(PasteMsg("ab\ncd\tef".into())));
    assert_eq!(input.text(), Some("ab cd ef"));
    assert_eq!(input.state(), InputState::Valid);

    let view = plain(&input.view());
    assert!(view.lines().any(|line| line.contains("ab cd ef")));
    assert!(!view.lines().any(|line| line.trim_start().starts_with("cd")));
}

#[test]
fn test_absent_text_is_validated_as_none() {
    let (mut input, recorder) = email_input();
    input.set_text(Some("hello"));
    input.set_text(None);
    input.text_changed();
    assert_eq!(input.text(), None);
    assert_eq!(
        recorder.events(),
        vec![Event::Validated(None), Event::Changed(None)]
    );

    input.focus();
    input.insert_text("a");
    assert_eq!(
        recorder.events()[2..],
        [
            Event::Validated(Some("a".to_string())),
            Event::Changed(Some("a".to_string()))
        ]
    );
}

mod logging {
    use super::*;
    use std::fmt;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }

    #[test]
    fn test_state_changes_are_logged() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let (mut input, _) = email_input();
            input.focus();
            type_str(&mut input, "ab");
            // text changes inside the same state log nothing new
            type_str(&mut input, "c");
        });

        let messages = capture.0.lock().unwrap().clone();
        let changes = messages
            .iter()
            .filter(|m| m.as_str() == "input state changed")
            .count();
        // Normal -> NormalActive -> Error
        assert_eq!(changes, 2);
        assert!(messages.iter().any(|m| m == "delegate validated text"));
    }
}
