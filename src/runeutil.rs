//! Text sanitization for single-line input.
//!
//! Pasted or programmatically set text may carry line breaks, tabs and other
//! control characters. None of those can live in a one-row field, so the
//! [`Sanitizer`] replaces newlines and tabs with configurable strings and
//! drops every other control character.
//!
//! ```rust
//! use bubbletea_labeled_input::runeutil::{new_sanitizer, replace_newlines, replace_tabs};
//!
//! let sanitizer = new_sanitizer(vec![replace_tabs(" "), replace_newlines(" ")]);
//! assert_eq!(sanitizer.sanitize_str("ab\ncd\tx\x07"), "ab cd x");
//! ```

/// Replaces newlines and tabs, removes other control characters.
///
/// The default replaces both `\n`/`\r` and `\t` with a single space, which
/// keeps the text on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            replace_newline: " ".to_string(),
            replace_tab: " ".to_string(),
        }
    }
}

/// Option applied by [`new_sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Builds a sanitizer from the defaults and a list of options.
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Sets the replacement for tab characters.
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl = tab_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_tab = repl)
}

/// Sets the replacement for `\n` and `\r`.
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl = nl_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_newline = repl)
}

impl Sanitizer {
    /// Returns `input` with newlines and tabs replaced and other control
    /// characters removed.
    pub fn sanitize_str(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match ch {
                '\r' | '\n' => out.push_str(&self.replace_newline),
                '\t' => out.push_str(&self.replace_tab),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}
