//! Presentation settings for the labeled input.
//!
//! [`InputTextProperty`] is a plain value: build it once with the `with_*`
//! methods, hand it to the control, and replace it wholesale with
//! `set_property` when the look should change. None of these settings affect
//! which state the control is in, only how each state is drawn.
//!
//! ```rust
//! use bubbletea_labeled_input::labeledinput::InputTextProperty;
//! use lipgloss_extras::prelude::*;
//!
//! let property = InputTextProperty::default()
//!     .with_title("Email")
//!     .with_placeholder("you@example.com")
//!     .with_icons("✔", "✘")
//!     .with_border_colors(
//!         Color::from("#626262"),
//!         Color::from("#5A56E0"),
//!         Color::from("#FF5F87"),
//!     );
//! assert_eq!(property.title.as_deref(), Some("Email"));
//! ```

use super::state::Tone;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Default placeholder shown in an empty field.
pub const DEFAULT_PLACEHOLDER: &str = "Enter text here";

/// Default glyph for the valid status icon.
pub const DEFAULT_VALID_ICON: &str = "✓";

/// Default glyph for the invalid status icon.
pub const DEFAULT_INVALID_ICON: &str = "✗";

/// One style per [`Tone`].
#[derive(Debug, Clone)]
pub struct ToneStyles {
    /// Style for [`Tone::Normal`].
    pub normal: Style,
    /// Style for [`Tone::Active`].
    pub active: Style,
    /// Style for [`Tone::Error`].
    pub error: Style,
}

impl ToneStyles {
    /// The style for `tone`.
    pub fn get(&self, tone: Tone) -> &Style {
        match tone {
            Tone::Normal => &self.normal,
            Tone::Active => &self.active,
            Tone::Error => &self.error,
        }
    }
}

/// One color per [`Tone`].
#[derive(Debug, Clone)]
pub struct ToneColors {
    /// Color for [`Tone::Normal`].
    pub normal: Color,
    /// Color for [`Tone::Active`].
    pub active: Color,
    /// Color for [`Tone::Error`].
    pub error: Color,
}

impl ToneColors {
    /// The color for `tone`.
    pub fn get(&self, tone: Tone) -> &Color {
        match tone {
            Tone::Normal => &self.normal,
            Tone::Active => &self.active,
            Tone::Error => &self.error,
        }
    }
}

/// Presentation settings: titles, placeholder, styles per tone, icons,
/// padding and border.
#[derive(Debug, Clone)]
pub struct InputTextProperty {
    /// Floating title shown above the field.
    pub title: Option<String>,
    /// Title styles.
    pub title_styles: ToneStyles,

    /// Placeholder for an empty field.
    pub placeholder: String,
    /// Placeholder style.
    pub placeholder_style: Style,

    /// Field text styles.
    pub text_styles: ToneStyles,
    /// Style of the cell under the cursor while focused.
    pub cursor_style: Style,

    /// Hint row style.
    pub hint_style: Style,
    /// Error row style.
    pub error_style: Style,

    /// Glyph drawn when the text is valid.
    pub valid_icon: String,
    /// Glyph drawn when the text is invalid.
    pub invalid_icon: String,
    /// Valid icon style.
    pub valid_icon_style: Style,
    /// Invalid icon style.
    pub invalid_icon_style: Style,

    /// Action button style.
    pub action_style: Style,

    /// Text drawn before the field inside the border, such as an icon or
    /// country code.
    pub leading: Option<String>,

    /// Horizontal padding inside the border, in cells.
    pub padding: usize,
    /// Whether to draw a border.
    pub border: bool,
    /// Rounded border corners.
    pub rounded: bool,
    /// Border colors.
    pub border_colors: ToneColors,
    /// Background of the main row, padding included. `None` leaves the
    /// terminal background.
    pub background: Option<Color>,

    /// Width of the field area in cells, excluding adornments. Zero sizes the
    /// field to its content.
    pub width: usize,
    /// Maximum characters accepted. Zero means no limit.
    pub char_limit: usize,
}

impl Default for InputTextProperty {
    fn default() -> Self {
        Self::build_default()
    }
}

impl InputTextProperty {
    fn build_default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let active = AdaptiveColor {
            Light: "#5A56E0",
            Dark: "#7571F9",
        };
        let error = AdaptiveColor {
            Light: "#FF4672",
            Dark: "#ED567A",
        };
        let valid = AdaptiveColor {
            Light: "#02BA84",
            Dark: "#02BF87",
        };

        Self {
            title: None,
            title_styles: ToneStyles {
                normal: Style::new().foreground(subdued.clone()),
                active: Style::new().foreground(active.clone()),
                error: Style::new().foreground(error.clone()),
            },
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            text_styles: ToneStyles {
                normal: Style::new(),
                active: Style::new(),
                error: Style::new().foreground(error.clone()),
            },
            cursor_style: Style::new().reverse(true),
            hint_style: Style::new().foreground(subdued),
            error_style: Style::new().foreground(error.clone()),
            valid_icon: DEFAULT_VALID_ICON.to_string(),
            invalid_icon: DEFAULT_INVALID_ICON.to_string(),
            valid_icon_style: Style::new().foreground(valid),
            invalid_icon_style: Style::new().foreground(error),
            action_style: Style::new().foreground(active).bold(true),
            leading: None,
            padding: 1,
            border: true,
            rounded: true,
            border_colors: ToneColors {
                normal: Color::from("240"),
                active: Color::from("#7571F9"),
                error: Color::from("#ED567A"),
            },
            background: None,
            width: 0,
            char_limit: 0,
        }
    }

    /// Sets the floating title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the title styles per tone.
    pub fn with_title_styles(mut self, normal: Style, active: Style, error: Style) -> Self {
        self.title_styles = ToneStyles {
            normal,
            active,
            error,
        };
        self
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the placeholder style.
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Sets the field text styles per tone.
    pub fn with_text_styles(mut self, normal: Style, active: Style, error: Style) -> Self {
        self.text_styles = ToneStyles {
            normal,
            active,
            error,
        };
        self
    }

    /// Sets the hint and error row styles.
    pub fn with_label_styles(mut self, hint: Style, error: Style) -> Self {
        self.hint_style = hint;
        self.error_style = error;
        self
    }

    /// Sets the status icon glyphs.
    pub fn with_icons(mut self, valid: impl Into<String>, invalid: impl Into<String>) -> Self {
        self.valid_icon = valid.into();
        self.invalid_icon = invalid.into();
        self
    }

    /// Sets the action button style.
    pub fn with_action_style(mut self, style: Style) -> Self {
        self.action_style = style;
        self
    }

    /// Sets the leading adornment.
    pub fn with_leading(mut self, leading: impl Into<String>) -> Self {
        self.leading = Some(leading.into());
        self
    }

    /// Sets horizontal padding inside the border.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Enables or disables the border and chooses rounded corners.
    pub fn with_border(mut self, border: bool, rounded: bool) -> Self {
        self.border = border;
        self.rounded = rounded;
        self
    }

    /// Sets the border colors per tone.
    pub fn with_border_colors(mut self, normal: Color, active: Color, error: Color) -> Self {
        self.border_colors = ToneColors {
            normal,
            active,
            error,
        };
        self
    }

    /// Sets the main row background.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the field width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the character limit.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    /// The frame style around the main row for `tone`.
    pub fn frame_style(&self, tone: Tone) -> Style {
        let mut style = Style::new()
            .padding_left(self.padding as i32)
            .padding_right(self.padding as i32);
        if let Some(color) = &self.background {
            style = style.background(color.clone());
        }
        if !self.border {
            return style;
        }
        let border = if self.rounded {
            lipgloss::rounded_border()
        } else {
            lipgloss::normal_border()
        };
        style
            .border_style(border)
            .border_foreground(self.border_colors.get(tone).clone())
    }
}
