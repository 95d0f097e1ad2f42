//! View rendering for the labeled input.

use super::directives::{StatusIcon, VisualDirectives};
use super::model::Model;
use super::state::Tone;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the component.
    ///
    /// Rows, top to bottom: the title (while focused with text), the framed
    /// main row, and the bottom row with error or hint and the action button.
    /// Hidden rows take no space.
    pub fn view(&self) -> String {
        let d = self.directives();
        let p = &self.property;
        let mut rows = Vec::with_capacity(3);

        if d.title_visible {
            if let Some(title) = p.title.as_deref().filter(|t| !t.is_empty()) {
                rows.push(p.title_styles.get(d.title).render(title));
            }
        }

        rows.push(p.frame_style(d.border).render(&self.main_row(&d)));

        if d.bottom_row_visible {
            rows.push(self.bottom_row(&d));
        }

        rows.join("\n")
    }

    fn main_row(&self, d: &VisualDirectives) -> String {
        let p = &self.property;
        let mut row = String::new();

        if let Some(leading) = p.leading.as_deref().filter(|l| !l.is_empty()) {
            row.push_str(leading);
            row.push(' ');
        }

        row.push_str(&self.field_view(d.text));

        if let Some(icon) = d.status_icon {
            row.push(' ');
            let glyph = match icon {
                StatusIcon::Valid => p.valid_icon_style.render(&p.valid_icon),
                StatusIcon::Invalid => p.invalid_icon_style.render(&p.invalid_icon),
            };
            row.push_str(&glyph);
        }

        row
    }

    fn field_view(&self, tone: Tone) -> String {
        let p = &self.property;
        let focused = self.control.focused;

        let (mut view, used) = if self.field.is_empty() {
            self.placeholder_view()
        } else {
            let style = p.text_styles.get(tone);
            let (before, under, after) = self.field.split_at_cursor();
            let mut v = style.render(&before);
            match (focused, under) {
                (true, Some(g)) => v.push_str(&p.cursor_style.render(g)),
                (false, Some(g)) => v.push_str(&style.render(g)),
                (true, None) => v.push_str(&p.cursor_style.render(" ")),
                (false, None) => {}
            }
            v.push_str(&style.render(&after));
            let cursor_cell = usize::from(focused && under.is_none());
            (v, self.field.width() + cursor_cell)
        };

        if p.width > used {
            view.push_str(&" ".repeat(p.width - used));
        }
        view
    }

    fn placeholder_view(&self) -> (String, usize) {
        let p = &self.property;
        let mut chars = p.placeholder.chars();
        if !self.control.focused {
            return (
                p.placeholder_style.render(&p.placeholder),
                p.placeholder.width(),
            );
        }
        match chars.next() {
            Some(first) => {
                let rest = chars.as_str();
                let mut v = p.cursor_style.render(&first.to_string());
                v.push_str(&p.placeholder_style.render(rest));
                (v, p.placeholder.width())
            }
            None => (p.cursor_style.render(" "), 1),
        }
    }

    fn bottom_row(&self, d: &VisualDirectives) -> String {
        let p = &self.property;
        let mut parts = Vec::with_capacity(2);

        if d.error_visible {
            if let Some(error) = d.error_text.as_deref() {
                parts.push(p.error_style.render(error));
            }
        } else if d.hint_visible {
            if let Some(hint) = d.hint_text.as_deref() {
                parts.push(p.hint_style.render(hint));
            }
        }

        if d.action_visible {
            if let Some(action) = d.action_title.as_deref() {
                parts.push(p.action_style.render(action));
            }
        }

        parts.join("  ")
    }
}
