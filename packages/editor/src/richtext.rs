//! # Rich-Text Capability
//!
//! Formatting commands over an inline-HTML fragment. The fragment is an
//! opaque but round-trippable serialization of rich text; hosts with a
//! native rich-text engine (a browser, a terminal renderer) implement
//! [`RichTextEngine`] themselves, and [`FragmentEngine`] is the default
//! structural implementation.
//!
//! Selections are byte ranges into the fragment. Callers own the selection
//! model and hand over ranges that do not split markup; the engine clamps
//! to char boundaries and fragment length but does not re-balance tags.

use serde::{Deserialize, Serialize};

/// Byte range into the fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at `pos`
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    fn clamp(&self, fragment: &str) -> (usize, usize) {
        let mut start = self.start.min(fragment.len());
        let mut end = self.end.min(fragment.len());
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }
        while start > 0 && !fragment.is_char_boundary(start) {
            start -= 1;
        }
        while end < fragment.len() && !fragment.is_char_boundary(end) {
            end += 1;
        }
        (start, end)
    }
}

/// Inline formatting commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineCommand {
    Bold,
    Italic,
    Underline,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    UnorderedList,
}

/// Rich-text engine seam
///
/// Both operations are pure fragment → fragment transforms; the editing
/// surface owns the state.
pub trait RichTextEngine {
    /// Apply an inline formatting command to the selection
    fn apply_inline_format(
        &self,
        fragment: &str,
        selection: Selection,
        command: InlineCommand,
    ) -> String;

    /// Color the selected text
    fn set_foreground_color(&self, fragment: &str, selection: Selection, color: &str) -> String;
}

/// Default structural engine: formats by wrapping tags around the selected
/// slice. Repeating a command on an already-wrapped slice unwraps it,
/// mirroring the toggle behavior of browser formatting commands.
#[derive(Debug, Default)]
pub struct FragmentEngine;

impl RichTextEngine for FragmentEngine {
    fn apply_inline_format(
        &self,
        fragment: &str,
        selection: Selection,
        command: InlineCommand,
    ) -> String {
        match command {
            InlineCommand::Bold => toggle_wrap(fragment, selection, "<b>", "</b>"),
            InlineCommand::Italic => toggle_wrap(fragment, selection, "<i>", "</i>"),
            InlineCommand::Underline => toggle_wrap(fragment, selection, "<u>", "</u>"),
            InlineCommand::JustifyLeft => align(fragment, "left"),
            InlineCommand::JustifyCenter => align(fragment, "center"),
            InlineCommand::JustifyRight => align(fragment, "right"),
            InlineCommand::UnorderedList => toggle_list(fragment),
        }
    }

    fn set_foreground_color(&self, fragment: &str, selection: Selection, color: &str) -> String {
        let (start, end) = selection.clamp(fragment);
        if start == end {
            return fragment.to_string();
        }
        format!(
            "{}<span style=\"color:{}\">{}</span>{}",
            &fragment[..start],
            color,
            &fragment[start..end],
            &fragment[end..]
        )
    }
}

fn toggle_wrap(fragment: &str, selection: Selection, open: &str, close: &str) -> String {
    let (start, end) = selection.clamp(fragment);
    if start == end {
        // Collapsed selection: nothing to format
        return fragment.to_string();
    }

    let slice = &fragment[start..end];
    let inner = slice
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close));

    match inner {
        Some(inner) => format!("{}{}{}", &fragment[..start], inner, &fragment[end..]),
        None => format!(
            "{}{}{}{}{}",
            &fragment[..start],
            open,
            slice,
            close,
            &fragment[end..]
        ),
    }
}

/// Alignment applies to the whole fragment, replacing any existing
/// alignment wrapper
fn align(fragment: &str, direction: &str) -> String {
    let inner = strip_alignment(fragment);
    format!("<div style=\"text-align:{}\">{}</div>", direction, inner)
}

fn strip_alignment(fragment: &str) -> &str {
    const PREFIXES: [&str; 3] = [
        "<div style=\"text-align:left\">",
        "<div style=\"text-align:center\">",
        "<div style=\"text-align:right\">",
    ];

    for prefix in PREFIXES {
        if let Some(rest) = fragment.strip_prefix(prefix) {
            if let Some(inner) = rest.strip_suffix("</div>") {
                return inner;
            }
        }
    }
    fragment
}

/// List conversion applies to the whole fragment: `<br>`-separated lines
/// become `<li>` items, and an existing list unwraps back to lines
fn toggle_list(fragment: &str) -> String {
    if let Some(inner) = fragment
        .strip_prefix("<ul>")
        .and_then(|rest| rest.strip_suffix("</ul>"))
    {
        let lines: Vec<&str> = inner
            .split("<li>")
            .filter_map(|part| part.strip_suffix("</li>"))
            .collect();
        return lines.join("<br>");
    }

    let items: String = fragment
        .split("<br>")
        .map(|line| format!("<li>{}</li>", line))
        .collect();
    format!("<ul>{}</ul>", items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FragmentEngine {
        FragmentEngine
    }

    #[test]
    fn test_bold_wraps_selection() {
        let out = engine().apply_inline_format("hello world", Selection::new(0, 5), InlineCommand::Bold);
        assert_eq!(out, "<b>hello</b> world");
    }

    #[test]
    fn test_bold_toggles_off() {
        let wrapped = "<b>hello</b> world";
        let out = engine().apply_inline_format(wrapped, Selection::new(0, 12), InlineCommand::Bold);
        assert_eq!(out, "hello world");
    }

    #[test]
    fn test_collapsed_selection_is_a_no_op() {
        let out = engine().apply_inline_format("hello", Selection::caret(3), InlineCommand::Italic);
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_selection_clamped_to_char_boundaries() {
        // "歡" is 3 bytes; offsets inside it snap outward
        let out = engine().apply_inline_format("歡迎", Selection::new(0, 4), InlineCommand::Underline);
        assert_eq!(out, "<u>歡迎</u>");
    }

    #[test]
    fn test_selection_clamped_to_length() {
        let out = engine().apply_inline_format("hi", Selection::new(0, 99), InlineCommand::Bold);
        assert_eq!(out, "<b>hi</b>");
    }

    #[test]
    fn test_justify_wraps_whole_fragment() {
        let out = engine().apply_inline_format("line", Selection::caret(0), InlineCommand::JustifyCenter);
        assert_eq!(out, "<div style=\"text-align:center\">line</div>");
    }

    #[test]
    fn test_justify_replaces_existing_alignment() {
        let centered = "<div style=\"text-align:center\">line</div>";
        let out = engine().apply_inline_format(centered, Selection::caret(0), InlineCommand::JustifyRight);
        assert_eq!(out, "<div style=\"text-align:right\">line</div>");
    }

    #[test]
    fn test_list_from_line_breaks() {
        let out = engine().apply_inline_format("one<br>two", Selection::caret(0), InlineCommand::UnorderedList);
        assert_eq!(out, "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_list_toggles_back_to_lines() {
        let listed = "<ul><li>one</li><li>two</li></ul>";
        let out = engine().apply_inline_format(listed, Selection::caret(0), InlineCommand::UnorderedList);
        assert_eq!(out, "one<br>two");
    }

    #[test]
    fn test_foreground_color_wraps_selection() {
        let out = engine().set_foreground_color("hello", Selection::new(0, 5), "#ff0000");
        assert_eq!(out, "<span style=\"color:#ff0000\">hello</span>");
    }

    #[test]
    fn test_foreground_color_collapsed_no_op() {
        let out = engine().set_foreground_color("hello", Selection::caret(2), "#ff0000");
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_reversed_selection_normalizes() {
        let out = engine().apply_inline_format("hello", Selection::new(5, 0), InlineCommand::Bold);
        assert_eq!(out, "<b>hello</b>");
    }
}
