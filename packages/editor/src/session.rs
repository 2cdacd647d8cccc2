//! # Edit Session
//!
//! One in-progress edit of a text section: snapshot of the element's
//! pre-open state, the editing surface, the whole-section controls, and the
//! live element the preview mutates.
//!
//! ## State machine
//!
//! ```text
//! CLOSED → OPEN → {COMMITTED, REVERTED} → CLOSED
//! ```
//!
//! `COMMITTED` and `REVERTED` are transient: the consuming transitions pass
//! through them straight back to `CLOSED`. The session never writes to the
//! deck while `OPEN`; that is what makes revert exact.

use lectern_document::{Section, SectionAddress, StyleProps};
use lectern_renderer::Element;
use serde::{Deserialize, Serialize};

use crate::panel::Panel;
use crate::richtext::{InlineCommand, RichTextEngine, Selection};

/// Whole-section color control default when the section has none
pub const DEFAULT_SECTION_COLOR: &str = "#ffffff";

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
    Committed,
    Reverted,
}

/// Element state captured at open, restored verbatim on revert
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSnapshot {
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    pub html: String,
}

impl ElementSnapshot {
    /// Snapshot is taken from the rendered element, not the stored
    /// section: the element is the surface the preview mutates, so it is
    /// the baseline revert must restore.
    fn capture(element: &Element) -> Self {
        Self {
            color: element.color.clone(),
            font_size: element.font_size.clone(),
            font_family: element.font_family.clone(),
            html: element.html.clone(),
        }
    }

    fn restore(&self, element: &mut Element) {
        element.color = self.color.clone();
        element.font_size = self.font_size.clone();
        element.font_family = self.font_family.clone();
        element.html = self.html.clone();
    }
}

/// The editable body of the panel
#[derive(Debug, Clone, PartialEq)]
pub struct EditArea {
    pub html: String,
    pub selection: Selection,
}

/// Whole-section font family choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    Default,
    Kai,
    JhengHei,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Default, FontFamily::Kai, FontFamily::JhengHei];

    pub fn as_css(&self) -> Option<&'static str> {
        match self {
            FontFamily::Default => None,
            FontFamily::Kai => Some("標楷體"),
            FontFamily::JhengHei => Some("Microsoft JhengHei"),
        }
    }

    pub fn from_css(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.contains("標楷體") => FontFamily::Kai,
            Some(v) if v.contains("JhengHei") => FontFamily::JhengHei,
            _ => FontFamily::Default,
        }
    }
}

/// Whole-section font sizes (fixed pixel set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Px24,
    Px28,
    Px32,
    Px36,
    Px40,
    Px48,
    Px60,
    Px80,
}

impl FontSize {
    pub const ALL: [FontSize; 8] = [
        FontSize::Px24,
        FontSize::Px28,
        FontSize::Px32,
        FontSize::Px36,
        FontSize::Px40,
        FontSize::Px48,
        FontSize::Px60,
        FontSize::Px80,
    ];

    pub fn as_css(&self) -> &'static str {
        match self {
            FontSize::Px24 => "24px",
            FontSize::Px28 => "28px",
            FontSize::Px32 => "32px",
            FontSize::Px36 => "36px",
            FontSize::Px40 => "40px",
            FontSize::Px48 => "48px",
            FontSize::Px60 => "60px",
            FontSize::Px80 => "80px",
        }
    }

    /// First entry of the enumerated set when the stored value is absent
    /// or not in the set
    pub fn from_css(value: Option<&str>) -> Self {
        FontSize::ALL
            .into_iter()
            .find(|size| Some(size.as_css()) == value)
            .unwrap_or(FontSize::Px24)
    }
}

/// Whole-section controls, seeded from the section's stored style
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub color: String,
}

/// Live-preview operations
///
/// Every variant mutates the bound element immediately; none write to the
/// section.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOp {
    /// Inline formatting on the edit area's selection
    Inline(InlineCommand),

    /// Foreground color on the edit area's selection
    SelectionColor(String),

    /// Direct typing: replace the edit area body wholesale
    ReplaceContent { html: String, selection: Selection },

    /// Move the selection without changing content
    SetSelection(Selection),

    SetFontFamily(FontFamily),
    SetFontSize(FontSize),
    SetSectionColor(String),
}

/// One open edit, destroyed on commit or cancel
#[derive(Debug)]
pub struct EditSession {
    section: SectionAddress,
    slot: usize,
    element: Element,
    snapshot: ElementSnapshot,
    area: EditArea,
    controls: Controls,
    panel: Panel,
}

impl EditSession {
    /// Open a session on `section`, taking exclusive ownership of its
    /// display element.
    ///
    /// The snapshot comes from the element's current visual state; the
    /// edit area is seeded from the section's stored content; the controls
    /// are seeded from the section's stored style.
    pub(crate) fn open(
        address: SectionAddress,
        slot: usize,
        element: Element,
        section: &Section,
    ) -> Self {
        let snapshot = ElementSnapshot::capture(&element);
        let style = section.style.clone().unwrap_or_default();

        let area = EditArea {
            selection: Selection::caret(section.content.len()),
            html: section.content.clone(),
        };

        let controls = Controls {
            font_family: FontFamily::from_css(style.font_family.as_deref()),
            font_size: FontSize::from_css(style.font_size.as_deref()),
            color: style
                .color
                .unwrap_or_else(|| DEFAULT_SECTION_COLOR.to_string()),
        };

        Self {
            section: address,
            slot,
            element,
            snapshot,
            area,
            controls,
            // Reset to centered so a panel dragged away last session is
            // reachable in this one
            panel: Panel::centered(),
        }
    }

    pub fn address(&self) -> &SectionAddress {
        &self.section
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot
    }

    /// The live element the preview mutates
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn area(&self) -> &EditArea {
        &self.area
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn snapshot(&self) -> &ElementSnapshot {
        &self.snapshot
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    /// Apply a live-preview operation
    pub(crate) fn preview(&mut self, op: PreviewOp, engine: &dyn RichTextEngine) {
        match op {
            PreviewOp::Inline(command) => {
                self.area.html =
                    engine.apply_inline_format(&self.area.html, self.area.selection, command);
                self.element.html = self.area.html.clone();
            }
            PreviewOp::SelectionColor(color) => {
                self.area.html =
                    engine.set_foreground_color(&self.area.html, self.area.selection, &color);
                self.element.html = self.area.html.clone();
            }
            PreviewOp::ReplaceContent { html, selection } => {
                self.area.html = html;
                self.area.selection = selection;
                self.element.html = self.area.html.clone();
            }
            PreviewOp::SetSelection(selection) => {
                self.area.selection = selection;
            }
            PreviewOp::SetFontFamily(family) => {
                self.controls.font_family = family;
                self.element.font_family = family.as_css().map(str::to_string);
            }
            PreviewOp::SetFontSize(size) => {
                self.controls.font_size = size;
                self.element.font_size = Some(size.as_css().to_string());
            }
            PreviewOp::SetSectionColor(color) => {
                self.controls.color = color.clone();
                self.element.color = Some(color);
            }
        }
    }

    /// OPEN → COMMITTED → CLOSED: yield the content and the full style
    /// override for write-back. All three style fields are written whether
    /// or not the user touched the controls.
    pub(crate) fn commit(self) -> (SectionAddress, String, StyleProps) {
        let style = StyleProps {
            font_size: Some(self.controls.font_size.as_css().to_string()),
            color: Some(self.controls.color),
            font_family: self.controls.font_family.as_css().map(str::to_string),
        };
        (self.section, self.area.html, style)
    }

    /// OPEN → REVERTED → CLOSED: undo every live-preview mutation and hand
    /// the element back
    pub(crate) fn revert(mut self) -> (usize, Element) {
        self.snapshot.restore(&mut self.element);
        (self.slot, self.element)
    }
}
