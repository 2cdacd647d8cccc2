//! Display tree for a single rendered page

use lectern_document::SectionAddress;
use serde::{Deserialize, Serialize};

/// Tooltip shown on edit-triggerable elements
pub const EDIT_TOOLTIP: &str = "點擊編輯內容";

/// One rendered page
///
/// Elements live in section order. A slot is vacated while an edit session
/// exclusively owns its element and refilled when the session closes;
/// the next full repaint rebuilds every slot from the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub page_key: String,

    /// Background image reference; `None` clears any prior background
    pub background: Option<String>,

    /// Page heading, omitted when the title is empty
    pub title: Option<String>,

    elements: Vec<Option<Element>>,
}

/// Display node bound one-to-one to a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Inline HTML body, injected verbatim from the section content
    pub html: String,

    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_family: Option<String>,

    /// Present on text sections only; render-only sections carry none
    pub trigger: Option<EditTrigger>,
}

/// Pointer affordance wired to a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditTrigger {
    pub section: SectionAddress,
    pub tooltip: String,
}

/// Outcome of activating an element
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Event consumed; open an edit session on this section bound to this
    /// element slot
    OpenEditor { section: SectionAddress, slot: usize },

    /// No trigger on this element; the event propagates
    Pass,
}

impl Frame {
    pub fn new(page_key: impl Into<String>) -> Self {
        Self {
            page_key: page_key.into(),
            background: None,
            title: None,
            elements: Vec::new(),
        }
    }

    pub fn push_element(&mut self, element: Element) {
        self.elements.push(Some(element));
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, slot: usize) -> Option<&Element> {
        self.elements.get(slot).and_then(|e| e.as_ref())
    }

    /// Take exclusive ownership of an element for the duration of an edit
    /// session. The slot stays vacant until [`Frame::restore_element`] or
    /// the next full repaint.
    pub fn take_element(&mut self, slot: usize) -> Option<Element> {
        self.elements.get_mut(slot).and_then(|e| e.take())
    }

    /// Return a session's element to its slot
    pub fn restore_element(&mut self, slot: usize, element: Element) {
        if let Some(entry) = self.elements.get_mut(slot) {
            *entry = Some(element);
        }
    }

    /// Resolve a pointer activation on the element in `slot`
    pub fn activate(&self, slot: usize) -> Activation {
        match self.element(slot).and_then(|e| e.trigger.as_ref()) {
            Some(trigger) => Activation::OpenEditor {
                section: trigger.section.clone(),
                slot,
            },
            None => Activation::Pass,
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = Option<&Element>> {
        self.elements.iter().map(|e| e.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(trigger: Option<EditTrigger>) -> Element {
        Element {
            html: "<b>hi</b>".to_string(),
            color: None,
            font_size: None,
            font_family: None,
            trigger,
        }
    }

    #[test]
    fn test_activation_consumes_on_trigger() {
        let mut frame = Frame::new("page01");
        frame.push_element(element(Some(EditTrigger {
            section: SectionAddress::new("page01", 0),
            tooltip: EDIT_TOOLTIP.to_string(),
        })));

        match frame.activate(0) {
            Activation::OpenEditor { section, slot } => {
                assert_eq!(section, SectionAddress::new("page01", 0));
                assert_eq!(slot, 0);
            }
            Activation::Pass => panic!("expected the activation to be consumed"),
        }
    }

    #[test]
    fn test_activation_passes_without_trigger() {
        let mut frame = Frame::new("page01");
        frame.push_element(element(None));
        assert_eq!(frame.activate(0), Activation::Pass);
        assert_eq!(frame.activate(7), Activation::Pass);
    }

    #[test]
    fn test_take_and_restore_element() {
        let mut frame = Frame::new("page01");
        frame.push_element(element(None));

        let taken = frame.take_element(0).unwrap();
        assert!(frame.element(0).is_none());
        // A vacated slot cannot be taken twice
        assert!(frame.take_element(0).is_none());

        frame.restore_element(0, taken);
        assert!(frame.element(0).is_some());
    }
}
