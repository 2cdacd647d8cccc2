//! Page → Frame projection

use lectern_document::{Page, SectionAddress};
use tracing::debug;

use crate::frame::{EditTrigger, Element, Frame, EDIT_TOOLTIP};

/// Render one page into a fresh frame
///
/// Prior display state is discarded wholesale. Background is set when the
/// page carries one and cleared otherwise; an empty title renders no
/// heading; a page without sections renders title/background only.
pub fn render_page(key: &str, page: &Page) -> Frame {
    debug!(page = key, sections = page.sections.len(), "rendering page");

    let mut frame = Frame::new(key);
    frame.background = page.background.clone();

    if !page.title.is_empty() {
        frame.title = Some(page.title.clone());
    }

    for (index, section) in page.sections.iter().enumerate() {
        let style = section.style.clone().unwrap_or_default();

        let trigger = section.is_editable().then(|| EditTrigger {
            section: SectionAddress::new(key, index),
            tooltip: EDIT_TOOLTIP.to_string(),
        });

        frame.push_element(Element {
            html: section.content.clone(),
            color: style.color,
            font_size: style.font_size,
            font_family: style.font_family,
            trigger,
        });
    }

    frame
}
