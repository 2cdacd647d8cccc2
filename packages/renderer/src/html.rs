//! Frame → HTML string
//!
//! Used by the CLI `show` command and by tests that want to eyeball a
//! rendered page. Section bodies are inline-HTML fragments by contract and
//! are injected verbatim; everything else (titles, attribute values) is
//! escaped.

use crate::frame::{Element, Frame};

struct Writer {
    buffer: String,
    depth: usize,
}

impl Writer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Serialize a frame to an HTML fragment
pub fn frame_to_html(frame: &Frame) -> String {
    let mut w = Writer::new();

    let main_style = match &frame.background {
        Some(image) => format!(
            "background-image:url('assets/images/{}')",
            escape_attr(image)
        ),
        None => "background-image:none".to_string(),
    };

    w.line(&format!("<main style=\"{}\">", main_style));
    w.indent();

    if let Some(title) = &frame.title {
        w.line(&format!(
            "<h1 class=\"page-title\">{}</h1>",
            escape_text(title)
        ));
    }

    for element in frame.elements().flatten() {
        write_element(&mut w, element);
    }

    w.dedent();
    w.line("</main>");
    w.finish()
}

fn write_element(w: &mut Writer, element: &Element) {
    w.line("<div class=\"section\">");
    w.indent();

    let mut style = String::new();
    if let Some(color) = &element.color {
        style.push_str(&format!("color:{};", escape_attr(color)));
    }
    if let Some(size) = &element.font_size {
        style.push_str(&format!("font-size:{};", escape_attr(size)));
    }
    if let Some(family) = &element.font_family {
        style.push_str(&format!("font-family:{};", escape_attr(family)));
    }

    let mut attrs = String::new();
    if !style.is_empty() {
        attrs.push_str(&format!(" style=\"{}\"", style));
    }
    if let Some(trigger) = &element.trigger {
        attrs.push_str(&format!(
            " title=\"{}\" data-editable=\"true\"",
            escape_attr(&trigger.tooltip)
        ));
    }

    // Section content is a trusted inline-HTML fragment
    w.line(&format!("<div{}>{}</div>", attrs, element.html));

    w.dedent();
    w.line("</div>");
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
