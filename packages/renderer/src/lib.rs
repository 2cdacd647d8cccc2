//! # Lectern Renderer
//!
//! Projects one page of a deck into a [`Frame`], an owned display tree
//! the host paints. Rendering is full subtree replacement per call; pages
//! are small and a repaint happens only on page switch or edit commit, so
//! there is no incremental diffing.
//!
//! Every text section's element carries an edit trigger. Activating a
//! trigger consumes the event (nested activations on rich content must not
//! bubble to page-level handlers) and resolves to the section address the
//! edit session should bind to.

mod frame;
mod html;
mod render;

pub use frame::{Activation, EditTrigger, Element, Frame};
pub use html::frame_to_html;
pub use render::render_page;
