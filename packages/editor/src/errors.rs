//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Exactly one session may be OPEN; the caller must commit or cancel
    /// the existing one first
    #[error("An edit session is already open")]
    SessionAlreadyOpen,

    #[error("No edit session is open")]
    SessionNotOpen,

    #[error("Section on page {0} is render-only")]
    NotEditable(String),

    /// The frame slot was empty: the element is already bound elsewhere
    /// or the frame was repainted under us
    #[error("No element bound at slot {slot}")]
    ElementUnbound { slot: usize },

    #[error("Document error: {0}")]
    Document(#[from] lectern_document::DocumentError),
}
