//! Error types for the workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed deck: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Deck has no pages")]
    EmptyDeck,

    #[error("Document error: {0}")]
    Document(#[from] lectern_document::DocumentError),

    #[error("Editor error: {0}")]
    Editor(#[from] lectern_editor::EditorError),
}
