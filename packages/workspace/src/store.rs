//! Deck persistence and export
//!
//! The store is the local persistence seam: [`FileStore`] keeps the deck
//! as pretty-printed JSON in a directory, [`MemoryStore`] backs tests.
//! Export is independent of the store and produces the downloadable
//! artifact wherever the caller points it.

use std::fs;
use std::path::{Path, PathBuf};

use lectern_document::Deck;
use tracing::debug;

use crate::errors::WorkspaceError;

/// File name of the persisted deck inside the store directory
pub const STORE_FILE_NAME: &str = "meeting-data.json";

/// File name of the exported artifact
pub const EXPORT_FILE_NAME: &str = "default-meeting.json";

/// Local persistence seam
pub trait DeckStore {
    /// Previously persisted deck: `Ok(None)` when nothing was stored,
    /// `Err` when the stored payload is unreadable or malformed
    fn load(&self) -> Result<Option<Deck>, WorkspaceError>;

    /// Persist the whole deck
    fn save(&mut self, deck: &Deck) -> Result<(), WorkspaceError>;
}

/// Directory-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILE_NAME)
    }
}

impl DeckStore for FileStore {
    fn load(&self) -> Result<Option<Deck>, WorkspaceError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        let deck = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "loaded deck from store");
        Ok(Some(deck))
    }

    fn save(&mut self, deck: &Deck) -> Result<(), WorkspaceError> {
        fs::create_dir_all(&self.dir)?;
        let text = serde_json::to_string_pretty(deck)?;
        fs::write(self.path(), text)?;
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    deck: Option<Deck>,

    /// When set, every save is rejected (quota-style persist failure)
    pub reject_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck: Some(deck),
            reject_saves: false,
        }
    }

    pub fn stored(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }
}

impl DeckStore for MemoryStore {
    fn load(&self) -> Result<Option<Deck>, WorkspaceError> {
        Ok(self.deck.clone())
    }

    fn save(&mut self, deck: &Deck) -> Result<(), WorkspaceError> {
        if self.reject_saves {
            return Err(WorkspaceError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store rejected the write",
            )));
        }
        self.deck = Some(deck.clone());
        Ok(())
    }
}

/// Serialize the deck to `default-meeting.json` under `dir`
pub fn export_deck(deck: &Deck, dir: &Path) -> Result<PathBuf, WorkspaceError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    let text = serde_json::to_string_pretty(deck)?;
    fs::write(&path, text)?;
    Ok(path)
}
