//! # Application Context
//!
//! The explicit object a host constructs at startup and threads through
//! its event callbacks. Owns the deck, the current frame, navigation, the
//! edit controller, and the I/O collaborators.
//!
//! ## Control flow
//!
//! ```text
//! select_page ──→ render_page ──→ frame
//!                                   │ activate(slot)
//!                                   ↓
//!                            EditController.open
//!                                   │ preview…
//!                        commit ────┴──── cancel
//!                          │                │
//!                 deck write + persist   element revert
//!                 + repaint current page
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use lectern_document::Deck;
use lectern_editor::{EditController, Panel, PreviewOp};
use lectern_renderer::{render_page, Activation, Frame};
use tracing::{info, warn};

use crate::config::WorkspaceConfig;
use crate::errors::WorkspaceError;
use crate::navigation::{NavController, NavItem};
use crate::notice::{Notice, NoticeSink};
use crate::store::{export_deck, DeckStore};

pub struct AppContext {
    deck: Deck,
    frame: Frame,
    nav: NavController,
    edits: EditController,
    store: Box<dyn DeckStore>,
    notices: Box<dyn NoticeSink>,
}

impl AppContext {
    /// Load the deck (stored → bundled → synthesized sample), render the
    /// start page, and hand back a ready context.
    pub fn bootstrap(
        config: &WorkspaceConfig,
        cwd: &str,
        store: Box<dyn DeckStore>,
        mut notices: Box<dyn NoticeSink>,
    ) -> Result<Self, WorkspaceError> {
        let deck = load_deck(
            store.as_ref(),
            &config.bundled_deck(cwd),
            notices.as_mut(),
        );

        // Start on the configured page when the deck has it, else on the
        // first page in navigation order
        let start = if deck.pages.get(&config.start_page).is_some() {
            config.start_page.clone()
        } else {
            deck.pages_ordered()
                .first()
                .map(|(key, _)| key.to_string())
                .ok_or(WorkspaceError::EmptyDeck)?
        };

        let mut app = Self {
            deck,
            frame: Frame::new(&start),
            nav: NavController::new(&start),
            edits: EditController::new(),
            store,
            notices,
        };
        app.select_page(&start)?;
        Ok(app)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn current_page(&self) -> &str {
        self.nav.current()
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.nav.items(&self.deck)
    }

    pub fn edits(&self) -> &EditController {
        &self.edits
    }

    /// Panel geometry of the open session (drag handling)
    pub fn edit_panel_mut(&mut self) -> Option<&mut Panel> {
        self.edits.session_mut().map(|session| session.panel_mut())
    }

    /// Switch to `key` and repaint. An open edit session is cancelled
    /// first, since its preview belongs to the page being left.
    pub fn select_page(&mut self, key: &str) -> Result<(), WorkspaceError> {
        if self.edits.is_open() {
            self.edits.cancel(&mut self.frame)?;
        }

        let page = self.deck.get_page(key)?;
        self.frame = render_page(key, page);
        self.nav.set_current(key);
        self.notices.notify(Notice::Toast(self.nav.selection_toast()));
        Ok(())
    }

    /// Pointer activation on a frame slot. Returns `true` when the event
    /// was consumed by opening an edit session.
    pub fn activate(&mut self, slot: usize) -> Result<bool, WorkspaceError> {
        match self.frame.activate(slot) {
            Activation::OpenEditor { section, slot } => {
                self.edits.open(&self.deck, &mut self.frame, section, slot)?;
                Ok(true)
            }
            Activation::Pass => Ok(false),
        }
    }

    /// Live-preview passthrough to the open session
    pub fn preview(&mut self, op: PreviewOp) -> Result<(), WorkspaceError> {
        self.edits.preview(op)?;
        Ok(())
    }

    /// Commit the open session: write the deck, persist, repaint the
    /// current page
    pub fn commit_edit(&mut self) -> Result<(), WorkspaceError> {
        self.edits.commit(&mut self.deck)?;
        self.persist();

        let current = self.nav.current().to_string();
        self.select_page(&current)
    }

    /// Cancel the open session; the deck and store are untouched
    pub fn cancel_edit(&mut self) -> Result<(), WorkspaceError> {
        self.edits.cancel(&mut self.frame)?;
        Ok(())
    }

    /// Write the `default-meeting.json` artifact under `dir`
    pub fn export(&mut self, dir: &Path) -> Result<PathBuf, WorkspaceError> {
        let path = export_deck(&self.deck, dir)?;
        self.notices.notify(Notice::Toast("✅ 模板已導出".to_string()));
        Ok(path)
    }

    /// Persist after a commit. Failures are logged and swallowed: losing
    /// a save must not take the presentation down mid-meeting.
    fn persist(&mut self) {
        if let Err(error) = self.store.save(&self.deck) {
            warn!(%error, "暫存失敗");
        }
    }
}

/// Stored deck → bundled deck → synthesized sample. Only the final
/// fallback surfaces a notice; the intermediate misses are logged.
fn load_deck(store: &dyn DeckStore, bundled: &Path, notices: &mut dyn NoticeSink) -> Deck {
    match store.load() {
        Ok(Some(deck)) if !deck.pages.is_empty() => {
            info!("loaded deck from store");
            return deck;
        }
        Ok(Some(_)) => {
            warn!("stored deck has no pages");
        }
        Ok(None) => match load_bundled(bundled) {
            Ok(deck) => {
                info!(path = %bundled.display(), "loaded bundled deck");
                return deck;
            }
            Err(error) => {
                warn!(%error, path = %bundled.display(), "bundled deck unavailable");
            }
        },
        Err(error) => {
            warn!(%error, "stored deck unreadable");
        }
    }

    notices.notify(Notice::Blocking("加載失敗，使用默認模板".to_string()));
    Deck::sample()
}

fn load_bundled(path: &Path) -> Result<Deck, WorkspaceError> {
    let text = fs::read_to_string(path)?;
    let deck: Deck = serde_json::from_str(&text)?;
    if deck.pages.is_empty() {
        return Err(WorkspaceError::EmptyDeck);
    }
    Ok(deck)
}
