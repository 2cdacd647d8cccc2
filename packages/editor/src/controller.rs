//! # Edit Controller
//!
//! Owns the one-at-a-time session slot and the rich-text engine. The
//! controller is the explicit guard the state machine requires: a second
//! `open` while a session is OPEN is rejected, never implicitly serialized
//! by the host's event dispatch.

use lectern_document::{Deck, SectionAddress};
use lectern_renderer::Frame;
use tracing::debug;

use crate::errors::EditorError;
use crate::richtext::{FragmentEngine, RichTextEngine};
use crate::session::{EditSession, PreviewOp, SessionState};

pub struct EditController {
    engine: Box<dyn RichTextEngine>,
    active: Option<EditSession>,
}

impl EditController {
    /// Controller with the default structural rich-text engine
    pub fn new() -> Self {
        Self::with_engine(Box::new(FragmentEngine))
    }

    /// Controller with a host-supplied rich-text engine
    pub fn with_engine(engine: Box<dyn RichTextEngine>) -> Self {
        Self {
            engine,
            active: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.active.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.active.as_ref()
    }

    /// Mutable session access (panel dragging)
    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.active.as_mut()
    }

    /// CLOSED → OPEN: bind a session to `section` and take its element out
    /// of the frame.
    pub fn open(
        &mut self,
        deck: &Deck,
        frame: &mut Frame,
        section: SectionAddress,
        slot: usize,
    ) -> Result<(), EditorError> {
        if self.active.is_some() {
            return Err(EditorError::SessionAlreadyOpen);
        }

        let target = deck.section(&section)?;
        if !target.is_editable() {
            return Err(EditorError::NotEditable(section.page_key.clone()));
        }

        let element = frame
            .take_element(slot)
            .ok_or(EditorError::ElementUnbound { slot })?;

        debug!(page = %section.page_key, index = section.index, "opening edit session");
        self.active = Some(EditSession::open(section, slot, element, target));
        Ok(())
    }

    /// Apply a live-preview operation to the open session
    pub fn preview(&mut self, op: PreviewOp) -> Result<(), EditorError> {
        let session = self.active.as_mut().ok_or(EditorError::SessionNotOpen)?;
        session.preview(op, self.engine.as_ref());
        Ok(())
    }

    /// OPEN → COMMITTED → CLOSED: write the session's content and style
    /// into the deck. The session's element is discarded; the caller is
    /// responsible for persisting the deck and repainting the page.
    pub fn commit(&mut self, deck: &mut Deck) -> Result<SectionAddress, EditorError> {
        let session = self.active.take().ok_or(EditorError::SessionNotOpen)?;
        let (address, content, style) = session.commit();

        debug!(page = %address.page_key, index = address.index, "committing edit");
        deck.commit_section_edit(&address, content, style)?;
        Ok(address)
    }

    /// OPEN → REVERTED → CLOSED: restore the element from the snapshot and
    /// return it to its frame slot. The deck is untouched.
    pub fn cancel(&mut self, frame: &mut Frame) -> Result<(), EditorError> {
        let session = self.active.take().ok_or(EditorError::SessionNotOpen)?;

        debug!(page = %session.address().page_key, "reverting edit");
        let (slot, element) = session.revert();
        frame.restore_element(slot, element);
        Ok(())
    }
}

impl Default for EditController {
    fn default() -> Self {
        Self::new()
    }
}
