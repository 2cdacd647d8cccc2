//! # Lectern Editor
//!
//! In-place rich-text editing engine for Lectern decks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Page → Frame (display tree)       │
//! └─────────────────────────────────────────────┘
//!                     ↓ element
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditController + EditSession        │
//! │  - Exclusive session guard                  │
//! │  - Snapshot on open, live preview while open│
//! │  - Commit writes the deck; cancel reverts   │
//! │    the element and leaves the deck alone    │
//! └─────────────────────────────────────────────┘
//!                     ↓ commit
//! ┌─────────────────────────────────────────────┐
//! │ document: Deck (source of truth)            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Live preview, deferred write**: every control mutates the bound
//!    element immediately; the deck is untouched until commit
//! 2. **Deterministic revert**: cancel restores the element byte-identical
//!    to its pre-open snapshot
//! 3. **One session at a time**: re-entrant open is rejected, never
//!    implicitly serialized
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lectern_editor::{EditController, PreviewOp, FontSize};
//!
//! let mut edits = EditController::new();
//! edits.open(&deck, &mut frame, section, slot)?;
//! edits.preview(PreviewOp::SetFontSize(FontSize::Px60))?;
//! let committed = edits.commit(&mut deck)?;   // caller persists + repaints
//! ```

mod controller;
mod errors;
mod panel;
mod richtext;
mod session;

pub use controller::EditController;
pub use errors::EditorError;
pub use panel::{Panel, PANEL_TOP_OFFSET};
pub use richtext::{FragmentEngine, InlineCommand, RichTextEngine, Selection};
pub use session::{
    Controls, EditArea, EditSession, ElementSnapshot, FontFamily, FontSize, PreviewOp,
    SessionState, DEFAULT_SECTION_COLOR,
};
