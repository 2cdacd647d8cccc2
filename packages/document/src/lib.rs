//! # Lectern Document
//!
//! Core deck model for Lectern: ordered pages of styled, HTML-fragment
//! sections.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Deck / Page / Section             │
//! │  - Ordered page map (numeric key order)     │
//! │  - Nav label derivation                     │
//! │  - Committed section edits                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Page → Frame (display tree)       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The deck is source of truth**: frames and edit previews are derived
//!    views that never feed back except through a committed edit
//! 2. **Pure data**: no behavior beyond structural queries and the commit
//!    write-back
//! 3. **Opaque rich text**: section content is an inline-HTML fragment,
//!    round-tripped verbatim

mod deck;
mod errors;

pub use deck::{
    nav_label, Deck, Page, PageMap, Section, SectionAddress, SectionKind, StyleProps,
};
pub use errors::DocumentError;
