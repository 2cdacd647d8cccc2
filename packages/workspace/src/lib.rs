//! # Lectern Workspace
//!
//! Wires the deck, renderer, and editor into a running application: an
//! explicit [`AppContext`] constructed at startup and passed to whatever
//! host drives it. No ambient global.
//!
//! The workspace owns the thin I/O collaborators around the core:
//!
//! - **Load**: stored deck → bundled deck → synthesized sample (with a
//!   one-shot blocking notice)
//! - **Persist**: whole-deck save after every commit; failures are logged
//!   and swallowed
//! - **Export**: the deck as a `default-meeting.json` artifact
//! - **Navigation**: current-page selection and the ordered nav list

mod app;
mod config;
mod errors;
mod navigation;
mod notice;
mod store;

pub use app::AppContext;
pub use config::{WorkspaceConfig, DEFAULT_CONFIG_NAME};
pub use errors::WorkspaceError;
pub use navigation::{NavController, NavItem};
pub use notice::{Notice, NoticeSink, RecordingSink, TracingSink};
pub use store::{export_deck, DeckStore, FileStore, MemoryStore, EXPORT_FILE_NAME, STORE_FILE_NAME};
