//! User-facing notices
//!
//! The workspace decides *when* to say something; the host decides *how*.
//! [`TracingSink`] is the headless default, [`RecordingSink`] is for
//! tests.

use tracing::{info, warn};

/// Something the user should see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Transient, auto-dismissing message
    Toast(String),

    /// Must be acknowledged before the user continues (load failure)
    Blocking(String),
}

/// Host seam for surfacing notices
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

/// Logs notices through tracing
#[derive(Debug, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Toast(message) => info!(%message, "toast"),
            Notice::Blocking(message) => warn!(%message, "blocking notice"),
        }
    }
}

/// Records notices for assertions
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub notices: Vec<Notice>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoticeSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
