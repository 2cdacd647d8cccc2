mod export;
mod nav;
mod show;

pub use export::{export, ExportArgs};
pub use nav::{nav, NavArgs};
pub use show::{show, ShowArgs};

use anyhow::Result;
use lectern_workspace::{AppContext, FileStore, TracingSink, WorkspaceConfig};

/// Build the application context the way the host would at startup
pub(crate) fn bootstrap(cwd: &str) -> Result<AppContext> {
    let config = WorkspaceConfig::load(cwd)?;
    let store = FileStore::new(config.store_dir(cwd));
    let app = AppContext::bootstrap(&config, cwd, Box::new(store), Box::new(TracingSink))?;
    Ok(app)
}
