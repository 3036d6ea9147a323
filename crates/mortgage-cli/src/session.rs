use mortgage_core::session::FileStore;
use std::path::PathBuf;

/// Where and whether this invocation persists session state.
pub struct SessionContext {
    pub state_file: Option<String>,
    pub no_save: bool,
}

impl SessionContext {
    /// Open the session store at the first of: `--state-file`, the
    /// `AMORT_SESSION` environment variable, `~/.amort_session.json`.
    pub fn open_store(&self) -> Result<FileStore, Box<dyn std::error::Error>> {
        Ok(FileStore::open(self.resolve_path())?)
    }

    fn resolve_path(&self) -> PathBuf {
        if let Some(ref path) = self.state_file {
            return PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os("AMORT_SESSION") {
            return PathBuf::from(path);
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".amort_session.json"),
            None => PathBuf::from(".amort_session.json"),
        }
    }
}
