//! Per-user usage counter persisted as a small JSON file.

use crate::config::{FEEDBACK_THRESHOLD, STATE_FILE_NAME};
use crate::error::CliError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageState {
    pub commit_count: u32,
    pub user_email: String,
}

impl UsageState {
    pub fn feedback_due(&self) -> bool {
        self.commit_count == FEEDBACK_THRESHOLD
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait StateStore {
    /// Current state. A missing or unreadable file yields the default.
    fn load(&self) -> UsageState;
    fn save(&self, state: &UsageState) -> Result<(), CliError>;
}

pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.convcommit_config`, or the working directory when no home is known.
    pub fn default_location() -> Self {
        let path = dirs::home_dir()
            .map(|home| home.join(STATE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(STATE_FILE_NAME));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> UsageState {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return UsageState::default(),
            Err(e) => {
                debug!("Could not read {}: {e}", self.path.display());
                return UsageState::default();
            }
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            debug!("Ignoring malformed state file {}: {e}", self.path.display());
            UsageState::default()
        })
    }

    fn save(&self, state: &UsageState) -> Result<(), CliError> {
        let data = serde_json::to_string(state)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Read-modify-write of the counter. Returns the new count.
pub fn increment_commit_count(store: &dyn StateStore) -> Result<u32, CliError> {
    let mut state = store.load();
    state.commit_count = state.commit_count.saturating_add(1);
    store.save(&state)?;
    debug!("Commit count is now {}", state.commit_count);
    Ok(state.commit_count)
}
