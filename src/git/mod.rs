mod commit;
mod repository;

pub use commit::{commit_changes, push_changes};
pub use repository::discover_repository_from;

use crate::error::CliError;
use std::env;
use std::path::PathBuf;

/// The version-control operations the commit flow relies on.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    fn is_repository(&self) -> bool;
    fn commit(&self, message: &str) -> Result<(), CliError>;
    fn push(&self) -> Result<(), CliError>;
}

/// Drives the `git` binary from a working directory.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn current_dir() -> Result<Self, CliError> {
        Ok(Self::new(env::current_dir()?))
    }
}

impl Vcs for GitCli {
    fn is_repository(&self) -> bool {
        discover_repository_from(&self.workdir).is_ok()
    }

    fn commit(&self, message: &str) -> Result<(), CliError> {
        commit_changes(&self.workdir, message)
    }

    fn push(&self) -> Result<(), CliError> {
        push_changes(&self.workdir)
    }
}
