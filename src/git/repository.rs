use crate::error::CliError;
use git2::Repository;
use std::path::Path;

pub fn discover_repository_from(start: &Path) -> Result<Repository, CliError> {
    log::debug!("Starting repository discovery from: {start:?}");

    match Repository::discover(start) {
        Ok(repo) if repo.is_bare() => {
            log::debug!("Found bare repository at {:?}", repo.path());
            Err(CliError::NotARepository)
        }
        Ok(repo) => Ok(repo),
        Err(e) => {
            log::debug!("Failed to discover repository from {start:?}: {e}");
            Err(CliError::NotARepository)
        }
    }
}
