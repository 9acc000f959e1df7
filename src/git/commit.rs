use crate::error::CliError;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

/// Stage `message` in a temporary file and run `git commit -F` on it.
///
/// The file lives only for the duration of this call.
pub fn commit_changes(workdir: &Path, message: &str) -> Result<(), CliError> {
    let mut message_file = tempfile::Builder::new()
        .prefix("commit-msg-")
        .suffix(".txt")
        .tempfile()?;
    message_file.write_all(message.as_bytes())?;
    message_file.flush()?;
    log::debug!("Commit message staged at {:?}", message_file.path());

    let output = Command::new("git")
        .arg("commit")
        .arg("-F")
        .arg(message_file.path())
        .current_dir(workdir)
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(CliError::CommitFailed(combined_output(&output)))
    }
}

pub fn push_changes(workdir: &Path) -> Result<(), CliError> {
    let output = Command::new("git")
        .arg("push")
        .current_dir(workdir)
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(CliError::PushFailed(combined_output(&output)))
    }
}

/// stdout followed by stderr, trimmed.
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text.trim().to_string()
}
