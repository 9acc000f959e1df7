//! Conventional commit message model.
//!
//! A [`CommitMessage`] is built once per commit, either by the interactive
//! collector or by [`assemble`] from command-line values, and rendered with
//! [`CommitMessage::format`].

use crate::config::{BREAKING_CHANGE_FOOTER, BREAKING_CHANGE_MARKER, COMMIT_TYPES};
use crate::error::CliError;
use crate::input::validation::{is_valid_type, suggest_commit_type};
use crate::logger;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage {
    pub commit_type: String,
    pub scope: String,
    pub description: String,
    pub body: String,
    pub breaking: bool,
    pub footer: String,
}

impl CommitMessage {
    /// Render as `type(scope)!: description`, then body and footer
    /// paragraphs separated by blank lines.
    pub fn format(&self) -> String {
        let mut full_message = self.commit_type.clone();

        if !self.scope.is_empty() {
            full_message.push('(');
            full_message.push_str(&self.scope);
            full_message.push(')');
        }
        if self.breaking {
            full_message.push('!');
        }
        full_message.push_str(": ");
        full_message.push_str(&self.description);

        if !self.body.is_empty() {
            full_message.push_str("\n\n");
            full_message.push_str(&self.body);
        }

        let footer = self.effective_footer();
        if !footer.is_empty() {
            full_message.push_str("\n\n");
            full_message.push_str(&footer);
        }

        full_message
    }

    /// Footer with the breaking-change line prepended when the commit is
    /// breaking and the user did not write the marker themselves.
    pub fn effective_footer(&self) -> String {
        if !self.breaking || self.footer.contains(BREAKING_CHANGE_MARKER) {
            return self.footer.clone();
        }
        if self.footer.is_empty() {
            BREAKING_CHANGE_FOOTER.to_string()
        } else {
            format!("{}\n{}", BREAKING_CHANGE_FOOTER, self.footer)
        }
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Join two paragraphs with a blank line, dropping whichever is empty.
pub fn merge_paragraphs(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{first}\n\n{second}"),
    }
}

/// Raw field values as supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CommitFields {
    pub commit_type: String,
    pub scope: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub breaking: bool,
    pub footer: String,
}

/// Build a message from flag values. Checks run in order: type present,
/// title present, type valid. The type must match exactly; surrounding
/// whitespace only counts when deciding whether it was given at all.
pub fn assemble(fields: CommitFields) -> Result<CommitMessage, CliError> {
    let commit_type = fields.commit_type.as_str();
    let title = fields.title.trim();

    if commit_type.trim().is_empty() {
        return Err(CliError::MissingField { field: "type" });
    }
    if title.is_empty() {
        return Err(CliError::MissingField { field: "title" });
    }
    if !is_valid_type(commit_type) {
        if let Some(suggestion) = suggest_commit_type(commit_type) {
            logger::info(&format!("Did you mean '{suggestion}'?"));
        }
        return Err(CliError::InvalidCommitType {
            given: commit_type.to_string(),
            valid: COMMIT_TYPES.join(", "),
        });
    }

    Ok(CommitMessage {
        commit_type: commit_type.to_string(),
        scope: fields.scope,
        description: title.to_string(),
        body: merge_paragraphs(&fields.description, &fields.body),
        breaking: fields.breaking,
        footer: fields.footer,
    })
}
