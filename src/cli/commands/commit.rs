use crate::cli::Command;
use crate::error::CliError;
use crate::feedback::{request_feedback, FeedbackPrompt, InquireFeedbackPrompt};
use crate::git::{GitCli, Vcs};
use crate::input::Prompter;
use crate::logger;
use crate::message::{assemble, CommitFields};
use crate::usage::{increment_commit_count, FileStateStore, StateStore};
use colored::*;
use log::debug;
use std::io::{self, BufRead, Write};
use structopt::StructOpt;

#[derive(Debug, StructOpt, Default)]
pub struct CommitCommand {
    #[structopt(short = "t", long = "type", help = "Commit type (required)")]
    pub type_: Option<String>,

    #[structopt(short = "s", long, help = "Commit scope (optional)")]
    pub scope: Option<String>,

    #[structopt(short = "m", long, help = "Commit title (required)")]
    pub title: Option<String>,

    #[structopt(short = "d", long, help = "Commit description (optional)")]
    pub description: Option<String>,

    #[structopt(short = "b", long, help = "Commit body (optional)")]
    pub body: Option<String>,

    #[structopt(short = "!", long, help = "Indicates a breaking change")]
    pub breaking: bool,

    #[structopt(short = "f", long, help = "Commit footer (optional)")]
    pub footer: Option<String>,

    #[structopt(short = "r", long, help = "Review commit before pushing")]
    pub review: bool,

    #[structopt(short = "p", long, help = "Push commit to remote repository")]
    pub push: bool,

    #[structopt(short = "i", long, help = "Run in interactive mode")]
    pub interactive: bool,
}

impl CommitCommand {
    /// Prompting is used unless a type or title was given on the command line.
    pub fn is_interactive(&self) -> bool {
        let given = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        self.interactive || (!given(&self.type_) && !given(&self.title))
    }

    pub fn fields(&self) -> CommitFields {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        CommitFields {
            commit_type: value(&self.type_),
            scope: value(&self.scope),
            title: value(&self.title),
            description: value(&self.description),
            body: value(&self.body),
            breaking: self.breaking,
            footer: value(&self.footer),
        }
    }

    pub fn run(
        &self,
        vcs: &dyn Vcs,
        store: &dyn StateStore,
        feedback: &dyn FeedbackPrompt,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), CliError> {
        if !vcs.is_repository() {
            return Err(CliError::NotARepository);
        }

        let message = if self.is_interactive() {
            debug!("Running in interactive mode");
            Prompter::new(&mut *input, &mut *output).collect_commit()?
        } else {
            debug!("Running in non-interactive mode");
            assemble(self.fields())?
        };

        let full_message = message.format();
        writeln!(output, "\n{}", "✅ Commit Created:".green())?;
        writeln!(output, "{full_message}")?;
        output.flush()?;

        record_commit(vcs, store, feedback, &full_message)?;

        if self.review {
            debug!("Review was requested; nothing to review before pushing");
        }

        if self.push {
            logger::progress("Pushing changes to remote repository...");
            vcs.push()?;
            logger::success("Changes pushed successfully.");
        }

        Ok(())
    }
}

impl Command for CommitCommand {
    fn execute(&self) -> Result<(), CliError> {
        let vcs = GitCli::current_dir()?;
        let store = FileStateStore::default_location();
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(
            &vcs,
            &store,
            &InquireFeedbackPrompt,
            &mut stdin.lock(),
            &mut stdout.lock(),
        )
    }
}

/// Commit through `vcs`, then bump the usage counter and ask for feedback
/// when the threshold is hit. Counter problems never fail the commit.
pub fn record_commit(
    vcs: &dyn Vcs,
    store: &dyn StateStore,
    feedback: &dyn FeedbackPrompt,
    message: &str,
) -> Result<(), CliError> {
    vcs.commit(message)?;
    logger::success("Changes committed successfully.");

    if let Err(e) = increment_commit_count(store) {
        logger::warning(&format!("Failed to update commit count: {e}"));
    }

    let state = store.load();
    if state.feedback_due() {
        request_feedback(feedback, &state);
    }

    Ok(())
}
