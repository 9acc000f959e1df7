pub mod commands;

use self::commands::{commit, version};
use crate::error::CliError;
use structopt::StructOpt;

pub trait Command {
    fn execute(&self) -> Result<(), CliError>;
}

#[derive(StructOpt)]
pub enum CliCommand {
    #[structopt(about = "Print the version number")]
    Version(version::VersionCommand),
}

impl CliCommand {
    pub fn execute(&self) -> Result<(), CliError> {
        match self {
            CliCommand::Version(cmd) => cmd.execute(),
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = "A CLI tool for creating conventional commits",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Opt {
    #[structopt(subcommand)]
    pub cmd: Option<CliCommand>,

    #[structopt(flatten)]
    pub commit: commit::CommitCommand,

    #[structopt(short = "v", long = "verbose", help = "Show debug output")]
    pub verbose: bool,

    #[structopt(short = "q", long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl Opt {
    pub fn execute(&self) -> Result<(), CliError> {
        match &self.cmd {
            Some(cmd) => cmd.execute(),
            None => self.commit.execute(),
        }
    }
}
