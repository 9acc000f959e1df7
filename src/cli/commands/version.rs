use crate::cli::Command;
use crate::config::version_string;
use crate::error::CliError;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct VersionCommand {}

impl Command for VersionCommand {
    fn execute(&self) -> Result<(), CliError> {
        println!("{}", version_string());
        Ok(())
    }
}
