use super::validation::{is_valid_type, parse_selection, suggest_commit_type};
use crate::config::COMMIT_TYPES;
use crate::error::CliError;
use crate::message::{merge_paragraphs, CommitMessage};
use colored::*;
use log::debug;
use std::io::{BufRead, ErrorKind, Write};

/// Line-oriented question/answer session over any reader and writer.
///
/// Every prompt blocks until a full line is read. A failed read is treated
/// like end of input: optional prompts see an empty answer, required ones
/// give up with [`CliError::InputError`] instead of asking forever.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Walk through every field and return the finished message.
    pub fn collect_commit(&mut self) -> Result<CommitMessage, CliError> {
        let commit_type = self.select_commit_type()?;
        let scope = self.input_scope()?;
        let description = self.input_title()?;

        let extra_description = self.input_multiline(
            "Enter description (optional, press Enter to skip, multiple lines allowed, end with an empty line):",
        )?;
        let body = self.input_multiline(
            "Enter body (optional, press Enter to skip, multiple lines allowed, end with an empty line):",
        )?;

        let breaking = self.confirm_breaking_change()?;
        let footer = self.input_multiline(
            "Enter footer (optional, press Enter to skip, multiple lines allowed, end with an empty line):",
        )?;

        Ok(CommitMessage {
            commit_type,
            scope,
            description,
            body: merge_paragraphs(&extra_description, &body),
            breaking,
            footer,
        })
    }

    /// Show the numbered type menu until a number in range or an allowed
    /// type name is entered.
    pub fn select_commit_type(&mut self) -> Result<String, CliError> {
        loop {
            self.say(&"Select commit type:".cyan().to_string())?;
            for (i, commit_type) in COMMIT_TYPES.iter().enumerate() {
                writeln!(self.writer, "{:2}. {}", i + 1, commit_type)?;
            }
            self.say(&"Enter number or type directly: ".cyan().to_string())?;

            let input = self
                .read_line()
                .ok_or_else(|| CliError::InputError("no commit type selected".to_string()))?;

            if let Some(selection) = parse_selection(&input) {
                if let Some(commit_type) = selection {
                    return Ok(commit_type.to_string());
                }
                self.complain("Invalid selection. Please try again.")?;
            } else if is_valid_type(&input) {
                return Ok(input);
            } else {
                match suggest_commit_type(&input) {
                    Some(suggestion) => self.complain(&format!(
                        "Invalid type. Did you mean '{suggestion}'? Please try again."
                    ))?,
                    None => self.complain("Invalid type. Please try again.")?,
                }
            }
        }
    }

    pub fn input_scope(&mut self) -> Result<String, CliError> {
        self.say(&"Enter scope (optional, press Enter to skip): ".cyan().to_string())?;
        Ok(self.read_line().unwrap_or_default())
    }

    /// Short title; becomes the header description. Required.
    pub fn input_title(&mut self) -> Result<String, CliError> {
        loop {
            self.say(&"Enter short title (required): ".cyan().to_string())?;
            let title = self
                .read_line()
                .ok_or_else(|| CliError::InputError("title is required".to_string()))?;
            if !title.is_empty() {
                return Ok(title);
            }
            self.complain("Title is required. Please try again.")?;
        }
    }

    pub fn confirm_breaking_change(&mut self) -> Result<bool, CliError> {
        self.say(&"Is this a breaking change? (y/N): ".cyan().to_string())?;
        Ok(self.read_line().unwrap_or_default().to_lowercase() == "y")
    }

    /// Read lines until the first blank one (or end of input), joined by
    /// newlines. Each line is trimmed.
    pub fn input_multiline(&mut self, label: &str) -> Result<String, CliError> {
        self.say(&label.cyan().to_string())?;
        let mut lines = Vec::new();
        while let Some(line) = self.read_line() {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Next trimmed line, or `None` at end of input or on a read error.
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) if buf.is_empty() => return None,
                Ok(_) => return Some(String::from_utf8_lossy(&buf).trim().to_string()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!("Ignoring unreadable input: {e}");
                    return None;
                }
            }
        }
    }

    fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn complain(&mut self, text: &str) -> Result<(), CliError> {
        self.say(&text.red().to_string())
    }
}
