use crate::config::{FEEDBACK_ADDRESS, FEEDBACK_THRESHOLD};
use crate::error::CliError;
use crate::logger;
use crate::usage::UsageState;
use inquire::validator::Validation;
use inquire::{CustomType, Text};
use log::info;
use std::io::IsTerminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub rating: u8,
    pub suggestions: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedbackPrompt {
    fn ask(&self) -> Result<Feedback, CliError>;
}

/// Asks on the terminal. Refuses when stdin is piped.
pub struct InquireFeedbackPrompt;

impl FeedbackPrompt for InquireFeedbackPrompt {
    fn ask(&self) -> Result<Feedback, CliError> {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::InputError("stdin is not a terminal".to_string()));
        }

        let rating = CustomType::<u8>::new("How satisfied are you with this tool (1-5)?")
            .with_error_message("Please type a number from 1 to 5")
            .with_validator(|rating: &u8| {
                if (1..=5).contains(rating) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Rating must be between 1 and 5".into()))
                }
            })
            .prompt()
            .map_err(|e| CliError::InputError(e.to_string()))?;

        let suggestions = Text::new("Any suggestions for improvement?")
            .prompt()
            .map_err(|e| CliError::InputError(e.to_string()))?;

        Ok(Feedback {
            rating,
            suggestions: suggestions.trim().to_string(),
        })
    }
}

/// Stand-in for delivery: nothing leaves the machine, the feedback is logged.
pub fn send_feedback(feedback: &Feedback, state: &UsageState) -> String {
    let sender = if state.user_email.is_empty() {
        "anonymous"
    } else {
        state.user_email.as_str()
    };
    let report = format!(
        "Subject: Convcommit Feedback\nFrom: {sender}\nTo: {FEEDBACK_ADDRESS}\n\nRating: {}\nSuggestions: {}",
        feedback.rating, feedback.suggestions
    );
    info!("{report}");
    report
}

/// Ask for and record feedback. Failures are only warned about.
pub fn request_feedback(prompt: &dyn FeedbackPrompt, state: &UsageState) {
    logger::info(&format!(
        "You've made {FEEDBACK_THRESHOLD} commits with convcommit! We'd love your feedback:"
    ));
    match prompt.ask() {
        Ok(feedback) => {
            send_feedback(&feedback, state);
            logger::success(&format!("Feedback recorded for {FEEDBACK_ADDRESS}"));
        }
        Err(e) => logger::warning(&format!("Skipping feedback: {e}")),
    }
}
