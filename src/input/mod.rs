mod prompts;
pub mod validation;

pub use prompts::Prompter;
pub use validation::is_valid_type;
