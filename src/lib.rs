pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod git;
pub mod input;
pub mod logger;
pub mod message;
pub mod usage;
