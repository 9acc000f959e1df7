/// Allowed commit types, in the order the interactive menu numbers them.
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE";
pub const BREAKING_CHANGE_FOOTER: &str = "BREAKING CHANGE: This commit introduces breaking changes.";

/// Number of commits after which the feedback prompt is shown, once.
pub const FEEDBACK_THRESHOLD: u32 = 5;
pub const FEEDBACK_ADDRESS: &str = "jurvisdanford329@gmail.com";

pub const STATE_FILE_NAME: &str = ".convcommit_config";

pub fn version_string() -> String {
    format!("Convcommit v{}", env!("CARGO_PKG_VERSION"))
}
