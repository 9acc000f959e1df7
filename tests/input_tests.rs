mod common;

use convcommit::error::CliError;
use convcommit::input::Prompter;
use std::io::Cursor;

fn collect(input: &str) -> Result<convcommit::message::CommitMessage, CliError> {
    common::setup_test_env();
    let mut out = Vec::new();
    Prompter::new(Cursor::new(input.as_bytes()), &mut out).collect_commit()
}

#[test]
fn test_minimal_session() {
    let msg = collect("1\n\nadd thing\n\n\n\n\n").unwrap();
    assert_eq!(msg.format(), "feat: add thing");
}

#[test]
fn test_multiline_fields_keep_order() {
    let input = "refactor\nparser\nsplit lexer\n\
                 one\ntwo\nthree\n\n\
                 body a\n   \n\
                 n\n\
                 Refs: #1\nRefs: #2\n\n";
    let msg = collect(input).unwrap();
    assert_eq!(msg.body, "one\ntwo\nthree\n\nbody a");
    assert_eq!(msg.footer, "Refs: #1\nRefs: #2");
    assert!(!msg.breaking);
}

#[test]
fn test_body_only_has_no_leading_blank_line() {
    let msg = collect("fix\n\nnull check\n\nguard added\n\n\n\n").unwrap();
    assert_eq!(msg.body, "guard added");
}

#[test]
fn test_breaking_session() {
    let msg = collect("2\ncore\ndrop api\n\n\ny\n\n").unwrap();
    assert_eq!(
        msg.format(),
        "fix(core)!: drop api\n\nBREAKING CHANGE: This commit introduces breaking changes."
    );
}

#[test]
fn test_invalid_answers_are_retried() {
    let msg = collect("99\nfeature\nstyle\n\n\n\nformat code\n\n\n\n\n").unwrap();
    assert_eq!(msg.commit_type, "style");
    assert_eq!(msg.description, "format code");
}

#[test]
fn test_input_ending_early_is_an_error() {
    assert!(matches!(collect("feat\nscope\n"), Err(CliError::InputError(_))));
}

#[test]
fn test_input_ending_after_title_fills_defaults() {
    let msg = collect("docs\n\nreadme").unwrap();
    assert_eq!(msg.format(), "docs: readme");
}
