use convcommit::config::COMMIT_TYPES;
use convcommit::error::CliError;
use convcommit::input::is_valid_type;
use convcommit::message::{assemble, CommitFields, CommitMessage};

fn message(commit_type: &str, scope: &str, description: &str, breaking: bool, footer: &str) -> CommitMessage {
    CommitMessage {
        commit_type: commit_type.to_string(),
        scope: scope.to_string(),
        description: description.to_string(),
        body: String::new(),
        breaking,
        footer: footer.to_string(),
    }
}

#[test]
fn test_header_shape_for_every_type() {
    for commit_type in COMMIT_TYPES {
        for scope in ["", "cli"] {
            for breaking in [false, true] {
                let formatted = message(commit_type, scope, "do the thing", breaking, "").format();
                assert!(formatted.starts_with(commit_type));
                let header = formatted.lines().next().unwrap();
                assert!(header.ends_with(": do the thing"), "{header}");
            }
        }
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(message("feat", "api", "add x", false, "").format(), "feat(api): add x");
    assert_eq!(
        message("fix", "", "y", true, "").format(),
        "fix!: y\n\nBREAKING CHANGE: This commit introduces breaking changes."
    );
    assert_eq!(
        message("chore", "", "z", true, "ref #1").format(),
        "chore!: z\n\nBREAKING CHANGE: This commit introduces breaking changes.\nref #1"
    );
}

#[test]
fn test_existing_marker_anywhere_in_footer_is_respected() {
    let footer = "Refs: #9\nBREAKING CHANGE: config keys renamed";
    assert_eq!(
        message("build", "", "new layout", true, footer).format(),
        format!("build!: new layout\n\n{footer}")
    );
}

#[test]
fn test_type_validation() {
    assert!(is_valid_type("feat"));
    assert!(is_valid_type("revert"));
    assert!(!is_valid_type("feature"));
    assert!(!is_valid_type("Feat"));
}

#[test]
fn test_assemble_validation_order() {
    let err = assemble(CommitFields {
        title: "x".to_string(),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("type is required"));

    let err = assemble(CommitFields {
        commit_type: "feat".to_string(),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("title is required"));

    let err = assemble(CommitFields {
        commit_type: "wip".to_string(),
        title: "x".to_string(),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, CliError::InvalidCommitType { .. }));
    assert!(err.to_string().contains("feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert"));
}

#[test]
fn test_assemble_full_message() {
    let msg = assemble(CommitFields {
        commit_type: "feat".to_string(),
        scope: "auth".to_string(),
        title: "add tokens".to_string(),
        description: "Short-lived tokens.".to_string(),
        body: "Refresh happens in the background.".to_string(),
        breaking: true,
        footer: "Closes #12".to_string(),
    })
    .unwrap();
    assert_eq!(
        msg.format(),
        "feat(auth)!: add tokens\n\nShort-lived tokens.\n\nRefresh happens in the background.\n\n\
         BREAKING CHANGE: This commit introduces breaking changes.\nCloses #12"
    );
}
