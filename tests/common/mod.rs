use std::process::Command as StdCommand;
use std::sync::Once;
use tempfile::TempDir;

#[allow(dead_code)]
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_test_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
            .is_test(true)
            .init();
    });
}

#[allow(dead_code)]
pub fn git(dir: &TempDir, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Fresh repository with a local identity and one staged file.
#[allow(dead_code)]
pub fn setup_git_repo() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");

    git(&dir, &["init"]);
    git(&dir, &["config", "user.name", "Test User"]);
    git(&dir, &["config", "user.email", "test@example.com"]);
    git(&dir, &["config", "commit.gpgsign", "false"]);

    std::fs::write(dir.path().join("test.txt"), "test content").expect("Failed to write test file");
    git(&dir, &["add", "test.txt"]);

    dir
}

#[allow(dead_code)]
pub fn last_commit_message(dir: &TempDir) -> String {
    git(dir, &["log", "--format=%B", "-n", "1"]).trim_end().to_string()
}
