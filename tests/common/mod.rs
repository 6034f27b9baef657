use assert_cmd::Command;
use tempfile::TempDir;

/// Script-mode command whose data directory lives in a fresh temp dir.
/// Keep the returned `TempDir` alive for as long as the command runs.
pub fn script_command() -> (Command, TempDir) {
    let home = TempDir::new().expect("create temp home");
    let mut cmd = Command::cargo_bin("pennywise").expect("pennywise binary");
    cmd.env("PENNYWISE_CLI_SCRIPT", "1")
        .env("PENNYWISE_HOME", home.path())
        .env_remove("RUST_LOG");
    (cmd, home)
}
