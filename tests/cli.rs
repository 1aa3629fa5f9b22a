use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output};

fn dmd(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dmd"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn assert_setup_failure(output: &Output) {
    assert!(!output.status.success());
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(255));
}

#[test]
fn missing_config_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let output = dmd(&[OsStr::new("--config"), path.as_os_str()]);

    assert_setup_failure(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("loading settings from"), "stdout: {}", stdout);
    assert!(stdout.contains("could not read settings"), "stdout: {}", stdout);
}

#[test]
fn malformed_config_exits_with_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "exit_action = \"explode\"").unwrap();
    let output = dmd(&[OsStr::new("--config"), file.path().as_os_str()]);

    assert_setup_failure(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid settings"), "stdout: {}", stdout);
}
