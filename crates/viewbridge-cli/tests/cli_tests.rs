//! Integration tests for the viewbridge binary

use std::io::Write;
use std::process::Command;

fn viewbridge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_viewbridge"))
}

#[test]
fn script_command_prints_ipc_script_by_default() {
    let output = viewbridge().arg("script").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("window.ipc.postMessage(JSON.stringify(msg));"));
    assert!(stdout.contains("window.onPluginMessageInternal"));
}

#[test]
fn script_command_honors_transport_flag() {
    let output = viewbridge()
        .args(["script", "--transport", "webkit", "--handler", "editor"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"webkit.messageHandlers["editor"].postMessage"#));
}

#[test]
fn check_command_accepts_valid_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "transport = \"webkit\"\nwidth = 200\nheight = 200").unwrap();

    let output = viewbridge()
        .args(["check", "--config", file.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Config is valid!"));
}

#[test]
fn check_command_rejects_zero_size() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "width = 0").unwrap();

    let output = viewbridge()
        .args(["check", "--config", file.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
