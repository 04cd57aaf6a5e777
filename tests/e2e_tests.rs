//! PTY-based E2E tests for btext.
//!
//! These tests spawn the btext-demo binary in a pseudo-terminal and verify
//! the actual terminal output, including ANSI escape codes for colors.
//!
//! Run with: `cargo test -p btext --test e2e_tests`

mod common;

use common::strip_ansi;
use expectrl::{Session, session::OsProcess};
use std::process::Command;
use std::time::Duration;

/// Get the btext-demo binary path
fn demo_binary() -> String {
    let debug_path = env!("CARGO_MANIFEST_DIR").to_string() + "/target/debug/btext-demo";
    if std::path::Path::new(&debug_path).exists() {
        return debug_path;
    }
    // Fall back to release
    env!("CARGO_MANIFEST_DIR").to_string() + "/target/release/btext-demo"
}

/// Check if the demo binary exists
fn has_demo_binary() -> bool {
    std::path::Path::new(&demo_binary()).exists()
}

/// Spawn the demo binary with arguments
fn spawn_demo(args: &[&str]) -> Result<Session<OsProcess>, Box<dyn std::error::Error>> {
    let binary = demo_binary();
    let mut cmd = Command::new(&binary);
    cmd.args(args);
    let session = Session::spawn(cmd)?;
    Ok(session)
}

/// Read all output until EOF
fn read_until_eof(session: &mut Session<OsProcess>) -> String {
    use std::io::Read;

    session.set_expect_timeout(Some(Duration::from_secs(5)));

    let mut output = Vec::new();

    loop {
        let mut buf = [0u8; 4096];
        match session.read(&mut buf) {
            Ok(0) => break, // EOF
            Ok(n) => output.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                // No more data available, wait a bit and check for EOF
                std::thread::sleep(Duration::from_millis(100));
                match session.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => output.extend_from_slice(&buf[..n]),
                    Err(_) => break,
                }
            }
            Err(_) => break,
        }
    }

    String::from_utf8_lossy(&output).to_string()
}

// =============================================================================
// Static Output Tests
// =============================================================================

#[test]
fn test_print_named_color() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found. Run `cargo build -p btext` first.");
        return;
    }

    let mut session = spawn_demo(&["print", "red", "hello", "world"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    assert!(
        output.contains("\x1b[31mhello world\x1b[0m"),
        "Should contain red text: {:?}",
        output
    );
}

#[test]
fn test_print_multi_segment() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["multi"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    let stripped = strip_ansi(&output);

    assert!(
        stripped.contains("a b c"),
        "Should contain all segments in order: {}",
        stripped
    );
    assert!(
        output.contains("\x1b[31mb\x1b[0m"),
        "Should color 'b' red: {:?}",
        output
    );
    assert!(
        output.contains("\x1b[34mc\x1b[0m"),
        "Should color 'c' blue: {:?}",
        output
    );
}

#[test]
fn test_random_spec() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["random", "random_red", "abc"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    assert!(
        output.contains("\x1b[31ma\x1b[0m\x1b[31mb\x1b[0m\x1b[31mc\x1b[0m"),
        "Should wrap each char in red: {:?}",
        output
    );
}

#[test]
fn test_options_json() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["options", r#"{"color":"green","sep":"+"}"#, "x", "y"])
        .expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    assert!(
        output.contains("\x1b[32mx+y\x1b[0m"),
        "Should join with custom sep: {:?}",
        output
    );
}

// =============================================================================
// Animation Tests
// =============================================================================

#[test]
fn test_animate_left() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session =
        spawn_demo(&["animate", "left", "10ms", "hey", "cyan"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);

    // Three frames, each starting with a line reset
    assert_eq!(
        output.matches("\r\x1b[2K").count(),
        3,
        "Should write one frame per char: {:?}",
        output
    );
    assert!(output.contains("\x1b[36mh\x1b[0m"), "First frame: {:?}", output);
    assert!(output.contains("\x1b[36mhey\x1b[0m"), "Last frame: {:?}", output);
}

#[test]
fn test_animate_right() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session =
        spawn_demo(&["animate", "right", "10ms", "hey", "cyan"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    assert!(
        output.contains("\r\x1b[2K  \x1b[36my\x1b[0m"),
        "First frame should be right-aligned: {:?}",
        output
    );
}

#[test]
fn test_animate_multi_warns() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["animate-multi"]).expect("Failed to spawn");

    // stderr shares the PTY, so the warning shows up in the same stream
    let output = read_until_eof(&mut session);
    let stripped = strip_ansi(&output);

    assert!(
        stripped.contains("warning:"),
        "Should surface a warning: {}",
        stripped
    );
    assert!(
        stripped.contains("left right"),
        "Should print statically: {}",
        stripped
    );
    assert!(!output.contains("\x1b[2K"), "Should not animate: {:?}", output);
}

// =============================================================================
// Input Tests
// =============================================================================

#[test]
fn test_input_prompt() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["input", "yellow", "name? "]).expect("Failed to spawn");
    session.send_line("Ada").expect("Failed to send");

    let output = read_until_eof(&mut session);
    assert!(
        output.contains("\x1b[33mname? \x1b[0m"),
        "Prompt should be yellow: {:?}",
        output
    );
    assert!(
        output.contains("got: [Ada]"),
        "Should return the typed line unchanged: {:?}",
        output
    );
}

// =============================================================================
// Global Install/Restore Tests
// =============================================================================

#[test]
fn test_restore_goes_plain() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["restore"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    assert!(
        output.contains("\x1b[31mcolored\x1b[0m"),
        "Installed console should color: {:?}",
        output
    );
    assert!(
        output.contains("plain +color=red"),
        "Restored print should be plain: {:?}",
        output
    );
}
