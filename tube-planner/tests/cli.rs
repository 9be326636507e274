//! End-to-end tests of the command-line interface.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tube-planner"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_directions() {
    let output = run(&["Queen's Park", "Bond Street"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("1) Begin journey at Queen's Park station. (0 minutes)\n"));
    assert!(text.contains("Travel on the Bakerloo line, through station stops:"));
    assert!(text.contains("- Paddington (7 minutes)\n"));
    assert!(text.contains(
        "3) Get off at Paddington and interchange to the Elizabeth line. (13 minutes)\n"
    ));
    assert!(text.contains("- Bond Street (16 minutes)\n"));
    assert_eq!(
        text.lines().last().unwrap(),
        "5) Reach destination at Bond Street station. (16 minutes)"
    );
}

#[test]
fn already_at_destination() {
    let output = run(&["Bank", "Bank"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Already at destination!\n");
}

#[test]
fn unknown_start() {
    let output = run(&["Hogwarts", "Bank"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim(),
        "ERROR: Hogwarts is not a valid initial station"
    );
}

#[test]
fn unknown_destination() {
    let output = run(&["Bank", "Diagon Alley"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim(),
        "ERROR: Diagon Alley is not a valid destination"
    );
}

#[test]
fn wrong_argument_count() {
    for args in [&[][..], &["Bank"][..], &["Bank", "Angel", "Euston"][..]] {
        let output = run(args);
        assert!(!output.status.success());
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("Usage"));
    }
}
