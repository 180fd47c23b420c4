use std::io::Write;
use std::process::{Command, Output, Stdio};

fn tile_filter(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tile-filter"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tile-filter");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn prints_drawable_words() {
    let output = tile_filter("fizz\n  FIZZ \njjj\njjjj\n\nquixotic\nzzzz\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fizz\nFIZZ\njjj\n\nquixotic\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn empty_input() {
    let output = tile_filter("");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_tile_stops_the_run() {
    let output = tile_filter("fizz\nr2d2\nquixotic\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "fizz\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown tile '2' in \"r2d2\""), "{}", stderr);
}

#[test]
fn rejected_line_is_not_checked_further() {
    let output = tile_filter("jjjj!\nbuzz\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "buzz\n");
}

#[test]
fn unknown_tile_after_drawable_letters_is_fatal() {
    let output = tile_filter("buzz\njjj!\nfizz\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "buzz\n");
}
