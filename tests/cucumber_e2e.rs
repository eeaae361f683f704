use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use cucumber::{World as _, gherkin::Step, given, then, when};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    input: String,
    input_path: Option<PathBuf>,
    last_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_sector-drives")
}

fn run_with_stdin(args: Vec<String>, stdin: &str) -> Output {
    let mut child = Command::new(exe())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn sector-drives binary");

    // The binary may exit before reading stdin (usage errors), so a broken pipe is fine.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("wait for sector-drives")
}

fn stdout_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[given("the input:")]
fn the_input(world: &mut TestWorld, step: &Step) {
    let mut text = step.docstring.clone().unwrap_or_default();
    // Docstrings start with the newline that follows the opening delimiter.
    if text.starts_with('\n') {
        text.remove(0);
    }
    if !text.ends_with('\n') {
        text.push('\n');
    }
    world.input = text;
}

#[given("an empty input")]
fn an_empty_input(world: &mut TestWorld) {
    world.input = String::new();
}

#[given("the input is saved to a file")]
fn the_input_is_saved_to_a_file(world: &mut TestWorld) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("case.in");
    fs::write(&path, &world.input).expect("write input");
    world.input_path = Some(path);
    world.dir = Some(dir);
}

#[when("I run sector-drives")]
fn i_run_sector_drives(world: &mut TestWorld) {
    world.last_cmd = Some(run_with_stdin(vec![], &world.input));
}

#[when(expr = "I run sector-drives with {string}")]
fn i_run_sector_drives_with(world: &mut TestWorld, flags: String) {
    let args = flags.split_whitespace().map(str::to_string).collect();
    world.last_cmd = Some(run_with_stdin(args, &world.input));
}

#[when("I run sector-drives on the saved file")]
fn i_run_sector_drives_on_the_saved_file(world: &mut TestWorld) {
    let path = world.input_path.as_ref().expect("input path");
    let args = vec![
        "--input".to_string(),
        path.to_string_lossy().into_owned(),
    ];
    world.last_cmd = Some(run_with_stdin(args, ""));
}

#[when("I run sector-drives validate")]
fn i_run_sector_drives_validate(world: &mut TestWorld) {
    world.last_cmd = Some(run_with_stdin(vec!["validate".to_string()], &world.input));
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        stderr_string(out),
        stdout_string(out)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stderr: {}",
        stderr_string(out)
    );
}

#[then(expr = "stdout is {string}")]
fn stdout_is(world: &mut TestWorld, expected: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert_eq!(stdout_string(out), format!("{expected}\n"));
}

#[then("stdout is empty")]
fn stdout_is_empty(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert_eq!(stdout_string(out), "");
}

#[then("stderr is empty")]
fn stderr_is_empty(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert_eq!(stderr_string(out), "");
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[then("every stderr line is a JSON event")]
fn every_stderr_line_is_a_json_event(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    let mut count = 0usize;
    for line in stderr.lines() {
        let v: serde_json::Value = serde_json::from_str(line).expect("NDJSON event line");
        assert!(v.get("type").and_then(|t| t.as_str()).is_some());
        count += 1;
    }
    assert!(count > 0, "expected at least one event");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
