use std::{
    io::Write,
    process::{Command, Stdio},
};

fn run_script(script: &str, extra_args: &[&str]) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hallways"))
        .args(extra_args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn the hallways binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write the script");

    let output = child.wait_with_output().expect("binary runs to completion");
    assert!(output.status.success(), "binary should exit cleanly");
    String::from_utf8(output.stdout).expect("stdout is utf-8")
}

#[test]
fn traversal_is_reported_line_by_line() {
    let stdout = run_script("level 4\nedge 1\nshow\nquit\n", &[]);

    assert!(stdout.contains("== Level 4 =="), "title missing:\n{stdout}");
    assert!(stdout.contains("camera C1 fires"), "pulse missing:\n{stdout}");
    assert!(stdout.contains("cameras [1,0,0,0,0]"), "counts missing:\n{stdout}");
    assert!(stdout.contains("walker in B"), "snapshot missing:\n{stdout}");
}

#[test]
fn malformed_lines_are_skipped() {
    let stdout = run_script("fly away\nedge 4\nquit\n", &["--level", "1"]);

    assert!(stdout.contains("== Level 1 =="), "boot title missing:\n{stdout}");
    assert!(
        stdout.contains("! C4: that hallway is not available right now"),
        "rejection missing:\n{stdout}"
    );
}

#[test]
fn unknown_start_level_is_rejected_without_exiting() {
    let stdout = run_script("show\n", &["--level", "42"]);

    assert!(stdout.contains("! level 42 does not exist"), "{stdout}");
    assert!(stdout.contains("-- no level (Idle) --"), "{stdout}");
}

#[test]
fn replays_complete_without_manual_arrivals() {
    let stdout = run_script(
        "level 4\ncell 1 1\ncell 2 1\ncell 3 1\ncell 5 1\nanimate\nshow\n",
        &[],
    );

    assert!(stdout.contains("walker ~> B"), "{stdout}");
    assert!(stdout.contains("walker in A"), "{stdout}");
}

#[test]
fn level_list_marks_the_active_level() {
    let stdout = run_script("level 3\nlevels\nquit\n", &[]);

    assert!(stdout.contains("  0 Sandbox"), "{stdout}");
    assert!(stdout.contains("* 3 Level 3"), "{stdout}");
    assert!(stdout.contains("  9 "), "{stdout}");
}

#[test]
fn restricted_levels_show_only_the_outgoing_arrows() {
    let stdout = run_script("show\nedge 1\nshow\nquit\n", &["--level", "1"]);

    assert!(stdout.contains("arrows [C1]"), "{stdout}");
    assert!(stdout.contains("arrows [C2]"), "{stdout}");
}
