use std::process::Command;

fn run_program(rust_log: Option<&str>) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_expr_templates"));
    match rust_log {
        Some(level) => cmd.env("RUST_LOG", level),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().expect("failed to run binary")
}

fn parse_values(stdout: &[u8]) -> Vec<f64> {
    String::from_utf8(stdout.to_vec())
        .expect("stdout is utf-8")
        .lines()
        .map(|l| l.trim().parse().expect("each line is a number"))
        .collect()
}

#[test]
fn prints_two_values() {
    let output = run_program(None);
    assert!(output.status.success());

    let values = parse_values(&output.stdout);
    assert_eq!(values, vec![3.0_f64.cos() / 3.0 + 2.0, 1.5_f64.cos() / 1.5 + 2.0]);
}

#[test]
fn stdout_is_clean_with_debug_logging() {
    let output = run_program(Some("debug"));
    assert!(output.status.success());

    // Logs go to stderr only
    assert_eq!(parse_values(&output.stdout).len(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("evaluated"));
}

#[test]
fn quiet_by_default() {
    let output = run_program(None);
    assert!(output.stderr.is_empty());
}
