use std::process::{Command, Output};

use anyhow::Context as _;

fn status_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

fn run_stout(args: &[&str]) -> anyhow::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_stout"))
        .args(args)
        .env_remove("STOUT_OUTPUT")
        .env_remove("STOUT_LOG")
        .output()
        .context("run stout binary")
}

fn expect_code(out: &Output, code: i32) -> anyhow::Result<()> {
    anyhow::ensure!(
        status_code(out.status) == code,
        "expected exit code {code}, got {}\nstdout:\n{}\nstderr:\n{}",
        status_code(out.status),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    Ok(())
}

#[test]
fn valid_duration_exit_0() -> anyhow::Result<()> {
    let out = run_stout(&["parse", "65secs"])?;
    expect_code(&out, 0)
}

#[test]
fn unknown_unit_exit_30() -> anyhow::Result<()> {
    let out = run_stout(&["parse", "10xyz"])?;
    expect_code(&out, 30)?;

    let stderr = String::from_utf8_lossy(&out.stderr);
    anyhow::ensure!(
        stderr.contains("unknown duration unit 'xyz'"),
        "unexpected stderr:\n{stderr}"
    );
    Ok(())
}

#[test]
fn bare_number_exit_30() -> anyhow::Result<()> {
    let out = run_stout(&["parse", "10"])?;
    expect_code(&out, 30)
}

#[test]
fn invalid_compare_operand_exit_30() -> anyhow::Result<()> {
    let out = run_stout(&["compare", "1mins", "abcns"])?;
    expect_code(&out, 30)
}

#[test]
fn invalid_flags_exit_30() -> anyhow::Result<()> {
    let out = run_stout(&["parse", "1secs", "--unit", "seconds"])?;
    expect_code(&out, 30)
}

#[test]
fn help_exit_0() -> anyhow::Result<()> {
    let out = run_stout(&["--help"])?;
    expect_code(&out, 0)
}

#[cfg(unix)]
#[test]
fn missing_path_exit_40() -> anyhow::Result<()> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let missing = dir.path().join("nope");
    let missing = missing.to_string_lossy().into_owned();

    let out = run_stout(&["fs", "usage", missing.as_str()])?;
    expect_code(&out, 40)?;

    let stderr = String::from_utf8_lossy(&out.stderr);
    anyhow::ensure!(
        stderr.contains("query disk usage"),
        "unexpected stderr:\n{stderr}"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn existing_link_exit_40() -> anyhow::Result<()> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let link = dir.path().join("taken");
    std::fs::write(&link, b"").context("write fixture")?;

    let link = link.to_string_lossy().into_owned();
    let out = run_stout(&["fs", "symlink", "/", link.as_str()])?;
    expect_code(&out, 40)
}
