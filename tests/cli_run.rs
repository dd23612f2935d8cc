//! End-to-end runs against the live asset CDN.
//!
//! Run explicitly with `cargo test --test cli_run -- --ignored`.

use std::fs;
use std::process::Command;

fn emojicon() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_emojicon"));
    cmd.env_remove("EMOJICON_SIZE")
        .env_remove("EMOJICON_EMOJI")
        .env_remove("EMOJICON_OUTPUT");
    cmd
}

#[test]
#[ignore = "requires network access"]
fn test_svg_pass_through_writes_default_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = emojicon()
        .args(["--emoji", ":grinning:"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read(dir.path().join("icon.svg")).unwrap();
    let body = String::from_utf8_lossy(&written);
    assert!(body.contains("<svg"), "expected SVG content:\n{body}");
}

#[test]
#[ignore = "requires network access"]
fn test_png_run_writes_sized_raster() {
    let dir = tempfile::tempdir().unwrap();

    let output = emojicon()
        .args(["--emoji", "😀", "--size", "64"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read(dir.path().join("icon64.png")).unwrap();
    let img = image::load_from_memory(&written).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 64));
    assert!(
        img.pixels().any(|p| p.0[3] > 0),
        "expected something to be drawn"
    );
}

#[test]
#[ignore = "requires network access"]
fn test_json_mode_reports_code_points() {
    let dir = tempfile::tempdir().unwrap();

    let output = emojicon()
        .args(["--json", "--emoji", ":grinning:"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["event"], "convert");
    assert_eq!(parsed["code_points"], "1f600");
    assert_eq!(parsed["format"], "svg");
}

#[test]
#[ignore = "requires network access"]
fn test_unknown_emoji_reports_remote_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let output = emojicon()
        .args(["--emoji", ":definitelynotreal:"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("404"),
        "expected a not-found failure:\n{stderr}"
    );
}
