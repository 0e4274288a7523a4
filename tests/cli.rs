use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

//===========================================================================//

fn make_icon(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_make_icon"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("icopack-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fake_png(path: &PathBuf, width: u32, height: u32, len: usize) {
    let mut data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR".to_vec();
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.resize(len, 0);
    fs::write(path, data).unwrap();
}

//===========================================================================//

#[test]
fn no_arguments_is_a_usage_error() {
    let output = make_icon(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("USAGE"), "stderr was: {}", stderr);
}

#[test]
fn output_without_inputs_is_a_usage_error() {
    let dir = scratch_dir("usage");
    let out_path = dir.join("app.ico");
    let output = make_icon(&[out_path.as_os_str()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!out_path.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn writes_icon_from_inputs() {
    let dir = scratch_dir("success");
    let small = dir.join("16.png");
    let large = dir.join("32.png");
    write_fake_png(&small, 16, 16, 100);
    write_fake_png(&large, 32, 32, 400);
    let out_path = dir.join("app.ico");
    let output = make_icon(&[
        out_path.as_os_str(),
        large.as_os_str(),
        small.as_os_str(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    let ico = fs::read(&out_path).unwrap();
    assert_eq!(ico.len(), 538);
    assert_eq!(&ico[6..8], b"\x10\x10");
    assert_eq!(&ico[18..22], b"\x26\x00\x00\x00");
    assert_eq!(&ico[22..24], b"\x20\x20");
    assert_eq!(&ico[34..38], b"\x8a\x00\x00\x00");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn bad_input_fails_without_writing() {
    let dir = scratch_dir("bad-input");
    let good = dir.join("16.png");
    let bad = dir.join("broken.png");
    write_fake_png(&good, 16, 16, 100);
    fs::write(&bad, b"GIF89a.................").unwrap();
    let out_path = dir.join("app.ico");
    let output =
        make_icon(&[out_path.as_os_str(), good.as_os_str(), bad.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.png"), "stderr was: {}", stderr);
    assert!(!out_path.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn dry_run_prints_directory_only() {
    let dir = scratch_dir("dry-run");
    let large = dir.join("256.png");
    write_fake_png(&large, 256, 256, 50);
    let out_path = dir.join("app.ico");
    let output = make_icon(&[
        std::ffi::OsStr::new("--dry-run"),
        out_path.as_os_str(),
        large.as_os_str(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("256x256 (stored 0x0), 50 bytes at offset 22"),
        "stdout was: {}",
        stdout
    );
    assert!(stdout.contains("Total: 72 bytes"), "stdout was: {}", stdout);
    assert!(!out_path.exists());
    fs::remove_dir_all(&dir).unwrap();
}

//===========================================================================//
