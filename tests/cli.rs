extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn renders_a_binary_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&[
            "--output",
            out.to_str().unwrap(),
            "--size",
            "64x64",
            "--threads",
            "2",
            "--depth",
            "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("64x64 at depth 200").from_utf8());

    let data = fs::read(&out).unwrap();
    assert!(data.starts_with(b"P6"));
    // Header plus one RGB triple per pixel.
    assert!(data.len() > 3 * 64 * 64);
}

#[test]
fn row_major_layout_accepts_non_square_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("wide.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&[
            "--output",
            out.to_str().unwrap(),
            "--size",
            "10x8",
            "--layout",
            "row-major",
            "--depth",
            "50",
        ])
        .assert()
        .success();

    let data = fs::read(&out).unwrap();
    assert!(data.starts_with(b"P6"));
    assert!(data.len() > 3 * 10 * 8);
}

#[test]
fn transposed_layout_rejects_non_square_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--output", out.to_str().unwrap(), "--size", "10x8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("square").from_utf8());
    assert!(!out.exists());
}

#[test]
fn zero_threads_is_refused() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--output", "never.ppm", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between").from_utf8());
}

#[test]
fn negative_depth_is_refused() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--output", "never.ppm", "--depth=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Depth must be between").from_utf8());
}

#[test]
fn output_does_not_depend_on_thread_count() {
    let dir = tempfile::tempdir().unwrap();
    let one = dir.path().join("one.ppm");
    let two = dir.path().join("two.ppm");
    for (path, threads) in &[(&one, "1"), (&two, "2")] {
        Command::cargo_bin("mandel")
            .unwrap()
            .args(&[
                "--output",
                path.to_str().unwrap(),
                "--size",
                "48x48",
                "--threads",
                threads,
                "--depth",
                "150",
            ])
            .assert()
            .success();
    }
    assert_eq!(fs::read(&one).unwrap(), fs::read(&two).unwrap());
}
