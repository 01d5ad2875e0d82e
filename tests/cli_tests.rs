//! Integration tests for the CLI application
//!
//! These tests verify that the CLI commands work correctly with real data
//! files, driving the compiled binary directly.

use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write");
    file.flush().expect("Failed to flush");
    file
}

/// Get the path to the compiled CLI binary
fn get_cli_binary_path() -> String {
    let debug_path = "target/debug/svmprep";
    let release_path = "target/release/svmprep";

    if std::path::Path::new(debug_path).exists() {
        debug_path.to_string()
    } else if std::path::Path::new(release_path).exists() {
        release_path.to_string()
    } else {
        // Build the binary if it doesn't exist
        let output = Command::new("cargo")
            .args(["build", "--bin", "svmprep"])
            .output()
            .expect("Failed to build CLI binary");

        if !output.status.success() {
            panic!(
                "Failed to build CLI binary: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        debug_path.to_string()
    }
}

const ABALONE_TRAIN: &str = "\
M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15
F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,9
I,0.44,0.365,0.125,0.516,0.2155,0.114,0.155,10
";

const ABALONE_TEST: &str = "\
M,0.35,0.265,0.09,0.2255,0.0995,0.0485,0.07,7
";

const INCOME_TRAIN: &str = "\
39,State-gov,77516,Bachelors,13,Never-married,Adm-clerical,Not-in-family,White,Male,2174,0,40,United-States,<=50K
50,Self-emp,83311,Bachelors,13,Married,Exec-managerial,Husband,White,Male,0,0,13,United-States,<=50K
38,Private,215646,HS-grad,9,Divorced,Handlers,Not-in-family,White,Male,0,0,40,United-States,>50K
";

const INCOME_TEST: &str = "\
25,?,226802,11th,7,Never-married,Adm-clerical,Own-child,Black,Male,0,0,40,United-States
";

#[test]
fn test_cli_abalone_conversion() {
    let train = write_temp(ABALONE_TRAIN);
    let test = write_temp(ABALONE_TEST);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_train = temp_dir.path().join("abalone.tr");
    let out_test = temp_dir.path().join("abalone.te");

    let output = Command::new(get_cli_binary_path())
        .args([
            "abalone",
            "--train",
            train.path().to_str().unwrap(),
            "--test",
            test.path().to_str().unwrap(),
            "--out-train",
            out_train.to_str().unwrap(),
            "--out-test",
            out_test.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run CLI");

    assert!(
        output.status.success(),
        "Abalone conversion failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let train_out = std::fs::read_to_string(&out_train).unwrap();
    assert_eq!(train_out.lines().count(), 3);
    assert!(train_out.starts_with("15 1:0.455"));

    let test_out = std::fs::read_to_string(&out_test).unwrap();
    assert_eq!(test_out.lines().count(), 1);
    assert!(test_out.starts_with("7 "));
}

#[test]
fn test_cli_income_conversion() {
    let train = write_temp(INCOME_TRAIN);
    let test = write_temp(INCOME_TEST);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_train = temp_dir.path().join("income.tr");
    let out_test = temp_dir.path().join("income.te");

    let output = Command::new(get_cli_binary_path())
        .args([
            "income",
            "--train",
            train.path().to_str().unwrap(),
            "--test",
            test.path().to_str().unwrap(),
            "--out-train",
            out_train.to_str().unwrap(),
            "--out-test",
            out_test.to_str().unwrap(),
            "--verbose",
        ])
        .output()
        .expect("Failed to run CLI");

    assert!(
        output.status.success(),
        "Income conversion failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let train_out = std::fs::read_to_string(&out_train).unwrap();
    assert_eq!(train_out.lines().count(), 3);
    assert!(train_out.starts_with("<=50K "));

    // The unlabeled test split gets the literal 0 label
    let test_out = std::fs::read_to_string(&out_test).unwrap();
    assert_eq!(test_out.lines().count(), 1);
    assert!(test_out.starts_with("0 "));
}

#[test]
fn test_cli_missing_input_fails() {
    let test = write_temp(ABALONE_TEST);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = Command::new(get_cli_binary_path())
        .args([
            "abalone",
            "--train",
            "/non/existent/train.csv",
            "--test",
            test.path().to_str().unwrap(),
            "--out-train",
            temp_dir.path().join("out.tr").to_str().unwrap(),
            "--out-test",
            temp_dir.path().join("out.te").to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run CLI");

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("out.tr").exists());
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    let output = Command::new(get_cli_binary_path())
        .args(["wine"])
        .output()
        .expect("Failed to run CLI");

    assert!(!output.status.success());
}
