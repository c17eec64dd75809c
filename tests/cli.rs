use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn apriori_miner(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apriori-miner"))
        .args(args)
        .output()
        .expect("failed to run apriori-miner")
}

fn write_transactions(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("transactions.csv");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn prints_levels_for_transaction_file() {
    let dir = TempDir::new().unwrap();
    let path = write_transactions(&dir, "TID,Items\nT1,A,B\nT2,A,C\nT3,A,B,C\nT4,B,C,\n");

    let output = apriori_miner(&[&path, "--min-support", "2"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Frequent itemsets found:\n\
         Size 1: [[A], [B], [C]]\n\
         Size 2: [[A, B], [A, C], [B, C]]\n"
    );
}

#[test]
fn strategies_print_the_same_report() {
    let dir = TempDir::new().unwrap();
    let path = write_transactions(&dir, "TID,Items\nT1,A,B,C\n");

    let plain = apriori_miner(&[&path, "-s", "1"]);
    let tuned = apriori_miner(&[&path, "-s", "1", "--prefix-join", "--tidset", "--parallel"]);

    assert!(plain.status.success());
    assert_eq!(plain.stdout, tuned.stdout);
    assert!(String::from_utf8(plain.stdout)
        .unwrap()
        .ends_with("Size 3: [[A, B, C]]\n"));
}

#[test]
fn missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");

    let output = apriori_miner(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.csv"), "{}", stderr);
    assert!(stderr.contains("not found"), "{}", stderr);
}

#[test]
fn negative_min_support_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_transactions(&dir, "TID,Items\nT1,A\n");

    let output = apriori_miner(&[&path, "--min-support", "-1"]);

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("invalid configuration"));
}
