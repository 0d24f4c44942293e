use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(config_dir: &Path, work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_PLANNER_DIR", config_dir)
        .env_remove("BUDGET_LOG")
        .current_dir(work_dir);
    cmd
}

fn surplus_args() -> [&'static str; 10] {
    [
        "--income",
        "1000",
        "--rent",
        "400",
        "--food",
        "100",
        "--utilities",
        "50",
        "--transportation",
        "50",
    ]
}

#[test]
fn test_calc_surplus_shows_no_tips() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .arg("calc")
        .args(surplus_args())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Surplus!"))
        .stdout(predicate::str::contains("Total Expenses: $600.00"))
        .stdout(predicate::str::contains("Balance: $400.00"))
        .stdout(predicate::str::contains("Tips").not());
}

#[test]
fn test_calc_deficit() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .args([
            "calc",
            "--income",
            "2000",
            "--rent",
            "1000",
            "--food",
            "800",
            "--utilities",
            "300",
            "--transportation",
            "300",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Deficit!"))
        .stdout(predicate::str::contains("Total Expenses: $2400.00"))
        .stdout(predicate::str::contains("Balance: -$400.00"))
        .stdout(predicate::str::contains(
            "You are in deficit! Try to cut down on non-essential expenses.",
        ));
}

#[test]
fn test_calc_keeps_fractional_cents_until_display() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .args([
            "calc",
            "--income",
            "1",
            "--rent",
            "0.304",
            "--food",
            "0.004",
            "--utilities",
            "1e0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Deficit!"))
        .stdout(predicate::str::contains("Total Expenses: $1.31"))
        .stdout(predicate::str::contains("Balance: -$0.31"))
        .stdout(predicate::str::contains(
            "Consider reducing rent expenses (should be less than 30% of income).",
        ));
}

#[test]
fn test_calc_rejects_non_numeric_input() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .args(["calc", "--income", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter valid numbers!"));
}

#[test]
fn test_calc_breakdown() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .arg("calc")
        .args(surplus_args())
        .arg("--breakdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category"))
        .stdout(predicate::str::contains("40%"));
}

#[test]
fn test_save_then_show() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .arg("save")
        .args(surplus_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget saved to budget.csv"));

    let contents = fs::read_to_string(work.path().join("budget.csv")).unwrap();
    assert_eq!(
        contents,
        "Income,Rent,Food,Utilities,Transportation,Entertainment,Health,Education,Miscellaneous\n\
         1000,400,100,50,50,0,0,0,0\n"
    );

    budget(config.path(), work.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Surplus!"))
        .stdout(predicate::str::contains("Balance: $400.00"));
}

#[test]
fn test_save_keeps_invalid_values_verbatim() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = work.path().join("draft.csv");

    budget(config.path(), work.path())
        .args(["save", "--income", "abc", "--rent", "12.5", "--output"])
        .arg(&output)
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.ends_with("abc,12.5,0,0,0,0,0,0,0\n"));

    budget(config.path(), work.path())
        .arg("show")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid numbers!"));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = work.path().join("missing").join("budget.csv");

    budget(config.path(), work.path())
        .arg("save")
        .args(surplus_args())
        .arg("--output")
        .arg(&output)
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_show_missing_file_fails() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_theme_persists() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .arg("theme")
        .assert()
        .success()
        .stdout("light\n");

    budget(config.path(), work.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Startup theme set to dark"));

    budget(config.path(), work.path())
        .arg("theme")
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn test_config_shows_paths() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    budget(config.path(), work.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Planner Configuration"))
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Rent limit:      30% of income"));
}

#[test]
fn test_calc_survives_corrupt_settings() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(config.path().join("config.json"), "{ not json").unwrap();

    budget(config.path(), work.path())
        .arg("calc")
        .args(surplus_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $400.00"))
        .stderr(predicate::str::contains("ignoring unusable settings"));

    budget(config.path(), work.path())
        .args(["theme", "dark"])
        .assert()
        .failure();
    assert_eq!(
        fs::read_to_string(config.path().join("config.json")).unwrap(),
        "{ not json"
    );
}
