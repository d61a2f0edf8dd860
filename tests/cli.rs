#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli(pool: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flagpro-cli").unwrap();
    cmd.arg("--pool").arg(pool);
    cmd
}

fn recruit(pool: &Path, name: &str) {
    cli(pool)
        .args(["recruit", "--name", name, "--certified", "--source", "App Signup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Recruitment Success]"));
}

#[test]
fn recruit_then_generate() {
    let dir = tempdir().unwrap();
    let pool = dir.path().join("pool.json");
    for name in ["Alice J.", "Bob K.", "Charlie L.", "Dana M.", "Eve N."] {
        recruit(&pool, name);
    }

    let out_csv = dir.path().join("schedule.csv");
    cli(&pool)
        .args(["generate", "--start", "2025-01-01", "--cycle-days", "8", "--show-days", "1"])
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 8-day rotation schedule"))
        .stdout(predicate::str::contains("Date: 2025-01-01"))
        .stdout(predicate::str::contains("Alice J."))
        .stdout(predicate::str::contains("Date: 2025-01-02").not());

    let csv = fs::read_to_string(&out_csv).unwrap();
    // en-tête + 18 quarts sur un cycle de 8 jours avec 5 signaleurs
    assert_eq!(csv.lines().count(), 19);
}

#[test]
fn uncertified_recruit_warns_and_is_filtered() {
    let dir = tempdir().unwrap();
    let pool = dir.path().join("pool.json");
    cli(&pool)
        .args(["recruit", "--name", "Grace P."])
        .assert()
        .success()
        .stderr(predicate::str::contains("ALERT"));

    cli(&pool)
        .args(["generate", "--start", "2025-01-01", "--certified-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker pool is empty"));
}

#[test]
fn generate_without_workers_fails() {
    let dir = tempdir().unwrap();
    cli(&dir.path().join("pool.json"))
        .args(["generate", "--start", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker pool is empty"));
}

#[test]
fn dispatch_reports_coverage() {
    let dir = tempdir().unwrap();
    let pool = dir.path().join("pool.json");
    for name in ["Alice J.", "Bob K.", "Charlie L."] {
        recruit(&pool, name);
    }

    cli(&pool)
        .args([
            "dispatch",
            "--start",
            "2025-01-01",
            "--cycle-days",
            "8",
            "--job",
            "Main Street Re-Pave",
            "--location",
            "123 Main St.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DISPATCHED (Day shift): Alice J."))
        .stdout(predicate::str::contains("DISPATCHED (Swing shift): Bob K."));

    // 2025-01-06 : offset 5, seul le quart Grave est tenu
    cli(&pool)
        .args([
            "dispatch",
            "--start",
            "2025-01-01",
            "--cycle-days",
            "8",
            "--date",
            "2025-01-06",
            "--job",
            "Main Street Re-Pave",
            "--location",
            "123 Main St.",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing: Day,Swing"));
}

#[test]
fn malformed_start_date_is_rejected() {
    let dir = tempdir().unwrap();
    let pool = dir.path().join("pool.json");
    recruit(&pool, "Alice J.");

    cli(&pool)
        .args(["generate", "--start", "2025/01/01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: 2025/01/01"));
}

#[test]
fn dispatch_honours_job_window() {
    let dir = tempdir().unwrap();
    let pool = dir.path().join("pool.json");
    for name in ["Alice J.", "Bob K.", "Charlie L."] {
        recruit(&pool, name);
    }
    let base = [
        "dispatch",
        "--start",
        "2025-01-01",
        "--cycle-days",
        "8",
        "--job",
        "Main Street Re-Pave",
        "--location",
        "123 Main St.",
    ];

    cli(&pool)
        .args(base)
        .args(["--job-start", "2025-01-02", "--job-end", "2025-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside job Main Street Re-Pave window"));

    cli(&pool)
        .args(base)
        .args(["--job-start", "2024-12-30", "--job-end", "2025-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DISPATCHED (Day shift): Alice J."));

    cli(&pool)
        .args(base)
        .args(["--job-start", "2025-01-05", "--job-end", "2025-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end date must not precede start date"));
}
