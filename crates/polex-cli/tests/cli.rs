use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EMAIL: &str = "Hello Team,\n\nPOLICY NO :   PN-45678\n\nLIMIT OF LIABILITY : $5,000,000 USD\n\nPhone: +61 987654321\nEmail: broker@test.com\n\nThanks,\nBroker Team\n";
const DOCUMENT: &str = "Schedule\nDeductible: $10,000\n\nRegards\n";

fn polex() -> Command {
    Command::cargo_bin("polex").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn extract_prints_json() {
    let dir = TempDir::new().unwrap();
    let email = write(dir.path(), "mail.txt", EMAIL);
    let doc = write(dir.path(), "doc.txt", DOCUMENT);

    let output = polex().args(["extract", &email, &doc]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fields"]["policy_number"]["value"], "pn-45678");
    assert_eq!(json["fields"]["policy_number"]["source"], "email");
    assert_eq!(json["fields"]["limit_of_liability"]["value"], 5_000_000);
    assert_eq!(json["fields"]["deductible"]["value"], 10_000);
    assert_eq!(json["fields"]["deductible"]["source"], "document");
    assert_eq!(json["metadata"]["version"], "v1");
    assert!(json["metadata"]["run_id"].is_string());
}

#[test]
fn extract_missing_input_fails() {
    polex()
        .args(["extract", "/nonexistent/mail.txt", "/nonexistent/doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn strict_fails_on_missing_required_field() {
    let dir = TempDir::new().unwrap();
    let email = write(dir.path(), "mail.txt", "Policy No: PN-1\n");
    let doc = write(dir.path(), "doc.txt", "");

    polex()
        .args(["extract", &email, &doc, "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit_of_liability"));

    polex().args(["extract", &email, &doc]).assert().success();
}

#[test]
fn extract_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    let email = write(dir.path(), "mail.txt", EMAIL);
    let doc = write(dir.path(), "doc.txt", DOCUMENT);
    let out = dir.path().join("result.csv");

    polex()
        .args(["extract", &email, &doc, "-f", "csv", "-o"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("run_id,timestamp,field,value,source,confidence,required,reason"));
    assert!(csv.contains(",deductible,10000,document,0.90,false,"));
}

#[test]
fn config_field_table_is_honoured() {
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "config.json",
        r#"{"extraction": {"fields": [{"name": "deductible", "priority": "document", "required": true}]}}"#,
    );
    let email = write(dir.path(), "mail.txt", "Deductible: 1\n");
    let doc = write(dir.path(), "doc.txt", "Deductible: 2\n");

    let output = polex()
        .args(["-c", &config, "extract", &email, &doc])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["deductible"]["value"], 2);
    assert_eq!(fields["deductible"]["confidence"], 1.0);
}

#[test]
fn unknown_field_in_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "config.json",
        r#"{"extraction": {"fields": [{"name": "premium"}]}}"#,
    );

    polex()
        .args(["-c", &config, "config", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field: premium"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("polex.json");

    polex()
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    polex()
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    polex()
        .args(["config", "init", "--force", "-o"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn batch_writes_results_and_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir_all(&input).unwrap();

    write(&input, "a.email.txt", EMAIL);
    write(&input, "a.doc.txt", DOCUMENT);
    write(&input, "b.email.txt", "Nothing useful here\n");

    let pattern = input.join("*.email.txt");
    polex()
        .args(["batch", "--summary", "-o"])
        .arg(&out)
        .arg(pattern.to_string_lossy().as_ref())
        .assert()
        .success();

    let a: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("a.json")).unwrap()).unwrap();
    assert_eq!(a["fields"]["deductible"]["value"], 10_000);

    let b: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("b.json")).unwrap()).unwrap();
    assert_eq!(b["fields"]["policy_number"]["reason"], "required_field_missing");

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines[0],
        "pair,status,run_id,policy_number,limit_of_liability,deductible,missing_required,error,processing_time_ms"
    );
    assert_eq!(lines.len(), 3);
    assert!(summary.contains("pn-45678,5000000,10000,,"));
    assert!(summary.contains("policy_number;limit_of_liability"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = dir.path().join("*.email.txt");

    polex()
        .arg("batch")
        .arg(pattern.to_string_lossy().as_ref())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching email files"));
}
