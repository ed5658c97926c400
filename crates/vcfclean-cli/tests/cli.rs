use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run(args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("vcfclean")
        .args(args)
        .output()
        .expect("run command")
}

fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn write_input(dir: &Path, data: &str) -> String {
    let path = dir.join("contacts.vcf");
    fs::write(&path, data).expect("write input");
    path.to_str().expect("path").to_string()
}

#[test]
fn cleans_merges_and_reports() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:555-1111\nNOTE:NULL\nitem1.TEL:555-9999\nEND:VCARD\n\n\
         BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:(555) 1111\nTEL:555-2222\nEND:VCARD\n",
    );
    let output = temp.path().join("clean.vcf");
    let output_arg = output.to_str().expect("path").to_string();

    let stdout = run_ok(&[&input, &output_arg, "--json"]);
    let report: Value = serde_json::from_str(&stdout).expect("parse json");
    assert_eq!(report["cards_parsed"], 2);
    assert_eq!(report["cards_written"], 1);
    assert_eq!(report["groups_merged"], 1);
    assert_eq!(report["properties_dropped"], 2);
    assert_eq!(report["phones_deduped"], 1);

    let cleaned = fs::read_to_string(&output).expect("read output");
    assert_eq!(cleaned.matches("BEGIN:VCARD").count(), 1);
    assert!(cleaned.contains("TEL:555-1111"));
    assert!(cleaned.contains("TEL:555-2222"));
    assert!(!cleaned.contains("555-9999"));
    assert!(!cleaned.contains("NULL"));
}

#[test]
fn writes_duplicate_groups_when_asked() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "BEGIN:VCARD\nFN:Jane Doe\nTEL:555-1111\nEND:VCARD\n\n\
         BEGIN:VCARD\nFN:Jane Doe\nTEL:555-2222\nEND:VCARD\n",
    );
    let output = temp.path().join("clean.vcf");
    let dup_dir = temp.path().join("dups");

    run_ok(&[
        &input,
        output.to_str().expect("path"),
        "--duplicates-dir",
        dup_dir.to_str().expect("path"),
    ]);

    let dup_file = dup_dir.join("Jane_Doe.vcf");
    let dups = fs::read_to_string(&dup_file).expect("read duplicates");
    assert_eq!(dups.matches("BEGIN:VCARD").count(), 2);
    assert!(dups.contains("TEL:555-1111"));
    assert!(dups.contains("TEL:555-2222"));
}

#[test]
fn unbalanced_markers_exit_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "BEGIN:VCARD\nFN:Jane Doe\n");
    let output = temp.path().join("clean.vcf");

    let result = run(&[&input, output.to_str().expect("path")]);
    assert_eq!(result.status.code(), Some(3));
    let stderr = String::from_utf8(result.stderr).expect("utf8");
    assert!(stderr.contains("parse vcf file"));
    assert!(!output.exists());
}

#[test]
fn missing_input_exits_failure() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("nope.vcf");
    let output = temp.path().join("clean.vcf");

    let result = run(&[
        missing.to_str().expect("path"),
        output.to_str().expect("path"),
    ]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8(result.stderr).expect("utf8");
    assert!(stderr.contains("read vcf file"));
}

#[test]
fn clean_file_round_trips() {
    let temp = TempDir::new().expect("temp dir");
    let data = "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nEMAIL:ada@example.com\nTEL:555-0101\nEND:VCARD\n";
    let input = write_input(temp.path(), data);
    let output = temp.path().join("clean.vcf");

    run_ok(&[&input, output.to_str().expect("path")]);

    let cleaned = fs::read_to_string(&output).expect("read output");
    assert_eq!(cleaned, format!("{}\n", data));
}
