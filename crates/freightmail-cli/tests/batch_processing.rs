//! Batch processing over a directory of email files.

use freightmail_cli::{process_directory, BatchReport, Pipeline};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const FCL_EMAIL: &str = "Subject: Request quotation - Export FCL

Body:
Hi team,
Please quote for 1x40HC from San Jose, Costa Rica to Rotterdam, NL.
Commodity: canned food
Incoterm: FOB
Ready date: 2026-02-20
Gross weight: 18,500 kg
Volume: 58 cbm
Shipper: Alimentos Ticos S.A.
Consignee: Euro Imports BV";

const INCOMPLETE_EMAIL: &str = "Subject: Need shipping info

Hi,
Can you help me ship some cargo?

I need to send merchandise to London, UK.
Ready date: next week
Volume: 25 cbm

Please let me know the cost.";

fn write_samples(dir: &Path) {
    fs::write(dir.join("test-fcl.txt"), FCL_EMAIL).unwrap();
    fs::write(dir.join("test-incomplete.txt"), INCOMPLETE_EMAIL).unwrap();
    fs::write(dir.join("README.md"), "not an email").unwrap();
}

async fn run(input: &Path, output: &Path, jobs: usize) -> BatchReport {
    process_directory(Arc::new(Pipeline::default()), input, output, jobs)
        .await
        .unwrap()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_writes_one_record_per_text_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_samples(input.path());

    let report = run(input.path(), output.path(), 4).await;

    assert_eq!(report.processed(), 2);
    assert_eq!(report.failed(), 0);
    assert!(output.path().join("test-fcl.json").exists());
    assert!(output.path().join("test-incomplete.json").exists());
    assert!(!output.path().join("README.json").exists());
}

#[tokio::test]
async fn test_record_json_shape() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_samples(input.path());

    run(input.path(), output.path(), 2).await;
    let json = read_json(&output.path().join("test-fcl.json"));

    assert_eq!(json["source"]["channel"], "email");
    assert_eq!(json["source"]["subject"], "Request quotation - Export FCL");
    assert_eq!(json["source"]["received_text_file"], "test-fcl.txt");
    assert_eq!(json["shipment"]["mode"], "ocean");
    assert_eq!(json["shipment"]["service"], "FCL");
    assert_eq!(json["shipment"]["incoterm"], "FOB");
    assert_eq!(json["shipment"]["origin"]["city"], "San Jose");
    assert_eq!(json["shipment"]["destination"]["country"], "NL");
    assert_eq!(json["shipment"]["cargo"]["pieces"], serde_json::Value::Null);
    assert_eq!(json["shipment"]["cargo"]["gross_weight_kg"], 18500.0);
    assert_eq!(json["shipment"]["cargo"]["containers"][0]["qty"], 1);
    assert_eq!(json["shipment"]["cargo"]["containers"][0]["type"], "40HC");
    assert_eq!(json["validation"]["errors"], serde_json::json!([]));
    assert_eq!(json["validation"]["warnings"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unreadable_file_is_counted_and_skipped() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_samples(input.path());
    fs::write(input.path().join("broken.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let report = run(input.path(), output.path(), 4).await;

    assert_eq!(report.processed(), 2);
    assert_eq!(report.failed(), 1);

    let names: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["broken.txt", "test-fcl.txt", "test-incomplete.txt"]);

    let broken = &report.outcomes[0];
    let message = broken.result.as_ref().unwrap_err();
    assert!(message.contains("broken.txt"));
    assert!(!output.path().join("broken.json").exists());
}

#[tokio::test]
async fn test_creates_missing_output_directory() {
    let input = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    write_samples(input.path());
    let output = scratch.path().join("outputs").join("nested");

    let report = run(input.path(), &output, 1).await;

    assert_eq!(report.processed(), 2);
    assert!(output.join("test-incomplete.json").exists());
}

#[tokio::test]
async fn test_job_count_does_not_change_results() {
    let input = TempDir::new().unwrap();
    write_samples(input.path());
    let serial_out = TempDir::new().unwrap();
    let parallel_out = TempDir::new().unwrap();

    run(input.path(), serial_out.path(), 1).await;
    run(input.path(), parallel_out.path(), 8).await;

    for name in ["test-fcl.json", "test-incomplete.json"] {
        assert_eq!(
            fs::read_to_string(serial_out.path().join(name)).unwrap(),
            fs::read_to_string(parallel_out.path().join(name)).unwrap()
        );
    }
}

#[tokio::test]
async fn test_incomplete_email_validation_written() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_samples(input.path());

    run(input.path(), output.path(), 2).await;
    let json = read_json(&output.path().join("test-incomplete.json"));

    let errors = json["validation"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[0], "Origin location is missing or incomplete");
    assert_eq!(json["shipment"]["ready_date"], "next week");
}

#[tokio::test]
async fn test_empty_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let report = run(input.path(), output.path(), 4).await;

    assert!(report.outcomes.is_empty());
    assert_eq!(report.processed(), 0);
}
