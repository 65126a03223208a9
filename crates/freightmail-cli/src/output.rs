//! Output formatting for the CLI.

use crate::batch::BatchReport;
use crate::config::OutputFormat;
use crate::error::Result;
use freightmail_domain::{Location, ShipmentRecord, Validation};
use freightmail_gatekeeper::summarize;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// Short status word for a validation.
pub fn status_label(validation: &Validation) -> &'static str {
    if validation.is_blocked() {
        "FAIL"
    } else if validation.passed() {
        "PASS"
    } else {
        "WARN"
    }
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single validated record.
    pub fn format_record(&self, record: &ShipmentRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(self.status(&record.validation)),
        }
    }

    /// Format the outcome of a batch run.
    pub fn format_batch(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_batch_json(report),
            OutputFormat::Table => Ok(self.format_batch_table(report)),
            OutputFormat::Quiet => Ok(self.format_batch_quiet(report)),
        }
    }

    fn format_record_table(&self, record: &ShipmentRecord) -> String {
        let shipment = &record.shipment;
        let cargo = &shipment.cargo;

        let containers = cargo
            .containers
            .iter()
            .map(|c| format!("{}x{}", c.qty, c.kind))
            .collect::<Vec<_>>()
            .join(", ");

        let rows = [
            ("Subject", record.source.subject.clone()),
            ("File", record.source.received_text_file.clone()),
            ("Mode", shipment.mode.to_string()),
            ("Service", shipment.service.to_string()),
            ("Incoterm", shipment.incoterm.to_string()),
            ("Origin", format_location(&shipment.origin)),
            ("Destination", format_location(&shipment.destination)),
            ("Ready date", shipment.ready_date.clone()),
            ("Commodity", cargo.commodity.clone()),
            ("Gross weight (kg)", format_number(cargo.gross_weight_kg)),
            ("Volume (cbm)", format_number(cargo.volume_cbm)),
            ("Containers", containers),
            ("Shipper", shipment.parties.shipper.clone()),
            ("Consignee", shipment.parties.consignee.clone()),
        ];

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in rows {
            builder.push_record([field.to_string(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}\n{}",
            table,
            self.status(&record.validation),
            summarize(&record.validation)
        )
    }

    fn format_batch_table(&self, report: &BatchReport) -> String {
        let mut out = String::new();

        for outcome in &report.outcomes {
            out.push_str(&format!("Processing: {}\n", outcome.file_name));
            match &outcome.result {
                Ok((record, _)) => {
                    let summary = summarize(&record.validation);
                    out.push_str(&format!("   {}\n\n", summary.replace('\n', "\n   ")));
                }
                Err(e) => {
                    out.push_str(&format!("   {}\n\n", self.error(e)));
                }
            }
        }

        if !report.outcomes.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["File", "Status", "Errors", "Warnings", "Output"]);
            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok((record, path)) => builder.push_record([
                        outcome.file_name.clone(),
                        status_label(&record.validation).to_string(),
                        record.validation.errors.len().to_string(),
                        record.validation.warnings.len().to_string(),
                        path.display().to_string(),
                    ]),
                    Err(_) => builder.push_record([
                        outcome.file_name.clone(),
                        "ERROR".to_string(),
                        "-".to_string(),
                        "-".to_string(),
                        "-".to_string(),
                    ]),
                }
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push_str(&format!("{}\n\n", table));
        }

        out.push_str("Processing complete:\n");
        out.push_str(&format!("   - Files processed: {}\n", report.processed()));
        out.push_str(&format!("   - Errors: {}", report.failed()));
        out
    }

    fn format_batch_json(&self, report: &BatchReport) -> Result<String> {
        let files: Vec<serde_json::Value> = report
            .outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok((record, path)) => serde_json::json!({
                    "file": outcome.file_name,
                    "status": status_label(&record.validation),
                    "output": path.display().to_string(),
                    "validation": record.validation,
                }),
                Err(e) => serde_json::json!({
                    "file": outcome.file_name,
                    "status": "ERROR",
                    "error": e,
                }),
            })
            .collect();

        let summary = serde_json::json!({
            "processed": report.processed(),
            "failed": report.failed(),
            "files": files,
        });

        Ok(serde_json::to_string_pretty(&summary)?)
    }

    fn format_batch_quiet(&self, report: &BatchReport) -> String {
        report
            .outcomes
            .iter()
            .map(|outcome| {
                let label = match &outcome.result {
                    Ok((record, _)) => self.status(&record.validation),
                    Err(_) => self.colorize("ERROR", "red"),
                };
                format!("{}\t{}", label, outcome.file_name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Colored status word for a validation.
    pub fn status(&self, validation: &Validation) -> String {
        let label = status_label(validation);
        let color = match label {
            "PASS" => "green",
            "WARN" => "yellow",
            _ => "red",
        };
        self.colorize(label, color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_location(location: &Location) -> String {
    match (location.city.is_empty(), location.country.is_empty()) {
        (true, true) => String::new(),
        (false, true) => location.city.clone(),
        (true, false) => location.country.clone(),
        (false, false) => format!("{}, {}", location.city, location.country),
    }
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileOutcome;
    use crate::pipeline::Pipeline;
    use std::path::PathBuf;

    const EMAIL: &str = "Subject: Quote\nPlease quote 1x40HC from Valencia, Spain to Genoa, Italy.\n\
                         Shipper: Azul SL";

    fn create_test_record() -> ShipmentRecord {
        Pipeline::default().process_text(EMAIL, "quote.txt")
    }

    fn create_test_report() -> BatchReport {
        BatchReport {
            outcomes: vec![
                FileOutcome {
                    file_name: "bad.txt".to_string(),
                    result: Err("Error reading file bad.txt".to_string()),
                },
                FileOutcome {
                    file_name: "quote.txt".to_string(),
                    result: Ok((create_test_record(), PathBuf::from("out/quote.json"))),
                },
            ],
        }
    }

    #[test]
    fn test_status_labels() {
        let mut validation = Validation::default();
        assert_eq!(status_label(&validation), "PASS");
        validation.warnings.push("w".to_string());
        assert_eq!(status_label(&validation), "WARN");
        validation.errors.push("e".to_string());
        assert_eq!(status_label(&validation), "FAIL");
    }

    #[test]
    fn test_record_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["shipment"]["mode"], "ocean");
        assert_eq!(value["source"]["received_text_file"], "quote.txt");
    }

    #[test]
    fn test_record_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert!(output.contains("Origin"));
        assert!(output.contains("Valencia, Spain"));
        assert!(output.contains("1x40HC"));
        assert!(output.contains("WARN"));
        assert!(output.contains("Warning(s):"));
    }

    #[test]
    fn test_record_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert_eq!(output, "WARN");
    }

    #[test]
    fn test_batch_table_counts() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_batch(&create_test_report()).unwrap();
        assert!(output.contains("Processing: quote.txt"));
        assert!(output.contains("✗ Error reading file bad.txt"));
        assert!(output.ends_with("   - Files processed: 1\n   - Errors: 1"));
    }

    #[test]
    fn test_batch_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_batch(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["processed"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["files"][0]["status"], "ERROR");
        assert_eq!(value["files"][1]["status"], "WARN");
    }

    #[test]
    fn test_batch_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_batch(&create_test_report()).unwrap();
        assert_eq!(output, "ERROR\tbad.txt\nWARN\tquote.txt");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
