//! Plain-text rendering of validation findings

use freightmail_domain::Validation;

/// Summary returned when a record has neither errors nor warnings
pub const PASS_MESSAGE: &str = "Validation passed - No errors or warnings";

/// Render a validation as a numbered, human-readable report
///
/// Errors come first, then warnings; an empty section is omitted.
pub fn summarize(validation: &Validation) -> String {
    if validation.passed() {
        return PASS_MESSAGE.to_string();
    }

    let mut out = String::new();
    write_section(&mut out, "Error(s)", &validation.errors);
    write_section(&mut out, "Warning(s)", &validation.warnings);
    out.trim().to_string()
}

fn write_section(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    out.push_str(&format!("{} {}:\n", items.len(), label));
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("   {}. {}\n", i + 1, item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation(errors: &[&str], warnings: &[&str]) -> Validation {
        Validation {
            errors: errors.iter().map(|s| s.to_string()).collect(),
            warnings: warnings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_pass_message() {
        assert_eq!(summarize(&Validation::default()), PASS_MESSAGE);
    }

    #[test]
    fn test_errors_and_warnings() {
        let v = validation(
            &["Shipper information is missing"],
            &["Volume information is missing", "Consignee information is missing"],
        );
        assert_eq!(
            summarize(&v),
            "1 Error(s):\n   1. Shipper information is missing\n\
             2 Warning(s):\n   1. Volume information is missing\n   2. Consignee information is missing"
        );
    }

    #[test]
    fn test_warnings_only() {
        let v = validation(&[], &["Volume information is missing"]);
        assert_eq!(
            summarize(&v),
            "1 Warning(s):\n   1. Volume information is missing"
        );
    }
}
