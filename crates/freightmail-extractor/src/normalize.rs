//! Text normalization applied before field extraction

/// Collapse `\r\n` and lone `\r` line endings to `\n` and trim the text
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_windows_and_mac_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize("\r\n  Subject: hi \r\n\r\n"), "Subject: hi");
        assert_eq!(normalize(""), "");
    }

    proptest! {
        /// Property: normalizing twice changes nothing
        #[test]
        fn test_normalize_idempotent(text in "[a-z \\t\\r\\n:,.]{0,80}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!once.contains('\r'));
        }
    }
}
