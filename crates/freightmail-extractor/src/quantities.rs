//! Numeric extractors: containers, gross weight and volume

use freightmail_domain::Container;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*x\s*([0-9]+(?:'|ft)?h?c?)\b").expect("container pattern")
});

static FT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ft").expect("ft suffix pattern"));

static WEIGHT_LABELLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:weight|gross)[:\s]+([0-9,.]+)\s*kg").expect("labelled weight pattern")
});

static WEIGHT_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9,.]+)\s*kg").expect("bare weight pattern"));

static VOLUME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:volume[:\s]+)?([0-9,.]+)\s*(?:cbm|m3|m³)").expect("volume pattern")
});

/// Extract every `<qty> x <type>` container token, in order of appearance
///
/// Types are upper-cased, apostrophes are dropped and the first "FT" is
/// removed, so `2 x 20ft` becomes `{qty: 2, type: "20"}` and `3x40'HC`
/// becomes `{qty: 3, type: "40HC"}`. Tokens whose quantity is zero or does
/// not fit are skipped.
pub fn extract_containers(text: &str) -> Vec<Container> {
    CONTAINER
        .captures_iter(text)
        .filter_map(|caps| {
            let qty = match caps[1].parse::<u32>() {
                Ok(qty) if qty > 0 => qty,
                _ => {
                    debug!("Skipping container token '{}'", &caps[0]);
                    return None;
                }
            };
            Some(Container::new(qty, normalize_container_type(&caps[2])))
        })
        .collect()
}

fn normalize_container_type(raw: &str) -> String {
    let upper = raw.to_uppercase().replace('\'', "");
    FT_SUFFIX.replace(&upper, "").into_owned()
}

/// Extract the gross weight in kilograms
///
/// A `weight`/`gross` label takes precedence; otherwise the first number
/// followed by `kg` anywhere in the text is used.
pub fn extract_weight(text: &str) -> Option<f64> {
    [&*WEIGHT_LABELLED, &*WEIGHT_BARE]
        .into_iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| parse_number(&caps[1]))
}

/// Extract the volume in cubic meters
pub fn extract_volume(text: &str) -> Option<f64> {
    VOLUME
        .captures(text)
        .and_then(|caps| parse_number(&caps[1]))
}

/// Parse a number written with optional thousands separators
///
/// Commas are stripped, then the longest leading `digits[.digits]` prefix is
/// read, so `"18,500"` is `18500.0` and `"3.2."` is `3.2`. Returns `None`
/// when the token holds no digits at all.
pub fn parse_number(token: &str) -> Option<f64> {
    let cleaned = token.replace(',', "");
    let int_len = cleaned.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, rest) = cleaned.split_at(int_len);

    let frac_part = rest
        .strip_prefix('.')
        .map(|frac| {
            let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
            &frac[..frac_len]
        })
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    format!("{}.{}", int_part, frac_part).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_container() {
        let result = extract_containers("Quote for 1x40HC");
        assert_eq!(result, vec![Container::new(1, "40HC")]);
    }

    #[test]
    fn test_multiple_container_types() {
        let result = extract_containers("Need 2x40HC and 1x20ft");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], Container::new(2, "40HC"));
        assert_eq!(result[1], Container::new(1, "20"));
    }

    #[test]
    fn test_container_spacing_and_quote() {
        assert_eq!(extract_containers("2 x 20ft"), vec![Container::new(2, "20")]);
        assert_eq!(extract_containers("3x40'HC"), vec![Container::new(3, "40HC")]);
        assert_eq!(extract_containers("1 X 40hc"), vec![Container::new(1, "40HC")]);
    }

    #[test]
    fn test_container_quote_without_suffix() {
        // The boundary falls before the apostrophe
        assert_eq!(extract_containers("4x20' boxes"), vec![Container::new(4, "20")]);
    }

    #[test]
    fn test_zero_quantity_skipped() {
        assert_eq!(extract_containers("0x20 and 1x40"), vec![Container::new(1, "40")]);
    }

    #[test]
    fn test_no_containers() {
        assert!(extract_containers("loose cargo, 3 pallets").is_empty());
    }

    #[test]
    fn test_weight_with_thousands_separator() {
        assert_eq!(extract_weight("Gross weight: 18,500 kg"), Some(18500.0));
    }

    #[test]
    fn test_weight_label_beats_earlier_bare_number() {
        let text = "Pallets of 20 kg each\nGross weight: 1,200 kg";
        assert_eq!(extract_weight(text), Some(1200.0));
    }

    #[test]
    fn test_weight_bare_fallback() {
        assert_eq!(extract_weight("approx 450kg total"), Some(450.0));
        assert_eq!(extract_weight("about 12.5 KG"), Some(12.5));
    }

    #[test]
    fn test_weight_missing() {
        assert_eq!(extract_weight("No weight specified"), None);
    }

    #[test]
    fn test_volume_units() {
        assert_eq!(extract_volume("Volume: 58 cbm"), Some(58.0));
        assert_eq!(extract_volume("3.2 m3"), Some(3.2));
        assert_eq!(extract_volume("about 12 m³"), Some(12.0));
        assert_eq!(extract_volume("no volume"), None);
    }

    #[test]
    fn test_parse_number_leading_prefix() {
        assert_eq!(parse_number("18,500"), Some(18500.0));
        assert_eq!(parse_number("3.2."), Some(3.2));
        assert_eq!(parse_number("58."), Some(58.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1.2.3"), Some(1.2));
        assert_eq!(parse_number(".,"), None);
        assert_eq!(parse_number(""), None);
    }
}
