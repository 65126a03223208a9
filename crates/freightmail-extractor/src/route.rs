//! Route extraction: origin and destination
//!
//! Routes are written in a handful of shapes. Each shape is a tier, and tiers
//! are tried in order until one produces a complete pair:
//!
//! 1. `from <city>, <country> to <city>, <country>` in one sentence
//! 2. `Origin: <city>, <country>` and `Destination: <city>, <country>`
//! 3. `From: <city>, <country>` and `To: <city>, <country>` at line start
//!
//! Tiers 2 and 3 need both sides. When tier 2 finds only one side and tier 3
//! finds nothing, the one-sided tier 2 result is returned so the side that was
//! written is not lost.

use freightmail_domain::Location;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

static FROM_TO_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfrom\s+([^,]+),\s*(.+?)\s+to\s+([^,]+),\s*([^\n.]+)")
        .expect("from/to sentence pattern")
});

static ORIGIN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)origin[:\s]+([^,]+),\s*([^\n]+)").expect("origin label pattern")
});

static DESTINATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)destination[:\s]+([^,]+),\s*([^\n]+)").expect("destination label pattern")
});

static FROM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^from[:\s]+([^,]+),\s*([^\n]+)").expect("from line pattern")
});

static TO_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^to[:\s]+([^,]+),\s*([^\n]+)").expect("to line pattern")
});

/// Origin and destination of a shipment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    /// Where the cargo starts
    pub origin: Location,
    /// Where the cargo ends up
    pub destination: Location,
}

/// Outcome of a single route tier
enum TierMatch {
    /// Both sides found
    Complete(Route),
    /// Only one side found; the other is empty
    Partial(Route),
    /// Nothing found
    Miss,
}

type RouteTier = fn(&str) -> TierMatch;

/// Tiers in priority order
const TIERS: [(&str, RouteTier); 3] = [
    ("from/to sentence", from_to_sentence),
    ("origin/destination labels", origin_destination_labels),
    ("from/to lines", from_to_lines),
];

/// Extract origin and destination, first complete tier wins
pub fn extract_route(text: &str) -> Route {
    let mut fallback: Option<Route> = None;

    for (name, tier) in TIERS {
        match tier(text) {
            TierMatch::Complete(route) => {
                debug!("Route matched by {}", name);
                return route;
            }
            TierMatch::Partial(route) => {
                debug!("Route partially matched by {}", name);
                fallback.get_or_insert(route);
            }
            TierMatch::Miss => {}
        }
    }

    fallback.unwrap_or_default()
}

fn location(caps: &Captures<'_>, city: usize, country: usize) -> Location {
    Location::new(&caps[city], &caps[country])
}

fn from_to_sentence(text: &str) -> TierMatch {
    match FROM_TO_SENTENCE.captures(text) {
        Some(caps) => TierMatch::Complete(Route {
            origin: location(&caps, 1, 2),
            destination: location(&caps, 3, 4),
        }),
        None => TierMatch::Miss,
    }
}

fn paired_labels(text: &str, origin: &Regex, destination: &Regex) -> TierMatch {
    let origin = origin.captures(text).map(|caps| location(&caps, 1, 2));
    let destination = destination.captures(text).map(|caps| location(&caps, 1, 2));

    match (origin, destination) {
        (Some(origin), Some(destination)) => TierMatch::Complete(Route {
            origin,
            destination,
        }),
        (None, None) => TierMatch::Miss,
        (origin, destination) => TierMatch::Partial(Route {
            origin: origin.unwrap_or_default(),
            destination: destination.unwrap_or_default(),
        }),
    }
}

fn origin_destination_labels(text: &str) -> TierMatch {
    paired_labels(text, &ORIGIN_LABEL, &DESTINATION_LABEL)
}

fn from_to_lines(text: &str) -> TierMatch {
    // Only both-or-nothing counts here; a lone "To:" line is usually an address header
    match paired_labels(text, &FROM_LINE, &TO_LINE) {
        TierMatch::Partial(_) => TierMatch::Miss,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_to_sentence() {
        let route = extract_route("from San Jose, Costa Rica to Rotterdam, NL");
        assert_eq!(route.origin, Location::new("San Jose", "Costa Rica"));
        assert_eq!(route.destination, Location::new("Rotterdam", "NL"));
    }

    #[test]
    fn test_sentence_stops_at_period() {
        let route = extract_route("Please quote 1x40HC from Miami, USA to Sao Paulo, Brazil. Thanks");
        assert_eq!(route.origin, Location::new("Miami", "USA"));
        assert_eq!(route.destination, Location::new("Sao Paulo", "Brazil"));
    }

    #[test]
    fn test_origin_destination_labels() {
        let route = extract_route("Origin: Shanghai, China\nDestination: Hamburg, Germany");
        assert_eq!(route.origin, Location::new("Shanghai", "China"));
        assert_eq!(route.destination, Location::new("Hamburg", "Germany"));
    }

    #[test]
    fn test_from_to_lines() {
        let route = extract_route("From: Shanghai, China\nTo: Los Angeles, USA");
        assert_eq!(route.origin, Location::new("Shanghai", "China"));
        assert_eq!(route.destination, Location::new("Los Angeles", "USA"));
    }

    #[test]
    fn test_sentence_beats_labels() {
        let text = "Origin: Lima, Peru\nDestination: Quito, Ecuador\n\
                    Ship from San Jose, Costa Rica to Rotterdam, NL.";
        let route = extract_route(text);
        assert_eq!(route.origin.city, "San Jose");
        assert_eq!(route.destination.city, "Rotterdam");
    }

    #[test]
    fn test_labels_beat_lines() {
        let text = "From: Shanghai, China\nTo: Los Angeles, USA\n\
                    Origin: Ningbo, China\nDestination: Oakland, USA";
        let route = extract_route(text);
        assert_eq!(route.origin.city, "Ningbo");
        assert_eq!(route.destination.city, "Oakland");
    }

    #[test]
    fn test_partial_labels_fall_through_to_lines() {
        let text = "Origin: Ningbo, China\nFrom: Shanghai, China\nTo: Los Angeles, USA";
        let route = extract_route(text);
        assert_eq!(route.origin.city, "Shanghai");
        assert_eq!(route.destination.city, "Los Angeles");
    }

    #[test]
    fn test_partial_labels_kept_when_nothing_else_matches() {
        let route = extract_route("Destination: Hamburg, Germany");
        assert!(route.origin.is_empty());
        assert_eq!(route.destination, Location::new("Hamburg", "Germany"));
    }

    #[test]
    fn test_lone_to_line_is_ignored() {
        let route = extract_route("To: Sales Team, Head Office");
        assert!(route.origin.is_empty());
        assert!(route.destination.is_empty());
    }

    #[test]
    fn test_no_route() {
        let route = extract_route("I need to send merchandise to London, UK.");
        assert_eq!(route, Route::default());
    }
}
