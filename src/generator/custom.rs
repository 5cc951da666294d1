//! Parsing of custom prefixed numbers ("Unit-001", "Shop-12").

use serde::{Deserialize, Serialize};

use crate::catalog::rules::CUSTOM_RE;

/// A parsed custom unit number: prefix plus numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomUnit {
    pub prefix: String,
    pub number: u32,
}

/// Parse `"<prefix>-<digits>"` where the prefix is one or more non-digit,
/// non-dash characters and the suffix is non-empty. Returns `None` for bare
/// digits, a prefix with a trailing dash and no digits, or a suffix that
/// does not fit in the counter.
pub fn parse_custom_unit(raw: &str) -> Option<CustomUnit> {
    let caps = CUSTOM_RE.captures(raw)?;
    let number = caps.get(2)?.as_str().parse().ok()?;
    Some(CustomUnit {
        prefix: caps.get(1)?.as_str().to_string(),
        number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_prefix_and_number() {
        let parsed = parse_custom_unit("Unit-123").unwrap();
        assert_eq!(parsed.prefix, "Unit");
        assert_eq!(parsed.number, 123);
    }

    #[test]
    fn test_leading_zeros_parse() {
        let parsed = parse_custom_unit("Room-007").unwrap();
        assert_eq!(parsed.prefix, "Room");
        assert_eq!(parsed.number, 7);
    }

    #[test]
    fn test_rejects_inputs_without_both_parts() {
        assert_eq!(parse_custom_unit("123"), None);
        assert_eq!(parse_custom_unit("Unit-"), None);
        assert_eq!(parse_custom_unit("Unit"), None);
        assert_eq!(parse_custom_unit(""), None);
        assert_eq!(parse_custom_unit("-123"), None);
    }

    #[test]
    fn test_rejects_dash_or_digit_in_prefix() {
        assert_eq!(parse_custom_unit("A-B-123"), None);
        assert_eq!(parse_custom_unit("A1-123"), None);
    }
}
