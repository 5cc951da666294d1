//! Per-pattern rules: recognizers, floor extraction, and generation.
//!
//! Each structured pattern is a compiled regex plus three total functions.
//! For any string the recognizer accepts, floor extraction and next-value
//! generation never panic; unparseable floors degrade to `None` and
//! generation falls back to the pattern's first value.

use once_cell::sync::Lazy;
use regex::Regex;

static SUITE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^suite-(\d+)$").unwrap());
static BUILDING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z])(\d)U(\d{2})$").unwrap());
static ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z])-(\d)(\d{3})$").unwrap());
static WING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z])(\d)(\d{2})$").unwrap());
static SEQUENTIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
pub(crate) static CUSTOM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^-\d]+)-(\d+)$").unwrap());

// --- suite: "Suite-<digits>" ------------------------------------------------

pub(crate) fn suite_recognize(raw: &str) -> bool {
    SUITE_RE.is_match(raw)
}

/// Floor is what remains after stripping the last two digits: 105 -> 1,
/// 205 -> 2, 1001 -> 10. Fewer than three digits carry no floor.
pub(crate) fn suite_floor(raw: &str) -> Option<i32> {
    let caps = SUITE_RE.captures(raw)?;
    let digits = caps.get(1)?.as_str();
    if digits.len() <= 2 {
        return None;
    }
    digits[..digits.len() - 2].parse().ok()
}

pub(crate) fn suite_next(existing: &[&str], floor: Option<i32>, prefix: Option<&str>) -> String {
    let mut best: Option<(u64, usize)> = None;
    for raw in existing {
        let Some(caps) = SUITE_RE.captures(raw) else {
            continue;
        };
        if let Some(scope) = floor {
            if suite_floor(raw) != Some(scope) {
                continue;
            }
        }
        let digits = &caps[1];
        let Ok(value) = digits.parse::<u64>() else {
            continue;
        };
        // A counter that cannot be incremented is as unusable as one that
        // does not parse.
        let Some(bumped) = value.checked_add(1) else {
            continue;
        };
        if best.map_or(true, |(v, _)| bumped > v) {
            best = Some((bumped, digits.len()));
        }
    }
    match best {
        Some((bumped, width)) => format!("Suite-{:0w$}", bumped, w = width),
        None => suite_first(floor, prefix),
    }
}

pub(crate) fn suite_first(floor: Option<i32>, _prefix: Option<&str>) -> String {
    format!("Suite-{}01", floor.unwrap_or(1))
}

// --- building_unit: "<letter><floor>U<nn>" ----------------------------------

pub(crate) fn building_recognize(raw: &str) -> bool {
    BUILDING_RE.is_match(raw)
}

pub(crate) fn building_floor(raw: &str) -> Option<i32> {
    BUILDING_RE.captures(raw)?.get(2)?.as_str().parse().ok()
}

pub(crate) fn building_next(existing: &[&str], floor: Option<i32>, prefix: Option<&str>) -> String {
    // Counter is scoped to the building letter + floor digit of the ranking
    // maximum; a floor argument narrows the candidates first.
    let mut best: Option<(u64, String, i32)> = None;
    for raw in existing {
        let Some(caps) = BUILDING_RE.captures(raw) else {
            continue;
        };
        let Ok(floor_digit) = caps[2].parse::<i32>() else {
            continue;
        };
        if let Some(scope) = floor {
            if floor_digit != scope {
                continue;
            }
        }
        let Ok(counter) = caps[3].parse::<u64>() else {
            continue;
        };
        if best.as_ref().map_or(true, |(c, _, _)| counter > *c) {
            best = Some((counter, caps[1].to_string(), floor_digit));
        }
    }
    match best {
        Some((counter, letter, floor_digit)) => {
            format!("{letter}{floor_digit}U{:02}", counter + 1)
        }
        None => building_first(floor, prefix),
    }
}

pub(crate) fn building_first(floor: Option<i32>, _prefix: Option<&str>) -> String {
    format!("B{}U01", floor.unwrap_or(1))
}

// --- alpha_numeric: "<letter>-<floor><nnn>" ---------------------------------

pub(crate) fn alpha_recognize(raw: &str) -> bool {
    ALPHA_RE.is_match(raw)
}

pub(crate) fn alpha_floor(raw: &str) -> Option<i32> {
    ALPHA_RE.captures(raw)?.get(2)?.as_str().parse().ok()
}

pub(crate) fn alpha_next(existing: &[&str], floor: Option<i32>, prefix: Option<&str>) -> String {
    let mut best: Option<(u64, String, i32)> = None;
    for raw in existing {
        let Some(caps) = ALPHA_RE.captures(raw) else {
            continue;
        };
        let Ok(floor_digit) = caps[2].parse::<i32>() else {
            continue;
        };
        if let Some(scope) = floor {
            if floor_digit != scope {
                continue;
            }
        }
        let Ok(sequence) = caps[3].parse::<u64>() else {
            continue;
        };
        if best.as_ref().map_or(true, |(s, _, _)| sequence > *s) {
            best = Some((sequence, caps[1].to_string(), floor_digit));
        }
    }
    match best {
        Some((sequence, letter, floor_digit)) => {
            // Floor digit stays fixed unless the caller asked for another floor.
            let floor_digit = floor.unwrap_or(floor_digit);
            format!("{letter}-{floor_digit}{:03}", sequence + 1)
        }
        None => alpha_first(floor, prefix),
    }
}

pub(crate) fn alpha_first(floor: Option<i32>, _prefix: Option<&str>) -> String {
    format!("A-{}001", floor.unwrap_or(1))
}

// --- wing_unit: "<letter><floor><nn>" ---------------------------------------

pub(crate) fn wing_recognize(raw: &str) -> bool {
    WING_RE.is_match(raw)
}

pub(crate) fn wing_floor(raw: &str) -> Option<i32> {
    WING_RE.captures(raw)?.get(2)?.as_str().parse().ok()
}

pub(crate) fn wing_next(existing: &[&str], floor: Option<i32>, prefix: Option<&str>) -> String {
    let mut best: Option<(u64, String, i32)> = None;
    for raw in existing {
        let Some(caps) = WING_RE.captures(raw) else {
            continue;
        };
        let Ok(floor_digit) = caps[2].parse::<i32>() else {
            continue;
        };
        if let Some(scope) = floor {
            if floor_digit != scope {
                continue;
            }
        }
        let Ok(sequence) = caps[3].parse::<u64>() else {
            continue;
        };
        if best.as_ref().map_or(true, |(s, _, _)| sequence > *s) {
            best = Some((sequence, caps[1].to_string(), floor_digit));
        }
    }
    match best {
        Some((sequence, letter, floor_digit)) => {
            let floor_digit = floor.unwrap_or(floor_digit);
            format!("{letter}{floor_digit}{:02}", sequence + 1)
        }
        None => wing_first(floor, prefix),
    }
}

pub(crate) fn wing_first(floor: Option<i32>, _prefix: Option<&str>) -> String {
    format!("A{}01", floor.unwrap_or(1))
}

// --- sequential: digits only ------------------------------------------------

pub(crate) fn sequential_recognize(raw: &str) -> bool {
    SEQUENTIAL_RE.is_match(raw)
}

pub(crate) fn no_floor(_raw: &str) -> Option<i32> {
    None
}

pub(crate) fn sequential_next(
    existing: &[&str],
    _floor: Option<i32>,
    _prefix: Option<&str>,
) -> String {
    let next = existing
        .iter()
        .filter(|raw| SEQUENTIAL_RE.is_match(raw))
        .filter_map(|raw| raw.parse::<u64>().ok())
        .filter_map(|value| value.checked_add(1))
        .max();
    match next {
        Some(value) => value.to_string(),
        None => sequential_first(None, None),
    }
}

pub(crate) fn sequential_first(_floor: Option<i32>, _prefix: Option<&str>) -> String {
    "1".to_string()
}

// --- custom: "<prefix>-<digits>" or any unclaimed non-empty string ----------

pub(crate) fn custom_recognize(raw: &str) -> bool {
    !raw.is_empty()
}

pub(crate) fn custom_next(existing: &[&str], _floor: Option<i32>, prefix: Option<&str>) -> String {
    let mut best: Option<(u64, usize, String)> = None;
    for raw in existing {
        let Some(caps) = CUSTOM_RE.captures(raw) else {
            continue;
        };
        if let Some(wanted) = prefix {
            if &caps[1] != wanted {
                continue;
            }
        }
        let digits = &caps[2];
        let Ok(number) = digits.parse::<u64>() else {
            continue;
        };
        let Some(bumped) = number.checked_add(1) else {
            continue;
        };
        if best.as_ref().map_or(true, |(n, _, _)| bumped > *n) {
            best = Some((bumped, digits.len(), caps[1].to_string()));
        }
    }
    match best {
        Some((bumped, width, unit_prefix)) => {
            format!("{unit_prefix}-{:0w$}", bumped, w = width)
        }
        None => custom_first(None, prefix),
    }
}

pub(crate) fn custom_first(_floor: Option<i32>, prefix: Option<&str>) -> String {
    format!("{}-001", prefix.unwrap_or("Unit"))
}

// --- numeric: empty-string fallback -----------------------------------------

pub(crate) fn numeric_recognize(raw: &str) -> bool {
    raw.is_empty()
}
