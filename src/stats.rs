//! Summary statistics over a fetch of animal records.
//!
//! Everything here is a pure function of the input slice. Malformed or missing
//! fields degrade to zero instead of producing errors.

use crate::models::{AnimalRecord, PetAge, StatsSummary, TypeCount};

/// Age labels in histogram order, paired with the numeric proxy used for averaging.
pub const AGE_MAPPING: [(&str, f64); 4] = [
    ("Baby", 0.5),
    ("Young", 1.0),
    ("Adult", 5.0),
    ("Senior", 10.0),
];

/// Numeric proxy for an age label. Unrecognized labels map to 0.
pub fn age_proxy(label: &str) -> f64 {
    AGE_MAPPING
        .iter()
        .find(|(name, _)| *name == label)
        .map_or(0.0, |(_, value)| *value)
}

/// Parses the leading integer of `s`, ignoring any trailing text.
///
/// Leading whitespace and a single sign are accepted; at least one digit must
/// follow. `"3 years"` parses as 3, `"Adult"` and `"-"` do not parse.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // Saturate rather than fail on absurdly long digit runs.
    let magnitude = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    Some(if negative { -magnitude } else { magnitude })
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean age proxy across `records`, rounded to two decimals.
pub fn average_age(records: &[AnimalRecord]) -> f64 {
    // Fold from +0.0: `Sum for f64` starts at -0.0.
    let sum = records.iter().fold(0.0, |acc, r| acc + age_proxy(&r.age));
    let avg = sum / records.len().max(1) as f64;
    if avg.is_finite() {
        round_2(avg)
    } else {
        0.0
    }
}

/// Per-type counts in the order each type is first seen.
pub fn type_counts(records: &[AnimalRecord]) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();
    for record in records {
        match counts
            .iter_mut()
            .find(|c| c.animal_type.as_deref() == Some(record.animal_type.as_str()))
        {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCount {
                animal_type: Some(record.animal_type.clone()),
                count: 1,
            }),
        }
    }
    counts
}

/// Type with the strictly greatest count; the earliest type wins ties.
///
/// Starts from `(None, 0)`, which is also the result for empty input.
pub fn most_common_type(counts: &[TypeCount]) -> TypeCount {
    counts.iter().fold(TypeCount::default(), |max, entry| {
        if entry.count > max.count {
            entry.clone()
        } else {
            max
        }
    })
}

/// Record with the strictly greatest parsed age.
///
/// The scan is measured against a baseline of 0, so records whose age is 0,
/// negative or non-numeric are never reported.
pub fn oldest_pet(records: &[AnimalRecord]) -> Option<PetAge> {
    records.iter().fold(None, |oldest: Option<PetAge>, record| {
        let baseline = oldest.as_ref().map_or(0, |p| p.age);
        match parse_leading_int(&record.age) {
            Some(age) if age > baseline => Some(PetAge {
                name: record.name.clone(),
                age,
            }),
            _ => oldest,
        }
    })
}

/// Record with the strictly smallest parsed age.
///
/// The first record with a numeric age seeds the result, so an age of 0 is a
/// real candidate. Records whose age does not parse are skipped.
pub fn youngest_pet(records: &[AnimalRecord]) -> Option<PetAge> {
    records.iter().fold(None, |youngest: Option<PetAge>, record| {
        let Some(age) = parse_leading_int(&record.age) else {
            return youngest;
        };
        match youngest {
            Some(current) if current.age <= age => Some(current),
            _ => Some(PetAge {
                name: record.name.clone(),
                age,
            }),
        }
    })
}

/// Computes the full summary for one fetch.
pub fn compute_stats(records: &[AnimalRecord]) -> StatsSummary {
    let type_counts = type_counts(records);
    let most_common_type = most_common_type(&type_counts);

    StatsSummary {
        total: records.len(),
        avg_age: average_age(records),
        type_counts,
        most_common_type,
        oldest_pet: oldest_pet(records),
        youngest_pet: youngest_pet(records),
    }
}
