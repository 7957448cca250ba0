//! Field projection
//!
//! Reduces a [`Data`] value to the fields named by `--fields`. Matching is
//! case-insensitive against a record field's display or declared name, or a
//! map key. The input is never modified.

use super::data::{Data, DynamicMap, Record};

/// Project `data` onto `requested`. An empty request returns an identical copy.
pub fn filter(data: &Data, requested: &[String]) -> Data {
    if requested.is_empty() {
        return data.clone();
    }

    match data {
        Data::Record(record) => Data::Record(record.project(requested)),
        Data::Records(records) => {
            Data::Records(records.iter().map(|r| r.project(requested)).collect())
        }
        Data::Map(map) => Data::Map(filter_map(map, requested)),
        Data::Maps(maps) => Data::Maps(maps.iter().map(|m| filter_map(m, requested)).collect()),
        Data::Scalar(_) | Data::Scalars(_) => data.clone(),
    }
}

fn filter_map(map: &DynamicMap, requested: &[String]) -> DynamicMap {
    map.iter()
        .filter(|(key, _)| key_requested(key, requested))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn key_requested(key: &str, requested: &[String]) -> bool {
    requested.iter().any(|r| r.eq_ignore_ascii_case(key))
}

/// Requested names that match no field or key anywhere in `data`.
/// Scalars have no fields, so nothing is reported for them.
pub fn unmatched(data: &Data, requested: &[String]) -> Vec<String> {
    let matched = |name: &String| -> bool {
        match data {
            Data::Record(record) => record_has(record, name),
            Data::Records(records) => records.iter().any(|r| record_has(r, name)),
            Data::Map(map) => map.keys().any(|k| k.eq_ignore_ascii_case(name)),
            Data::Maps(maps) => maps
                .iter()
                .any(|m| m.keys().any(|k| k.eq_ignore_ascii_case(name))),
            Data::Scalar(_) | Data::Scalars(_) => true,
        }
    };

    requested.iter().filter(|name| !matched(*name)).cloned().collect()
}

fn record_has(record: &Record, name: &str) -> bool {
    record.schema().iter().any(|field| field.matches(name))
}
