//! Table rendering

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::collections::BTreeSet;

use super::data::{stringify, Data, DynamicMap, Record};

/// Printed instead of a table when a sequence is empty
pub const NO_RESOURCES: &str = "No resources found.";

fn new_table() -> Table {
    let mut table = Table::new();
    // Column widths depend only on content so output is stable in pipes and terminals.
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);
    table
}

fn finish(table: Table) -> String {
    format!("{table}\n")
}

/// Render `data` as an aligned table. Data is expected to be filtered already.
pub fn render(data: &Data) -> String {
    match data {
        Data::Records(records) if records.is_empty() => empty(),
        Data::Maps(maps) if maps.is_empty() => empty(),
        Data::Scalars(values) if values.is_empty() => empty(),

        Data::Records(records) => records_table(records),
        Data::Maps(maps) => maps_table(maps),
        Data::Scalars(values) => {
            let mut table = new_table();
            table.set_header(vec!["Value"]);
            for value in values {
                table.add_row(vec![stringify(value)]);
            }
            finish(table)
        }
        Data::Record(record) => {
            let mut table = new_table();
            table.set_header(vec!["Field", "Value"]);
            for (field, value) in record.entries() {
                table.add_row(vec![field.display.to_string(), stringify(value)]);
            }
            finish(table)
        }
        Data::Map(map) => {
            let mut table = new_table();
            table.set_header(vec!["Key", "Value"]);
            for (key, value) in map {
                table.add_row(vec![key.clone(), stringify(value)]);
            }
            finish(table)
        }
        Data::Scalar(value) => format!("{}\n", stringify(value)),
    }
}

fn empty() -> String {
    format!("{NO_RESOURCES}\n")
}

/// Columns come from the first record; later records are read by display name.
fn records_table(records: &[Record]) -> String {
    let headers: Vec<&'static str> = records[0].entries().map(|(field, _)| field.display).collect();
    if headers.is_empty() {
        return blank_rows(records.len());
    }

    let mut table = new_table();
    table.set_header(headers.clone());
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|name| record.get(name).map(stringify).unwrap_or_default())
            .collect();
        table.add_row(row);
    }
    finish(table)
}

/// One untitled column with an empty row per element, for sequences whose
/// fields were all filtered away.
fn blank_rows(count: usize) -> String {
    let mut table = new_table();
    table.set_header(vec![""]);
    for _ in 0..count {
        table.add_row(vec![""]);
    }
    finish(table)
}

/// Columns are the sorted union of keys across all maps.
fn maps_table(maps: &[DynamicMap]) -> String {
    let headers: BTreeSet<&str> = maps
        .iter()
        .flat_map(|map| map.keys().map(String::as_str))
        .collect();
    if headers.is_empty() {
        return blank_rows(maps.len());
    }

    let mut table = new_table();
    table.set_header(headers.iter().copied().collect::<Vec<_>>());
    for map in maps {
        let row: Vec<String> = headers
            .iter()
            .map(|key| map.get(*key).map(stringify).unwrap_or_default())
            .collect();
        table.add_row(row);
    }
    finish(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::data::Field;
    use serde_json::json;

    static VM_FIELDS: &[Field] = &[
        Field::new("name", "name"),
        Field::new("uuid", "uuid"),
        Field::new("state", "state"),
    ];

    fn vm(name: &str, uuid: &str, state: &str) -> Record {
        Record::new(VM_FIELDS, vec![json!(name), json!(uuid), json!(state)])
    }

    /// Cell texts of every line that holds content, border glyphs removed
    fn rows(output: &str) -> Vec<Vec<String>> {
        output
            .lines()
            .map(|line| {
                line.split(|c: char| c == '│' || c == '┆')
                    .map(|cell| cell.trim().to_string())
                    .filter(|cell| !cell.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|cells| {
                !cells.is_empty()
                    && !cells
                        .iter()
                        .all(|c| c.chars().all(|ch| "─═╌┼╪╞╡├┤┌┐└┘┬┴".contains(ch)))
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_message() {
        assert_eq!(render(&Data::Records(vec![])), "No resources found.\n");
        assert_eq!(render(&Data::Maps(vec![])), "No resources found.\n");
        assert_eq!(render(&Data::Scalars(vec![])), "No resources found.\n");
    }

    #[test]
    fn test_records_table() {
        let data = Data::Records(vec![vm("vm1", "u1", "Running"), vm("vm2", "u2", "Stopped")]);
        let out = render(&data);
        assert_eq!(
            rows(&out),
            vec![
                vec!["name", "uuid", "state"],
                vec!["vm1", "u1", "Running"],
                vec!["vm2", "u2", "Stopped"],
            ]
        );
    }

    #[test]
    fn test_records_use_visible_columns() {
        let requested = vec!["state".to_string()];
        let data = Data::Records(vec![vm("vm1", "u1", "Running").project(&requested)]);
        assert_eq!(rows(&render(&data)), vec![vec!["state"], vec!["Running"]]);
    }

    #[test]
    fn test_maps_sorted_union_of_keys() {
        let first: DynamicMap = [("b".to_string(), json!(1))].into_iter().collect();
        let second: DynamicMap = [("a".to_string(), json!(2))].into_iter().collect();
        let out = render(&Data::Maps(vec![first, second]));
        let lines = rows(&out);
        assert_eq!(lines[0], vec!["a", "b"]);
        assert_eq!(lines[1], vec!["1"]);
        assert_eq!(lines[2], vec!["2"]);
    }

    #[test]
    fn test_single_map_sorted_and_stable() {
        let map: DynamicMap = [("b".to_string(), json!(1)), ("a".to_string(), json!(2))]
            .into_iter()
            .collect();
        let data = Data::Map(map);
        let first = render(&data);
        assert_eq!(
            rows(&first),
            vec![vec!["Key", "Value"], vec!["a", "2"], vec!["b", "1"]]
        );
        for _ in 0..5 {
            assert_eq!(render(&data), first);
        }
    }

    #[test]
    fn test_single_record_field_value() {
        let out = render(&Data::Record(vm("vm1", "u1", "Running")));
        assert_eq!(
            rows(&out),
            vec![
                vec!["Field", "Value"],
                vec!["name", "vm1"],
                vec!["uuid", "u1"],
                vec!["state", "Running"],
            ]
        );
    }

    #[test]
    fn test_scalars_single_column() {
        let out = render(&Data::Scalars(vec![json!("a"), json!(2)]));
        assert_eq!(rows(&out), vec![vec!["Value"], vec!["a"], vec!["2"]]);
    }

    /// Lines holding a header or a row, with or without cell text
    fn content_lines(output: &str) -> usize {
        output.lines().filter(|line| line.starts_with('│')).count()
    }

    #[test]
    fn test_no_visible_columns_keeps_row_count() {
        let requested = vec!["nmae".to_string()];
        let data = Data::Records(vec![
            vm("vm1", "u1", "Running").project(&requested),
            vm("vm2", "u2", "Stopped").project(&requested),
        ]);
        let out = render(&data);
        assert!(!out.is_empty());
        assert_eq!(content_lines(&out), 3);
        assert!(!out.contains("vm1"));

        let maps = Data::Maps(vec![DynamicMap::new(), DynamicMap::new(), DynamicMap::new()]);
        assert_eq!(content_lines(&render(&maps)), 4);
    }

    #[test]
    fn test_bare_scalar_is_plain_line() {
        assert_eq!(render(&Data::Scalar(json!(42))), "42\n");
    }
}
