//! Per-format renderers

use cloudctl_common::Result;

use super::data::Data;
use super::filter::filter;
use super::table;
use super::OutputFormat;

/// Turns (optionally filtered) data into output text
pub trait Renderer {
    fn render(&self, data: &Data, fields: &[String]) -> Result<String>;
}

pub struct TableRenderer;
pub struct JsonRenderer;
pub struct YamlRenderer;
pub struct TextRenderer;

impl Renderer for TableRenderer {
    fn render(&self, data: &Data, fields: &[String]) -> Result<String> {
        Ok(table::render(&filter(data, fields)))
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, data: &Data, fields: &[String]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&filter(data, fields))?;
        out.push('\n');
        Ok(out)
    }
}

impl Renderer for YamlRenderer {
    fn render(&self, data: &Data, fields: &[String]) -> Result<String> {
        let out = serde_yaml::to_string(&filter(data, fields))?;
        Ok(ensure_newline(out))
    }
}

impl Renderer for TextRenderer {
    fn render(&self, data: &Data, fields: &[String]) -> Result<String> {
        Ok(ensure_newline(filter(data, fields).to_string()))
    }
}

fn ensure_newline(mut out: String) -> String {
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Renderer for a resolved format
pub fn renderer_for(format: OutputFormat) -> &'static dyn Renderer {
    match format {
        OutputFormat::Table => &TableRenderer,
        OutputFormat::Json => &JsonRenderer,
        OutputFormat::Yaml => &YamlRenderer,
        OutputFormat::Text => &TextRenderer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::data::{DynamicMap, Field, Record};
    use serde_json::{json, Value};

    static VM_FIELDS: &[Field] = &[
        Field::new("name", "name"),
        Field::new("uuid", "uuid"),
        Field::new("state", "state"),
    ];

    fn vms() -> Data {
        Data::Records(vec![
            Record::new(VM_FIELDS, vec![json!("vm1"), json!("u1"), json!("Running")]),
            Record::new(VM_FIELDS, vec![json!("vm2"), json!("u2"), json!("Stopped")]),
        ])
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_json_omits_filtered_fields() {
        let out = JsonRenderer.render(&vms(), &fields(&["uuid"])).unwrap();
        let parsed: Vec<DynamicMap> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].len(), 1);
        assert_eq!(parsed[0]["uuid"], "u1");
        assert!(!out.contains("vm1"));
        assert!(!out.contains("Running"));
    }

    #[test]
    fn test_json_round_trip() {
        let requested = fields(&["name", "state"]);
        let out = JsonRenderer.render(&vms(), &requested).unwrap();
        let parsed: Vec<DynamicMap> = serde_json::from_str(&out).unwrap();

        let Data::Records(expected) = filter(&vms(), &requested) else {
            panic!("expected records");
        };
        assert_eq!(parsed.len(), expected.len());
        for (row, record) in parsed.iter().zip(expected.iter()) {
            let expected: DynamicMap = record
                .entries()
                .map(|(f, v)| (f.display.to_string(), v.clone()))
                .collect();
            assert_eq!(row, &expected);
        }
    }

    #[test]
    fn test_json_is_indented() {
        let out = JsonRenderer.render(&vms(), &[]).unwrap();
        assert!(out.starts_with("[\n  {\n    \"name\": \"vm1\""));
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn test_yaml_sequence() {
        let out = YamlRenderer.render(&vms(), &fields(&["NAME"])).unwrap();
        let parsed: Vec<DynamicMap> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["name"], Value::from("vm2"));
        assert!(out.starts_with("- name: vm1\n"));
    }

    #[test]
    fn test_text_record_lines() {
        let data = Data::Record(Record::new(VM_FIELDS, vec![json!("vm1"), json!("u1"), json!("Running")]));
        let out = TextRenderer.render(&data, &fields(&["uuid", "state"])).unwrap();
        assert_eq!(out, "uuid: u1\nstate: Running\n");
    }

    #[test]
    fn test_table_applies_filter() {
        let out = TableRenderer.render(&vms(), &fields(&["name", "state"])).unwrap();
        assert!(out.contains("vm1"));
        assert!(out.contains("Stopped"));
        assert!(!out.contains("u1"));
    }

    #[test]
    fn test_scalar_json() {
        let out = JsonRenderer.render(&Data::Scalar(json!(3)), &[]).unwrap();
        assert_eq!(out, "3\n");
    }
}
