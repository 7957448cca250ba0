//! Renderable data shapes
//!
//! Command handlers convert their results into a [`Data`] value before
//! handing it to the output engine. Records carry a static field table so
//! every record of a kind shares one schema.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// String-keyed value map with no fixed schema
pub type DynamicMap = BTreeMap<String, Value>;

/// A declared record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Name as declared on the Rust type
    pub name: &'static str,
    /// Name used for headers and serialization
    pub display: &'static str,
}

impl Field {
    pub const fn new(name: &'static str, display: &'static str) -> Self {
        Self { name, display }
    }

    /// Whether a user-requested field name refers to this field
    pub fn matches(&self, requested: &str) -> bool {
        requested.eq_ignore_ascii_case(self.display) || requested.eq_ignore_ascii_case(self.name)
    }
}

/// Trait for items that can be rendered as a record
pub trait TableDisplay {
    /// Fields in column order
    fn fields() -> &'static [Field];

    /// One value per field, in the same order as [`TableDisplay::fields`]
    fn row(&self) -> Vec<Value>;
}

/// A single structured value with declared fields
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: &'static [Field],
    values: Vec<Value>,
    visible: Vec<bool>,
}

impl Record {
    /// Build a record; missing trailing values become null, extras are dropped.
    pub fn new(fields: &'static [Field], mut values: Vec<Value>) -> Self {
        values.resize(fields.len(), Value::Null);
        Self {
            fields,
            values,
            visible: vec![true; fields.len()],
        }
    }

    pub fn from_display<T: TableDisplay>(item: &T) -> Self {
        Self::new(T::fields(), item.row())
    }

    /// The full declared schema, including hidden fields
    pub fn schema(&self) -> &'static [Field] {
        self.fields
    }

    /// Visible fields and their values, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&Field, &Value)> {
        self.fields
            .iter()
            .zip(self.values.iter())
            .zip(self.visible.iter())
            .filter(|(_, visible)| **visible)
            .map(|(entry, _)| entry)
    }

    /// Look up a visible value by display name
    pub fn get(&self, display: &str) -> Option<&Value> {
        self.entries()
            .find(|(field, _)| field.display == display)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this record keeping only the requested fields. Everything
    /// else is reset to its zero value and hidden.
    pub fn project(&self, requested: &[String]) -> Record {
        let mut values = Vec::with_capacity(self.values.len());
        let mut visible = Vec::with_capacity(self.values.len());

        for ((field, value), was_visible) in self
            .fields
            .iter()
            .zip(self.values.iter())
            .zip(self.visible.iter())
        {
            let keep = *was_visible && requested.iter().any(|r| field.matches(r));
            values.push(if keep { value.clone() } else { zero_value(value) });
            visible.push(keep);
        }

        Record {
            fields: self.fields,
            values,
            visible,
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.entries() {
            map.serialize_entry(field.display, value)?;
        }
        map.end()
    }
}

/// Zero value of the same JSON kind
pub fn zero_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(_) => Value::Bool(false),
        Value::Number(_) => Value::from(0),
        Value::String(_) => Value::String(String::new()),
        Value::Array(_) => Value::Array(Vec::new()),
        Value::Object(_) => Value::Object(Default::default()),
    }
}

/// Everything the output engine can render
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Data {
    Record(Record),
    Records(Vec<Record>),
    Map(DynamicMap),
    Maps(Vec<DynamicMap>),
    Scalar(Value),
    Scalars(Vec<Value>),
}

impl Data {
    pub fn item<T: TableDisplay>(item: &T) -> Self {
        Data::Record(Record::from_display(item))
    }

    pub fn list<T: TableDisplay>(items: &[T]) -> Self {
        Data::Records(items.iter().map(Record::from_display).collect())
    }

    /// Number of elements for sequences, `None` for single values
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            Data::Records(items) => Some(items.len()),
            Data::Maps(items) => Some(items.len()),
            Data::Scalars(items) => Some(items.len()),
            Data::Record(_) | Data::Map(_) | Data::Scalar(_) => None,
        }
    }
}

impl From<DynamicMap> for Data {
    fn from(map: DynamicMap) -> Self {
        Data::Map(map)
    }
}

impl From<Vec<DynamicMap>> for Data {
    fn from(maps: Vec<DynamicMap>) -> Self {
        Data::Maps(maps)
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        Data::Scalar(value)
    }
}

impl From<Vec<Value>> for Data {
    fn from(values: Vec<Value>) -> Self {
        Data::Scalars(values)
    }
}

/// Plain string form of a single value: strings unquoted, null empty,
/// arrays joined with `, `, objects as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn fmt_entries<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a str, &'a Value)>,
) -> fmt::Result {
    for (key, value) in entries {
        writeln!(f, "{}: {}", key, stringify(value))?;
    }
    Ok(())
}

fn fmt_separated<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut each: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writeln!(f, "---")?;
        }
        each(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, self.entries().map(|(field, value)| (field.display, value)))
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Record(record) => write!(f, "{}", record),
            Data::Records(records) => fmt_separated(f, records, |f, r| write!(f, "{}", r)),
            Data::Map(map) => fmt_entries(f, map.iter().map(|(k, v)| (k.as_str(), v))),
            Data::Maps(maps) => fmt_separated(f, maps, |f, m| {
                fmt_entries(f, m.iter().map(|(k, v)| (k.as_str(), v)))
            }),
            Data::Scalar(value) => writeln!(f, "{}", stringify(value)),
            Data::Scalars(values) => {
                for value in values {
                    writeln!(f, "{}", stringify(value))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static VM_FIELDS: &[Field] = &[
        Field::new("name", "name"),
        Field::new("uuid", "uuid"),
        Field::new("cpu_num", "cpuNum"),
    ];

    fn vm() -> Record {
        Record::new(VM_FIELDS, vec![json!("vm1"), json!("u1"), json!(4)])
    }

    #[test]
    fn test_field_matches_display_or_declared_name() {
        let field = Field::new("cpu_num", "cpuNum");
        assert!(field.matches("CPUNUM"));
        assert!(field.matches("cpu_num"));
        assert!(!field.matches("cpu"));
    }

    #[test]
    fn test_record_pads_missing_values() {
        let record = Record::new(VM_FIELDS, vec![json!("vm1")]);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("cpuNum"), Some(&Value::Null));
    }

    #[test]
    fn test_project_hides_and_zeroes() {
        let projected = vm().project(&["CPUNUM".to_string()]);
        let names: Vec<_> = projected.entries().map(|(f, _)| f.display).collect();
        assert_eq!(names, vec!["cpuNum"]);
        assert_eq!(projected.get("name"), None);
        assert_eq!(projected.values[0], json!(""));
        assert_eq!(projected.schema().len(), 3);
    }

    #[test]
    fn test_serialize_in_declaration_order() {
        let json = serde_json::to_string(&vm()).unwrap();
        assert_eq!(json, r#"{"name":"vm1","uuid":"u1","cpuNum":4}"#);
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!("a")), "a");
        assert_eq!(stringify(&json!(1.5)), "1.5");
        assert_eq!(stringify(&json!(["a", 1])), "a, 1");
        assert_eq!(stringify(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_display_records_separated() {
        let data = Data::Records(vec![vm(), vm()]);
        let text = data.to_string();
        assert_eq!(
            text,
            "name: vm1\nuuid: u1\ncpuNum: 4\n---\nname: vm1\nuuid: u1\ncpuNum: 4\n"
        );
    }

    #[test]
    fn test_sequence_len() {
        assert_eq!(Data::Records(vec![vm()]).sequence_len(), Some(1));
        assert_eq!(Data::Record(vm()).sequence_len(), None);
    }
}
