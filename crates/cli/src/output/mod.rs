//! Output formatting for CLI
//!
//! Every command builds a [`Data`] value and hands it to [`print`] or
//! [`print_with_fields`]. Rendering happens into a buffer first, so a
//! failing renderer never leaves partial output on stdout.

pub mod data;
pub mod filter;
pub mod render;
pub mod table;

use std::fmt;
use std::io::Write;

use cloudctl_common::Result;
use tracing::warn;

pub use data::{Data, DynamicMap, Field, Record, TableDisplay};
pub use filter::filter;
pub use render::{renderer_for, Renderer};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Plain text format
    Text,
}

impl OutputFormat {
    /// Resolve a user-supplied format name. Unknown names fall back to table.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "text" => OutputFormat::Text,
            _ => OutputFormat::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        OutputFormat::parse(name)
    }
}

/// Render `data` to a string without touching stdout
pub fn render(data: &Data, format: OutputFormat, fields: &[String]) -> Result<String> {
    let missing = filter::unmatched(data, fields);
    if !missing.is_empty() {
        warn!(fields = ?missing, "requested fields match nothing in the output");
    }
    renderer_for(format).render(data, fields)
}

/// Print without field filtering
pub fn print(data: &Data, format: OutputFormat) -> Result<()> {
    print_with_fields(data, format, &[])
}

/// Print keeping only `fields` (all fields when empty)
pub fn print_with_fields(data: &Data, format: OutputFormat, fields: &[String]) -> Result<()> {
    let rendered = render(data, format, fields)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print success message
pub fn print_success(message: &str) {
    println!("✅ {}", message);
}
