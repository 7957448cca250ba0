//! CLI Commands

pub mod config;
pub mod describe;
pub mod get;
pub mod summary;

use anyhow::Result;
use clap::Args;

use crate::client::{Condition, Query, SortBy};
use crate::output::{print_with_fields, Data, OutputFormat};

/// Rendering options shared by every command
#[derive(Debug, Clone, Default)]
pub struct RenderOpts {
    pub format: OutputFormat,
    pub fields: Vec<String>,
    /// Default limit for list queries, 0 for unlimited
    pub page_limit: usize,
}

impl RenderOpts {
    pub fn new(format: OutputFormat, fields: Vec<String>, page_limit: usize) -> Self {
        let fields = fields
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        Self {
            format,
            fields,
            page_limit,
        }
    }

    pub fn print(&self, data: &Data) -> Result<()> {
        print_with_fields(data, self.format, &self.fields)?;
        Ok(())
    }
}

/// Query flags accepted by every list command
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Resource name
    pub name: Option<String>,

    /// Query condition, repeatable (key=value or key!=value)
    #[arg(short = 'q', long = "query", value_name = "CONDITION")]
    pub conditions: Vec<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Offset of the first result
    #[arg(short, long, default_value_t = 0)]
    pub start: usize,

    /// Sort field, prefixed with + (ascending) or - (descending)
    #[arg(long, value_name = "FIELD", allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Only print the number of matching resources
    #[arg(long)]
    pub count: bool,

    /// Print `Total: N` (every match) before the results
    #[arg(long, visible_alias = "pagination")]
    pub reply_with_count: bool,

    /// Count matching resources per distinct value of a field
    #[arg(long, value_name = "FIELD", conflicts_with = "count")]
    pub group_by: Option<String>,
}

impl QueryArgs {
    /// Build the query; `page_limit` applies when no `--limit` is given
    pub fn to_query(&self, page_limit: usize) -> Result<Query> {
        self.to_query_keyed("name", page_limit)
    }

    /// Like [`QueryArgs::to_query`], matching the positional argument against
    /// `name_key` instead of `name`
    pub fn to_query_keyed(&self, name_key: &str, page_limit: usize) -> Result<Query> {
        let mut query = match &self.name {
            Some(name) => Query::new().with(Condition::eq(name_key, name)),
            None => Query::new(),
        };
        for raw in &self.conditions {
            query.add_q(raw)?;
        }
        query.sort = self.sort.as_deref().map(SortBy::parse);

        // counting covers every match
        if !self.count {
            query.start = self.start;
            query.limit = self.limit.or((page_limit > 0).then_some(page_limit));
        }
        Ok(query)
    }
}
