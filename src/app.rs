use anyhow::{Context, Result};

use crate::catalog::JobCatalog;
use crate::data::model::Record;
use crate::ui::console;

// ---------------------------------------------------------------------------
// Console driver: one query in, rendered text out
// ---------------------------------------------------------------------------

/// Column argument meaning "every column" / "every record".
pub const ALL: &str = "all";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Header names of the loaded file.
    Columns,
    /// Distinct values of a column, or every record for `all`.
    List { column: String },
    /// Search one column, or every column when `column` is `None` or `all`.
    Search { term: String, column: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct TechJobsApp {
    pub catalog: JobCatalog,
    pub format: OutputFormat,
}

impl TechJobsApp {
    pub fn new(catalog: JobCatalog, format: OutputFormat) -> Self {
        Self { catalog, format }
    }

    /// Run a query and return what should be printed.
    pub fn run(&self, query: &Query) -> Result<String> {
        // Surface load failures here; the catalog itself would just return
        // empty results.
        self.catalog.load().with_context(|| {
            format!(
                "cannot read job data from {}",
                self.catalog.path().display()
            )
        })?;

        match query {
            Query::Columns => self.columns(),
            Query::List { column } if is_all(column) => {
                let records: Vec<&Record> = self.catalog.find_all_records().iter().collect();
                self.records(&records)
            }
            Query::List { column } => self.values(column),
            Query::Search { term, column } => match column.as_deref() {
                None => self.search_all(term),
                Some(c) if is_all(c) => self.search_all(term),
                Some(c) => self.search_column(c, term),
            },
        }
    }

    fn columns(&self) -> Result<String> {
        let fields = self.catalog.fields();
        match self.format {
            OutputFormat::Text => Ok(console::render_fields(fields)),
            OutputFormat::Json => Ok(console::values_json(fields)?),
        }
    }

    fn values(&self, column: &str) -> Result<String> {
        let field = resolve_column(column, self.catalog.fields());
        let mut values = self.catalog.find_all_values(&field)?;
        values.sort();
        match self.format {
            OutputFormat::Text => Ok(console::render_values(&field, &values)),
            OutputFormat::Json => Ok(console::values_json(&values)?),
        }
    }

    fn search_column(&self, column: &str, term: &str) -> Result<String> {
        let field = resolve_column(column, self.catalog.fields());
        let hits = self.catalog.find_by_field_containing(&field, term)?;
        self.records(&hits)
    }

    fn search_all(&self, term: &str) -> Result<String> {
        let hits = self.catalog.find_by_any_field_containing(term);
        self.records(&hits)
    }

    fn records(&self, records: &[&Record]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(console::render_records(records, self.catalog.fields())),
            OutputFormat::Json => Ok(console::records_json(records)?),
        }
    }
}

fn is_all(column: &str) -> bool {
    column.eq_ignore_ascii_case(ALL)
}

/// Map a menu key such as `core-competency` onto a header name.
/// Unmatched input is returned unchanged so the catalog can reject it.
pub fn resolve_column(input: &str, fields: &[String]) -> String {
    if fields.iter().any(|f| f == input) {
        return input.to_string();
    }
    let wanted = input.replace(['-', '_'], " ");
    fields
        .iter()
        .find(|f| f.eq_ignore_ascii_case(&wanted))
        .cloned()
        .unwrap_or_else(|| input.to_string())
}
