use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one row of the job data file
// ---------------------------------------------------------------------------

/// A single job listing: header name → cell value.
///
/// Every record of a dataset carries exactly the dataset's header set as keys;
/// empty cells are stored as empty strings, never as missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Pair each header with the cell at the same position.
    pub fn from_cells<'h, 'c, H, C>(headers: H, cells: C) -> Self
    where
        H: IntoIterator<Item = &'h String>,
        C: IntoIterator<Item = &'c str>,
    {
        let values = headers
            .into_iter()
            .zip(cells)
            .map(|(h, c)| (h.clone(), c.to_string()))
            .collect();
        Record { values }
    }

    /// Value of `field`, or `None` when the field is not part of this record.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// All cell values (field order is not meaningful).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ---------------------------------------------------------------------------
// JobDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The parsed job data file: header order plus all records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDataset {
    /// Header row, in file order.
    pub headers: Vec<String>,
    /// Data rows, first data row first.
    pub records: Vec<Record>,
}

impl JobDataset {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        JobDataset { headers, records }
    }

    /// Whether `field` is one of the header columns.
    pub fn has_field(&self, field: &str) -> bool {
        self.headers.iter().any(|h| h == field)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
