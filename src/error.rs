use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors – raised while reading the backing CSV file
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open job data file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse job data file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("job data file {} has no header row", path.display())]
    MissingHeader { path: PathBuf },

    #[error("job data file {} repeats header column '{field}'", path.display())]
    DuplicateHeader { path: PathBuf, field: String },
}

// ---------------------------------------------------------------------------
// Query errors – raised by catalog lookups
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown field '{field}' (known fields: {})", known.join(", "))]
    UnknownField { field: String, known: Vec<String> },
}
