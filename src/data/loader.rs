use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

use super::model::{JobDataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the job data file at `path`.
///
/// CSV layout (RFC 4180): the first row names the columns, every following
/// row has exactly one cell per column. Quoted cells may contain commas,
/// doubled quotes and line breaks.
pub fn load_csv(path: &Path) -> Result<JobDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_csv(file, path)?;

    if dataset.is_empty() {
        log::warn!("{} has a header row but no job records", path.display());
    }
    log::info!(
        "Loaded {} job records ({} columns) from {}",
        dataset.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV text from any reader. `origin` is only used in error messages.
pub fn parse_csv<R: Read>(input: R, origin: &Path) -> Result<JobDataset, LoadError> {
    let parse_err = |source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    };

    // Defaults already give RFC 4180 quoting and reject ragged rows.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(LoadError::MissingHeader {
            path: origin.to_path_buf(),
        });
    }
    check_unique_headers(&headers, origin)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(parse_err)?;
        records.push(Record::from_cells(&headers, row.iter()));
    }

    Ok(JobDataset::new(headers, records))
}

fn check_unique_headers(headers: &[String], origin: &Path) -> Result<(), LoadError> {
    let mut seen = BTreeSet::new();
    for h in headers {
        if !seen.insert(h.as_str()) {
            return Err(LoadError::DuplicateHeader {
                path: origin.to_path_buf(),
                field: h.clone(),
            });
        }
    }
    Ok(())
}
