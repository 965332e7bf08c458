use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::config::CatalogConfig;
use crate::data::filter::{distinct_values, matches_any_field, matches_field, SearchTerm};
use crate::data::loader;
use crate::data::model::{JobDataset, Record};
use crate::error::{CatalogError, LoadError};

// ---------------------------------------------------------------------------
// JobCatalog – lazily loaded, read-only view over the job data file
// ---------------------------------------------------------------------------

/// In-memory job listings backed by a CSV file.
///
/// The file is read on the first query, not at construction. A successful
/// load is cached for the lifetime of the catalog; a failed one is logged and
/// retried by the next query, which meanwhile sees an empty dataset.
pub struct JobCatalog {
    path: PathBuf,
    dataset: OnceCell<JobDataset>,
    load_attempts: AtomicUsize,
}

impl JobCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JobCatalog {
            path: path.into(),
            dataset: OnceCell::new(),
            load_attempts: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.data_file.clone())
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the backing file if that has not succeeded yet.
    ///
    /// Callers that need to tell an empty dataset apart from a broken file
    /// should call this directly; the query methods swallow the error.
    pub fn load(&self) -> Result<&JobDataset, LoadError> {
        if let Some(ds) = self.dataset.get() {
            return Ok(ds);
        }
        self.dataset
            .get_or_try_init(|| {
                let attempt = self.load_attempts.fetch_add(1, Ordering::SeqCst) + 1;
                log::debug!("Loading {} (attempt {attempt})", self.path.display());
                loader::load_csv(&self.path)
            })
            .inspect_err(|err| log::error!("Failed to load job data: {err}"))
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// How many times the backing file has been read.
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::SeqCst)
    }

    /// Header columns in file order; empty while unloaded.
    pub fn fields(&self) -> &[String] {
        self.loaded().map(|ds| ds.headers.as_slice()).unwrap_or(&[])
    }

    /// Every distinct value of `field`, in order of first occurrence.
    pub fn find_all_values(&self, field: &str) -> Result<Vec<String>, CatalogError> {
        let Some(ds) = self.loaded() else {
            return Ok(Vec::new());
        };
        check_field(ds, field)?;
        Ok(distinct_values(&ds.records, field))
    }

    /// All records, in file order.
    pub fn find_all_records(&self) -> &[Record] {
        self.loaded().map(|ds| ds.records.as_slice()).unwrap_or(&[])
    }

    /// Records whose `field` value contains `term`, ignoring case.
    pub fn find_by_field_containing(
        &self,
        field: &str,
        term: &str,
    ) -> Result<Vec<&Record>, CatalogError> {
        let Some(ds) = self.loaded() else {
            return Ok(Vec::new());
        };
        check_field(ds, field)?;

        let term = SearchTerm::new(term);
        let hits: Vec<&Record> = ds
            .records
            .iter()
            .filter(|r| matches_field(r, field, &term))
            .collect();
        log::debug!("Search {field:?}: {} of {} records match", hits.len(), ds.len());
        Ok(hits)
    }

    /// Records with at least one value containing `term`, ignoring case.
    /// Each record appears at most once.
    pub fn find_by_any_field_containing(&self, term: &str) -> Vec<&Record> {
        let Some(ds) = self.loaded() else {
            return Vec::new();
        };

        let term = SearchTerm::new(term);
        let hits: Vec<&Record> = ds
            .records
            .iter()
            .filter(|r| matches_any_field(r, &term))
            .collect();
        log::debug!("Search all fields: {} of {} records match", hits.len(), ds.len());
        hits
    }

    fn loaded(&self) -> Option<&JobDataset> {
        match self.load() {
            Ok(ds) => Some(ds),
            Err(_) => {
                log::warn!("Job catalog is not loaded; returning no results");
                None
            }
        }
    }
}

fn check_field(ds: &JobDataset, field: &str) -> Result<(), CatalogError> {
    if ds.has_field(field) {
        Ok(())
    } else {
        Err(CatalogError::UnknownField {
            field: field.to_string(),
            known: ds.headers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::thread;

    use tempfile::TempDir;

    use super::*;

    const SCENARIO: &str = "employer,core competency\n\
                            LaunchCode,Teaching\n\
                            Acme,Engineering\n\
                            Acme Labs,Engineering\n";

    fn catalog_with(contents: &str) -> (TempDir, JobCatalog) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job_data.csv");
        fs::write(&path, contents).unwrap();
        (dir, JobCatalog::new(path))
    }

    fn employers(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get("employer").unwrap().to_string())
            .collect()
    }

    #[test]
    fn construction_does_not_touch_the_file() {
        let (_dir, catalog) = catalog_with(SCENARIO);
        assert!(!catalog.is_loaded());
        assert_eq!(catalog.load_attempts(), 0);
    }

    #[test]
    fn scenario_queries() {
        let (_dir, catalog) = catalog_with(SCENARIO);

        assert_eq!(
            catalog.find_all_values("employer").unwrap(),
            vec!["LaunchCode", "Acme", "Acme Labs"]
        );

        let acme = catalog.find_by_field_containing("employer", "acme").unwrap();
        assert_eq!(employers(&acme), vec!["Acme", "Acme Labs"]);

        let ing = catalog.find_by_any_field_containing("ing");
        assert_eq!(employers(&ing), vec!["LaunchCode", "Acme", "Acme Labs"]);

        assert!(catalog
            .find_by_field_containing("employer", "zzz")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn file_is_read_once_across_queries() {
        let (_dir, catalog) = catalog_with(SCENARIO);

        let first = catalog.find_all_records().to_vec();
        for _ in 0..5 {
            catalog.find_all_values("core competency").unwrap();
            catalog.find_by_any_field_containing("a");
            assert_eq!(catalog.find_all_records(), first.as_slice());
        }

        assert!(catalog.is_loaded());
        assert_eq!(catalog.load_attempts(), 1);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn search_ignores_case_of_term_and_value() {
        let (_dir, catalog) =
            catalog_with("employer,location\n\"Enterprise Holdings, Inc\",St. Louis\n");
        for term in ["enterprise", "ENTERPRISE", "Enterprise"] {
            let hits = catalog.find_by_field_containing("employer", term).unwrap();
            assert_eq!(hits.len(), 1, "{term}");
        }
    }

    #[test]
    fn empty_term_matches_every_record() {
        let (_dir, catalog) = catalog_with(SCENARIO);
        let hits = catalog.find_by_field_containing("employer", "").unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(catalog.find_by_any_field_containing("").len(), 3);
    }

    #[test]
    fn record_matching_several_fields_is_listed_once() {
        let (_dir, catalog) = catalog_with(
            "name,employer,core competency\n\
             Java Dev,Java Shop,Java\n\
             Tester,Acme,QA\n",
        );
        let hits = catalog.find_by_any_field_containing("java");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get("employer"), Some("Java Shop"));
    }

    #[test]
    fn matches_preserve_file_order() {
        let (_dir, catalog) = catalog_with(
            "employer,location\n\
             Zeta,Remote\n\
             Alpha,St. Louis\n\
             Mid,Remote\n",
        );
        let hits = catalog.find_by_field_containing("location", "remote").unwrap();
        assert_eq!(employers(&hits), vec!["Zeta", "Mid"]);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let (_dir, catalog) = catalog_with(SCENARIO);

        let err = catalog.find_all_values("salary").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownField {
                field: "salary".to_string(),
                known: vec!["employer".to_string(), "core competency".to_string()],
            }
        );
        assert!(catalog.find_by_field_containing("Employer", "acme").is_err());
    }

    #[test]
    fn failed_load_returns_empty_results_and_retries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job_data.csv");
        let catalog = JobCatalog::new(&path);

        assert!(catalog.find_all_records().is_empty());
        assert!(catalog.find_all_values("employer").unwrap().is_empty());
        assert!(catalog
            .find_by_field_containing("employer", "acme")
            .unwrap()
            .is_empty());
        assert!(catalog.find_by_any_field_containing("acme").is_empty());
        assert!(catalog.fields().is_empty());
        assert!(!catalog.is_loaded());
        assert_eq!(catalog.load_attempts(), 5);
        assert!(matches!(catalog.load(), Err(LoadError::Open { .. })));

        fs::write(&path, SCENARIO).unwrap();
        assert_eq!(catalog.find_all_records().len(), 3);
        assert!(catalog.is_loaded());
        let attempts = catalog.load_attempts();
        assert_eq!(attempts, 7);

        catalog.find_all_records();
        assert_eq!(catalog.load_attempts(), attempts);
    }

    #[test]
    fn malformed_file_is_reported_by_load() {
        let (_dir, catalog) = catalog_with("employer,location\nAcme\n");
        assert!(matches!(catalog.load(), Err(LoadError::Parse { .. })));
        assert!(catalog.find_all_records().is_empty());
    }

    #[test]
    fn concurrent_first_queries_load_once() {
        let (_dir, catalog) = catalog_with(SCENARIO);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| assert_eq!(catalog.find_all_records().len(), 3));
            }
        });
        assert_eq!(catalog.load_attempts(), 1);
    }

    #[test]
    fn fields_follow_header_order() {
        let (_dir, catalog) = catalog_with(SCENARIO);
        assert_eq!(catalog.fields(), ["employer", "core competency"]);
    }
}
