use std::path::PathBuf;

/// Job data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "resources/job_data.csv";

/// Environment variable overriding [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_ENV: &str = "TECHJOBS_DATA";

/// Where the catalog reads its data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl CatalogConfig {
    /// Resolve the data file: explicit path, then `TECHJOBS_DATA`, then the
    /// default.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
    }

    fn resolve_with(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        let data_file = explicit
            .or(from_env)
            .filter(|p| !p.as_os_str().is_empty());
        match data_file {
            Some(data_file) => Self { data_file },
            None => Self::default(),
        }
    }
}
