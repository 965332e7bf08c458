/// Data layer: core types, loading, and search predicates.
///
/// Architecture:
/// ```text
///  job_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → JobDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ JobDataset │  headers + Vec<Record>
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  case-insensitive matching, distinct values
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
