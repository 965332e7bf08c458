use super::model::Record;

// ---------------------------------------------------------------------------
// Search predicates: case-insensitive substring matching
// ---------------------------------------------------------------------------

/// A lowercased search term, prepared once per query.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        SearchTerm {
            needle: term.to_lowercase(),
        }
    }

    /// Whether `value`, lowercased, contains the term. The empty term matches
    /// everything.
    pub fn matches(&self, value: &str) -> bool {
        self.needle.is_empty() || value.to_lowercase().contains(&self.needle)
    }
}

/// Whether the record's `field` value contains the term.
/// A record without `field` never matches.
pub fn matches_field(record: &Record, field: &str, term: &SearchTerm) -> bool {
    record.get(field).is_some_and(|v| term.matches(v))
}

/// Whether any value of the record contains the term.
pub fn matches_any_field(record: &Record, term: &SearchTerm) -> bool {
    record.values().any(|v| term.matches(v))
}

/// Distinct values of `field`, in order of first occurrence.
pub fn distinct_values<'a, I>(records: I, field: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut values: Vec<String> = Vec::new();
    for value in records.into_iter().filter_map(|r| r.get(field)) {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employer: &str, competency: &str) -> Record {
        let headers = vec!["employer".to_string(), "core competency".to_string()];
        Record::from_cells(&headers, [employer, competency])
    }

    #[test]
    fn term_matching_ignores_case() {
        let r = record("Enterprise Holdings, Inc", "Java");
        for term in ["enterprise", "ENTERPRISE", "Enterprise", "holdings, inc"] {
            assert!(matches_field(&r, "employer", &SearchTerm::new(term)), "{term}");
        }
        assert!(!matches_field(&r, "employer", &SearchTerm::new("java")));
    }

    #[test]
    fn empty_term_matches_empty_values() {
        let r = record("", "");
        assert!(matches_field(&r, "employer", &SearchTerm::new("")));
        assert!(matches_any_field(&r, &SearchTerm::new("")));
    }

    #[test]
    fn unknown_field_never_matches() {
        let r = record("Acme", "Engineering");
        assert!(!matches_field(&r, "location", &SearchTerm::new("")));
    }

    #[test]
    fn any_field_checks_every_value() {
        let r = record("Acme", "Engineering");
        assert!(matches_any_field(&r, &SearchTerm::new("ING")));
        assert!(matches_any_field(&r, &SearchTerm::new("acm")));
        assert!(!matches_any_field(&r, &SearchTerm::new("launch")));
    }

    #[test]
    fn distinct_values_keep_first_occurrence_order() {
        let rows = vec![
            record("LaunchCode", "Teaching"),
            record("Acme", "Engineering"),
            record("LaunchCode", "Ruby"),
            record("Acme Labs", "Engineering"),
        ];
        assert_eq!(
            distinct_values(&rows, "employer"),
            vec!["LaunchCode", "Acme", "Acme Labs"]
        );
        assert_eq!(
            distinct_values(&rows, "core competency"),
            vec!["Teaching", "Engineering", "Ruby"]
        );
    }
}
