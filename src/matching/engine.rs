use serde::Serialize;
use tracing::debug;

use crate::catalog::store::MedicationCatalog;
use crate::core::medication::MedicationRecord;
use crate::matching::scoring::rank_by_similarity;

/// Default number of "did you mean" suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Default minimum similarity for a suggestion
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Configuration for the medicine finder
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Maximum number of suggestions returned on a miss
    pub suggestion_limit: usize,
    /// Minimum similarity (0-1) for a name to be suggested
    pub similarity_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Result of looking a name up in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum LookupOutcome<'a> {
    /// Exact (case-insensitive) match, with alternatives sharing its active ingredient
    Found {
        record: &'a MedicationRecord,
        max_price: Option<f64>,
        alternatives: Vec<&'a MedicationRecord>,
    },
    /// No exact match; closest names, best first
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },
}

/// Searches a catalog by name and finds interchangeable medications.
///
/// Every query scans the catalog in order; there is no index.
pub struct MedicineFinder<'a> {
    catalog: &'a MedicationCatalog,
    config: MatcherConfig,
}

impl<'a> MedicineFinder<'a> {
    /// Create a finder with default configuration
    pub fn new(catalog: &'a MedicationCatalog) -> Self {
        Self {
            catalog,
            config: MatcherConfig::default(),
        }
    }

    /// Create a finder with custom configuration
    pub fn with_config(catalog: &'a MedicationCatalog, config: MatcherConfig) -> Self {
        Self { catalog, config }
    }

    /// Case-insensitive exact lookup; the first record in catalog order wins.
    ///
    /// Callers reject empty names before calling.
    pub fn find(&self, name: &str) -> Option<&'a MedicationRecord> {
        self.catalog.iter().find(|record| record.has_name(name))
    }

    /// Names similar to `name`, using the configured limit and threshold
    pub fn suggest(&self, name: &str) -> Vec<String> {
        self.suggest_with(
            name,
            self.config.suggestion_limit,
            self.config.similarity_threshold,
        )
    }

    /// Up to `limit` catalog names scoring at least `threshold` against
    /// `name`, best first. Ties keep catalog order.
    pub fn suggest_with(&self, name: &str, limit: usize, threshold: f64) -> Vec<String> {
        let ranked = rank_by_similarity(name, self.catalog.names(), threshold);

        debug!(
            query = name,
            candidates = ranked.len(),
            "Ranked suggestions"
        );

        ranked
            .into_iter()
            .take(limit)
            .map(|scored| scored.name.to_string())
            .collect()
    }

    /// Every other record sharing `original`'s active ingredient, within
    /// `max_price` when one is given. Catalog order is preserved.
    pub fn find_alternatives(
        &self,
        original: &MedicationRecord,
        max_price: Option<f64>,
    ) -> Vec<&'a MedicationRecord> {
        self.catalog
            .iter()
            .filter(|candidate| candidate.name != original.name)
            .filter(|candidate| is_alternative(original, candidate, max_price))
            .collect()
    }

    /// Exact lookup followed by alternatives on a hit, or suggestions on a miss
    pub fn lookup(&self, name: &str, max_price: Option<f64>) -> LookupOutcome<'a> {
        match self.find(name) {
            Some(record) => {
                let alternatives = self.find_alternatives(record, max_price);
                debug!(
                    query = name,
                    found = %record.name,
                    alternatives = alternatives.len(),
                    "Lookup hit"
                );
                LookupOutcome::Found {
                    record,
                    max_price,
                    alternatives,
                }
            }
            None => {
                let suggestions = self.suggest(name);
                debug!(query = name, suggestions = suggestions.len(), "Lookup miss");
                LookupOutcome::NotFound {
                    query: name.to_string(),
                    suggestions,
                }
            }
        }
    }
}

fn is_alternative(
    original: &MedicationRecord,
    candidate: &MedicationRecord,
    max_price: Option<f64>,
) -> bool {
    let same_ingredient = original.active_ingredient == candidate.active_ingredient;
    let within_budget = max_price.map_or(true, |max| candidate.price <= max);
    same_ingredient && within_budget
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Category;

    fn make_test_catalog() -> MedicationCatalog {
        MedicationCatalog::sample().unwrap()
    }

    fn names<'a>(records: &[&'a MedicationRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        let lower = finder.find("panadol").unwrap();
        let title = finder.find("Panadol").unwrap();
        let upper = finder.find("PANADOL").unwrap();

        assert_eq!(lower, title);
        assert_eq!(title, upper);
        assert_eq!(lower.name, "Panadol");
    }

    #[test]
    fn test_find_missing_returns_none() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);
        assert!(finder.find("Ibuprofen").is_none());
    }

    #[test]
    fn test_find_first_duplicate_wins() {
        let catalog = MedicationCatalog::from_records(vec![
            MedicationRecord::new("Panadol", "Paracetamol", Category::PainReliever, 2.5),
            MedicationRecord::new("PANADOL", "Paracetamol", Category::PainReliever, 9.0),
        ]);
        let finder = MedicineFinder::new(&catalog);

        let found = finder.find("panadol").unwrap();
        assert!((found.price - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_suggest_typo() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        let suggestions = finder.suggest("Paracetmol");
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0], "Paracetamol");
    }

    #[test]
    fn test_suggest_nothing_close() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);
        assert!(finder.suggest("Xyzzyqwert").is_empty());
    }

    #[test]
    fn test_suggest_exact_name_still_works() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        let suggestions = finder.suggest("Klavox");
        assert_eq!(suggestions.first().map(String::as_str), Some("Klavox"));
    }

    #[test]
    fn test_suggest_respects_limit() {
        let catalog = MedicationCatalog::from_records(
            ["Amox", "Amoxa", "Amoxb", "Amoxc", "Amoxd"]
                .into_iter()
                .map(|n| MedicationRecord::new(n, "Amoxicillin", Category::Antibiotic, 1.0))
                .collect(),
        );
        let finder = MedicineFinder::new(&catalog);

        assert_eq!(finder.suggest("Amoxx").len(), DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(finder.suggest_with("Amoxx", 10, 0.5).len(), 5);
        assert!(finder.suggest_with("Amoxx", 10, 1.0).is_empty());
    }

    #[test]
    fn test_suggest_uses_config() {
        let catalog = make_test_catalog();
        let config = MatcherConfig {
            suggestion_limit: 1,
            similarity_threshold: 0.2,
        };
        let finder = MedicineFinder::with_config(&catalog, config);
        assert_eq!(finder.suggest("Paracetmol").len(), 1);
    }

    #[test]
    fn test_find_alternatives_no_ceiling() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        let panadol = finder.find("Panadol").unwrap();
        let alternatives = finder.find_alternatives(panadol, None);
        assert_eq!(names(&alternatives), vec!["Paracetamol"]);
    }

    #[test]
    fn test_find_alternatives_ceiling_excludes_expensive() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        let panadol = finder.find("Panadol").unwrap();
        assert!(finder.find_alternatives(panadol, Some(1.0)).is_empty());
        // Ceiling is inclusive
        assert_eq!(
            names(&finder.find_alternatives(panadol, Some(3.4))),
            vec!["Paracetamol"]
        );
    }

    #[test]
    fn test_find_alternatives_keeps_catalog_order() {
        let catalog = MedicationCatalog::from_records(vec![
            MedicationRecord::new("Zeta", "Metformin", Category::Antidiabetic, 9.0),
            MedicationRecord::new("Glucophage", "Metformin", Category::Antidiabetic, 4.0),
            MedicationRecord::new("Alpha", "Metformin", Category::Antidiabetic, 1.0),
            MedicationRecord::new("Panadol", "Paracetamol", Category::PainReliever, 1.0),
        ]);
        let finder = MedicineFinder::new(&catalog);

        let original = finder.find("glucophage").unwrap();
        let alternatives = finder.find_alternatives(original, None);
        assert_eq!(names(&alternatives), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_find_alternatives_ingredient_is_case_sensitive() {
        let catalog = MedicationCatalog::from_records(vec![
            MedicationRecord::new("Augmentin", "Amoxicillin", Category::Antibiotic, 5.5),
            MedicationRecord::new("Amoxil", "amoxicillin", Category::Antibiotic, 3.0),
        ]);
        let finder = MedicineFinder::new(&catalog);

        let original = finder.find("Augmentin").unwrap();
        assert!(finder.find_alternatives(original, None).is_empty());
    }

    #[test]
    fn test_lookup_found() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        match finder.lookup("augmentin", Some(6.0)) {
            LookupOutcome::Found {
                record,
                max_price,
                alternatives,
            } => {
                assert_eq!(record.name, "Augmentin");
                assert_eq!(max_price, Some(6.0));
                assert_eq!(names(&alternatives), vec!["Klavox"]);
            }
            other => panic!("Expected a hit, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        match finder.lookup("Klavoks", None) {
            LookupOutcome::NotFound { query, suggestions } => {
                assert_eq!(query, "Klavoks");
                assert_eq!(suggestions, vec!["Klavox".to_string()]);
            }
            other => panic!("Expected a miss, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);
        let panadol = finder.find("Panadol").unwrap();

        assert_eq!(finder.find("Panadol"), finder.find("Panadol"));
        assert_eq!(finder.suggest("Paracetmol"), finder.suggest("Paracetmol"));
        assert_eq!(
            finder.find_alternatives(panadol, Some(5.0)),
            finder.find_alternatives(panadol, Some(5.0))
        );
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_lookup_serializes_with_result_tag() {
        let catalog = make_test_catalog();
        let finder = MedicineFinder::new(&catalog);

        let json = serde_json::to_value(finder.lookup("Panadol", None)).unwrap();
        assert_eq!(json["result"], "found");
        assert_eq!(json["record"]["name"], "Panadol");
        assert_eq!(json["alternatives"][0]["name"], "Paracetamol");

        let json = serde_json::to_value(finder.lookup("Nothing", None)).unwrap();
        assert_eq!(json["result"], "not_found");
    }
}
