use std::collections::HashSet;

/// Similarity between two names in `[0, 1]`.
///
/// Normalized Levenshtein distance: `1 - distance / max_len`. Symmetric,
/// case-sensitive, and exactly 1.0 only for identical strings.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// A candidate name with its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredName<'a> {
    pub name: &'a str,
    pub score: f64,
}

/// Score every candidate against `query` and keep those scoring at least
/// `threshold`, best first.
///
/// The sort is stable, so equal scores keep candidate order. A name that
/// appears more than once is scored once, at its first position.
pub fn rank_by_similarity<'a, I>(query: &str, candidates: I, threshold: f64) -> Vec<ScoredName<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();

    let mut scored: Vec<ScoredName<'a>> = candidates
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(|name| ScoredName {
            name,
            score: similarity(query, name),
        })
        .filter(|s| s.score >= threshold)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
