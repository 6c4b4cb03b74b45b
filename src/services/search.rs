use std::collections::HashSet;

use crate::models::CatalogRow;

/// Related-item expansion never returns more than this many rows.
const RELATED_CAP: usize = 10;

/// Outcome of one search step
///
/// The engine is a small state machine: a substring pass either finds rows
/// or falls back to fuzzy candidates, which the caller resolves with a
/// 1-based selection. `Aborted` is the user-facing abstained state, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Matched rows plus related-item expansion
    Found(SearchResults),
    /// No substring hit; candidate titles awaiting disambiguation
    Candidates(Vec<String>),
    /// Nothing matched, or the caller declined/supplied an invalid selection
    Aborted,
}

/// Matched rows and their related-item expansion
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub matches: Vec<CatalogRow>,
    pub related: Vec<CatalogRow>,
}

/// Fuzzy movie search over the unified multi-genre catalog
pub struct SearchEngine<'a> {
    catalog: &'a [CatalogRow],
    fuzzy_limit: usize,
    fuzzy_cutoff: f64,
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a [CatalogRow], fuzzy_limit: usize, fuzzy_cutoff: f64) -> Self {
        Self {
            catalog,
            fuzzy_limit,
            fuzzy_cutoff,
        }
    }

    /// Runs the substring pass, falling back to fuzzy candidates
    ///
    /// The query is matched case-insensitively as a substring against every
    /// title. Any hit short-circuits to result assembly; otherwise up to
    /// `fuzzy_limit` distinct titles with similarity >= `fuzzy_cutoff` are
    /// offered for disambiguation.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let query = query.trim().to_lowercase();

        let matches: Vec<CatalogRow> = self
            .catalog
            .iter()
            .filter(|row| row.title.to_lowercase().contains(&query))
            .cloned()
            .collect();

        if !matches.is_empty() {
            tracing::debug!(query = %query, hits = matches.len(), "Substring match");
            return SearchOutcome::Found(self.assemble(matches));
        }

        let candidates = self.closest_titles(&query);
        if candidates.is_empty() {
            tracing::debug!(query = %query, "No match and no fuzzy candidates");
            SearchOutcome::Aborted
        } else {
            tracing::debug!(query = %query, candidates = candidates.len(), "Fuzzy fallback");
            SearchOutcome::Candidates(candidates)
        }
    }

    /// Resolves a 1-based candidate selection from the fuzzy fallback
    ///
    /// The chosen candidate is re-run as a case-insensitive equality match
    /// (not substring). Non-numeric or out-of-range selections abort.
    pub fn resolve(&self, candidates: &[String], selection: &str) -> SearchOutcome {
        let index = match selection.trim().parse::<usize>() {
            Ok(i) if i >= 1 && i <= candidates.len() => i - 1,
            _ => return SearchOutcome::Aborted,
        };

        let chosen = candidates[index].to_lowercase();
        let matches: Vec<CatalogRow> = self
            .catalog
            .iter()
            .filter(|row| row.title.to_lowercase() == chosen)
            .cloned()
            .collect();

        if matches.is_empty() {
            SearchOutcome::Aborted
        } else {
            SearchOutcome::Found(self.assemble(matches))
        }
    }

    /// Distinct titles closest to the query, best first
    fn closest_titles(&self, query: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut scored: Vec<(String, f64)> = Vec::new();

        for row in self.catalog {
            let lowered = row.title.to_lowercase();
            // Matching is case-insensitive, so titles differing only in
            // case collapse to one candidate.
            if !seen.insert(lowered.clone()) {
                continue;
            }
            let similarity = strsim::normalized_levenshtein(query, &lowered);
            if similarity >= self.fuzzy_cutoff {
                scored.push((row.title.clone(), similarity));
            }
        }

        // Stable sort keeps catalog order among equally similar titles.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.fuzzy_limit);
        scored.into_iter().map(|(title, _)| title).collect()
    }

    /// Assembles matched rows and their related-item expansion
    ///
    /// Relations are seeded from the first matched row (the anchor): every
    /// catalog row sharing its genre or director qualifies, minus titles
    /// already in the match set, capped at `RELATED_CAP`.
    fn assemble(&self, matches: Vec<CatalogRow>) -> SearchResults {
        let anchor = &matches[0];
        let matched_titles: HashSet<&str> = matches.iter().map(|m| m.title.as_str()).collect();

        let related: Vec<CatalogRow> = self
            .catalog
            .iter()
            .filter(|row| {
                let same_genre = row.genre == anchor.genre;
                let same_director = match (&anchor.director, &row.director) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                };
                same_genre || same_director
            })
            .filter(|row| !matched_titles.contains(row.title.as_str()))
            .take(RELATED_CAP)
            .cloned()
            .collect();

        SearchResults { matches, related }
    }
}
