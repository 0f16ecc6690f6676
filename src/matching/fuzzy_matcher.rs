//! Fuzzy name matching for contact lookup.
//!
//! Scores stored contact names against a free-text query:
//! - Exact match (case- and whitespace-insensitive)
//! - Substring match, weighted by how much of the name the query covers
//! - Levenshtein similarity for typos

/// A matched contact name and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The stored contact name
    pub name: String,

    /// Confidence score (0-95, where 95 is an exact match)
    pub confidence: u8,
}

/// Contact name matcher with fuzzy matching.
#[derive(Debug, Default)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find names matching `query`.
    ///
    /// # Returns
    /// At most `max_results` matches scoring at least `min_confidence`,
    /// sorted by confidence (highest first), then by name.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        names: impl IntoIterator<Item = &'a str>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<NameMatch> {
        let query = Self::normalize_name(query);

        let mut results: Vec<NameMatch> = names
            .into_iter()
            .filter_map(|name| {
                let confidence =
                    Self::calculate_fuzzy_score(&query, &Self::normalize_name(name));
                (confidence > 0 && confidence >= min_confidence).then(|| NameMatch {
                    name: name.to_string(),
                    confidence,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        results.truncate(max_results);

        tracing::debug!(query = %query, matches = results.len(), "Name search completed");
        results
    }

    /// Calculate fuzzy match score using substring matching and Levenshtein distance.
    ///
    /// Returns a confidence score from 0-95.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        // Substring: 10-95 depending on coverage
        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
