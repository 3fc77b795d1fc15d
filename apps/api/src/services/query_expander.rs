use crate::services::templates::{lookup, STOP_WORDS, SYNONYM_TABLE, THEME_TABLE};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

const MAX_KEYWORDS: usize = 10;
const MIN_TERM_CHARS: usize = 3;

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Where a query string in the plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuerySource {
    Original,
    Keyword,
    Theme,
    Synonym,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedQuery {
    pub text: String,
    pub source: QuerySource,
}

/// Everything derived from one raw description before any network call.
#[derive(Debug, Clone)]
pub struct ExpandedQuery {
    pub original_query: String,
    pub keywords: Vec<String>,
    pub themes: Vec<String>,
    pub synonyms: Vec<String>,
}

impl ExpandedQuery {
    pub fn from_query(query: &str) -> Self {
        let expanded = Self {
            original_query: query.to_string(),
            keywords: extract_keywords(query),
            themes: theme_keywords(query),
            synonyms: synonyms(query),
        };

        debug!(
            keywords = ?expanded.keywords,
            themes = ?expanded.themes,
            synonyms = ?expanded.synonyms,
            "Expanded query '{}'",
            query
        );

        expanded
    }

    /// Ordered query strings to execute: original, keywords, themes, synonyms.
    ///
    /// A string that already appears earlier in the plan is not repeated.
    pub fn query_plan(&self) -> Vec<PlannedQuery> {
        let keywords = self
            .keywords
            .iter()
            .filter(|k| k.chars().count() >= MIN_TERM_CHARS)
            .map(|k| (k, QuerySource::Keyword));
        let themes = self.themes.iter().map(|t| (t, QuerySource::Theme));
        let synonyms = self.synonyms.iter().map(|s| (s, QuerySource::Synonym));

        let candidates = std::iter::once((&self.original_query, QuerySource::Original))
            .chain(keywords)
            .chain(themes)
            .chain(synonyms);

        let mut seen = HashSet::new();
        let mut plan = Vec::new();
        for (text, source) in candidates {
            if seen.insert(text.as_str()) {
                plan.push(PlannedQuery {
                    text: text.clone(),
                    source,
                });
            }
        }

        plan
    }
}

/// Content-bearing terms of a description, in their original order.
pub fn extract_keywords(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TERM_CHARS && !STOP_WORDS.contains(word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Titles and franchise terms suggested by descriptive phrases in the query.
pub fn theme_keywords(description: &str) -> Vec<String> {
    lookup(THEME_TABLE, description)
}

/// Lexical synonyms of common words in the query.
pub fn synonyms(query: &str) -> Vec<String> {
    lookup(SYNONYM_TABLE, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_removed() {
        let keywords = extract_keywords("A boy in the forest");
        assert_eq!(keywords, vec!["boy".to_string(), "forest".to_string()]);
    }

    #[test]
    fn test_punctuation_stripped() {
        let keywords = extract_keywords("Toys come alive, when their owner leaves!");
        assert_eq!(keywords, vec!["toys", "come", "alive", "owner", "leaves"]);
    }

    #[test]
    fn test_keyword_limit() {
        let description = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let keywords = extract_keywords(description);

        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords.first().map(String::as_str), Some("alpha"));
        assert_eq!(keywords.last().map(String::as_str), Some("juliet"));
    }

    #[test]
    fn test_short_words_dropped() {
        assert!(extract_keywords("an ox by me").is_empty());
    }

    #[test]
    fn test_iceberg_maps_to_titanic() {
        assert!(theme_keywords("something about an iceberg").contains(&"titanic".to_string()));
    }

    #[test]
    fn test_synonyms_for_ship() {
        let found = synonyms("A Ship at dawn");
        assert_eq!(found, vec!["vessel", "boat", "cruise"]);
    }

    #[test]
    fn test_query_plan_order() {
        let expanded = ExpandedQuery::from_query("ship hits an iceberg and sinks");
        let plan = expanded.query_plan();

        assert_eq!(plan[0].text, "ship hits an iceberg and sinks");
        assert_eq!(plan[0].source, QuerySource::Original);
        assert_eq!(plan[1].text, "ship");
        assert_eq!(plan[1].source, QuerySource::Keyword);
        assert!(plan
            .iter()
            .any(|q| q.text == "titanic" && q.source == QuerySource::Theme));

        // Theme and synonym tables both produce "boat"; it is only planned once
        assert_eq!(plan.iter().filter(|q| q.text == "boat").count(), 1);

        let first_theme = plan.iter().position(|q| q.source == QuerySource::Theme);
        let last_keyword = plan.iter().rposition(|q| q.source == QuerySource::Keyword);
        assert!(last_keyword < first_theme);
    }

    #[test]
    fn test_query_plan_without_expansions() {
        let expanded = ExpandedQuery::from_query("quiet afternoon tea");
        let texts: Vec<_> = expanded.query_plan().into_iter().map(|q| q.text).collect();

        assert_eq!(texts, vec!["quiet afternoon tea", "quiet", "afternoon", "tea"]);
    }
}
