// Hump Finder Name Matcher
// Filters the name index with a parsed query

use crate::data::NameIndex;
use crate::types::{ParsedQuery, QueryKind};

/// Stateless matcher over a [`NameIndex`]
///
/// Every call reads the full index and returns a fresh result; the index is
/// never narrowed by a previous query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find names matching the query, in index order
    ///
    /// # Example
    /// ```
    /// # use hump_finder::data::NameIndex;
    /// # use hump_finder::matcher::NameMatcher;
    /// # use hump_finder::pattern::parse_query;
    /// let index = NameIndex::from_records(["c.d.FooBar", "com.LooBarBaz"]);
    /// let found = NameMatcher::new().find(&index, &parse_query(Some("FBar")));
    /// assert_eq!(found, vec!["FooBar"]);
    /// ```
    pub fn find<'a>(&self, index: &'a NameIndex, query: &ParsedQuery) -> Vec<&'a str> {
        match query.kind {
            QueryKind::Empty => Vec::new(),
            QueryKind::All => index.names().iter().map(String::as_str).collect(),
            _ => index
                .names()
                .iter()
                .map(String::as_str)
                .filter(|name| matches(name, query))
                .collect(),
        }
    }
}

/// Check a single name against a query
///
/// Every required uppercase and lowercase letter must occur in the name
/// (case-sensitive), and the name must end with the query suffix if it has one.
pub fn matches(name: &str, query: &ParsedQuery) -> bool {
    match query.kind {
        QueryKind::Empty => false,
        QueryKind::All => true,
        _ => {
            query.upper.iter().all(|c| name.contains(*c))
                && query.lower.iter().all(|c| name.contains(*c))
                && query
                    .suffix
                    .as_deref()
                    .map_or(true, |suffix| name.ends_with(suffix))
        }
    }
}
