// Hump Finder Search Engine
// Main API that builds the index once and answers queries against it

use crate::data::{BuildOptions, NameIndex};
use crate::matcher::NameMatcher;
use crate::pattern::parse_query;
use crate::types::{FinderError, IndexStats};
use std::io::Read;
use tracing::trace;

/// Main class finder
///
/// Combines:
/// - Index building (qualified names → sorted simple names)
/// - Query parsing (CamelHump, wildcard, ends-with)
/// - Name matching (stable filter over the index)
///
/// Queries take `&self`, so one finder can be shared between threads.
#[derive(Debug, Clone)]
pub struct ClassFinder {
    /// Sorted simple names, fixed after construction
    index: NameIndex,

    /// Matcher applied per query
    matcher: NameMatcher,
}

impl ClassFinder {
    /// Create a finder from a stream of newline-separated qualified names
    ///
    /// # Returns
    /// `FinderError::NotInitialised` when no stream is given
    pub fn new<R: Read>(stream: Option<R>) -> Result<Self, FinderError> {
        Self::with_options(stream, BuildOptions::default())
    }

    /// Create a finder with explicit build options
    pub fn with_options<R: Read>(
        stream: Option<R>,
        options: BuildOptions,
    ) -> Result<Self, FinderError> {
        let reader = stream.ok_or(FinderError::NotInitialised)?;
        Ok(Self::from_index(NameIndex::from_reader(reader, &options)))
    }

    /// Create a finder from a stream that is known to be present
    pub fn from_reader<R: Read>(reader: R) -> Self {
        Self::from_index(NameIndex::from_reader(reader, &BuildOptions::default()))
    }

    /// Create a finder over an existing index
    pub fn from_index(index: NameIndex) -> Self {
        Self {
            index,
            matcher: NameMatcher::new(),
        }
    }

    /// Find simple names matching a pattern
    ///
    /// # Arguments
    /// * `pattern` - Query (e.g., "FBar", "F*Bar", "NMS "); `None` matches nothing
    ///
    /// # Returns
    /// Matching names in ascending order
    pub fn find_matching(&self, pattern: Option<&str>) -> Vec<String> {
        let query = parse_query(pattern);
        trace!(?pattern, kind = %query.kind, "query parsed");

        self.matcher
            .find(&self.index, &query)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Find matching names, keeping at most `limit` of them
    pub fn find_matching_limit(&self, pattern: Option<&str>, limit: usize) -> Vec<String> {
        let mut results = self.find_matching(pattern);
        results.truncate(limit);
        results
    }

    /// All indexed names in ascending order
    pub fn names(&self) -> &[String] {
        self.index.names()
    }

    /// Statistics about the current index
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
