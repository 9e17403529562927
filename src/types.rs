// Hump Finder Type Definitions
// Core types for query classification, errors and index statistics

use thiserror::Error;

/// Query kinds, one per matching rule
///
/// Rules are tried in declaration order; the first one that applies decides
/// how the whole query is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Absent or zero-length pattern: nothing matches
    Empty,

    /// Exactly `*`: every indexed name, unfiltered
    All,

    /// Contains `*` but is longer than one character
    /// Example: "F*Bar" → evaluated as "FBar"
    Wildcard,

    /// Ends with a literal space: CamelHump uppercase stage plus an ends-with check
    /// Example: "NMS " → names containing N, M, S
    EndsWith,

    /// Plain CamelHump query
    /// Example: "FBar" → names containing F, B, a, r
    CamelHump,
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKind::Empty => write!(f, "Empty"),
            QueryKind::All => write!(f, "All"),
            QueryKind::Wildcard => write!(f, "Wildcard"),
            QueryKind::EndsWith => write!(f, "EndsWith"),
            QueryKind::CamelHump => write!(f, "CamelHump"),
        }
    }
}

/// Parsed query, ready to be applied to every name in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Detected query kind
    pub kind: QueryKind,

    /// Uppercase letters a name must contain, in pattern order
    pub upper: Vec<char>,

    /// Lowercase letters a name must contain, in pattern order
    pub lower: Vec<char>,

    /// Required name ending (`EndsWith` only)
    pub suffix: Option<String>,
}

impl ParsedQuery {
    /// Query that matches nothing
    pub fn empty() -> Self {
        Self::of_kind(QueryKind::Empty)
    }

    /// Query that matches every name
    pub fn all() -> Self {
        Self::of_kind(QueryKind::All)
    }

    fn of_kind(kind: QueryKind) -> Self {
        Self {
            kind,
            upper: Vec::new(),
            lower: Vec::new(),
            suffix: None,
        }
    }
}

/// Finder errors
#[derive(Debug, Error)]
pub enum FinderError {
    /// No input stream was supplied at construction
    #[error("Class finder not initialised")]
    NotInitialised,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Number of entries, duplicates included
    pub total: usize,

    /// Number of distinct simple names
    pub distinct: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_kind_display() {
        assert_eq!(QueryKind::Empty.to_string(), "Empty");
        assert_eq!(QueryKind::Wildcard.to_string(), "Wildcard");
        assert_eq!(QueryKind::EndsWith.to_string(), "EndsWith");
    }

    #[test]
    fn test_empty_and_all_queries() {
        let empty = ParsedQuery::empty();
        assert_eq!(empty.kind, QueryKind::Empty);
        assert!(empty.upper.is_empty() && empty.lower.is_empty());

        let all = ParsedQuery::all();
        assert_eq!(all.kind, QueryKind::All);
        assert!(all.suffix.is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FinderError::NotInitialised.to_string(),
            "Class finder not initialised"
        );

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: FinderError = io.into();
        assert!(matches!(err, FinderError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
