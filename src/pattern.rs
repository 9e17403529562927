// Hump Finder Pattern Parser
// Classifies user queries and precomputes the letters a name must contain

use crate::types::{ParsedQuery, QueryKind};

/// Wildcard character, removed before letter checks
pub const WILDCARD: char = '*';

/// Parse a user query and detect its kind
///
/// # Rules (first applicable wins)
/// - Absent or empty → `Empty`
/// - Exactly `*` → `All`
/// - Contains `*` → `Wildcard`, letters taken from the pattern without `*`
/// - Ends with a space → `EndsWith`, uppercase letters plus a suffix
/// - Anything else → `CamelHump`, uppercase then lowercase letters
///
/// Chained containment filters are order-independent, so a query reduces to
/// two sets of required letters checked once per name.
///
/// # Examples
/// ```
/// # use hump_finder::pattern::parse_query;
/// # use hump_finder::types::QueryKind;
/// let parsed = parse_query(Some("FBar"));
/// assert_eq!(parsed.kind, QueryKind::CamelHump);
/// assert_eq!(parsed.upper, vec!['F', 'B']);
/// assert_eq!(parsed.lower, vec!['a', 'r']);
///
/// let parsed = parse_query(Some("F*Bar"));
/// assert_eq!(parsed.kind, QueryKind::Wildcard);
/// assert_eq!(parsed.upper, vec!['F', 'B']);
/// ```
pub fn parse_query(pattern: Option<&str>) -> ParsedQuery {
    let pattern = match pattern {
        Some(p) if !p.is_empty() => p,
        _ => return ParsedQuery::empty(),
    };

    if pattern.contains(WILDCARD) {
        if pattern.chars().count() == 1 {
            return ParsedQuery::all();
        }
        let reduced = strip_wildcards(pattern);
        return ParsedQuery {
            kind: QueryKind::Wildcard,
            upper: uppercase_letters(&reduced),
            lower: lowercase_letters(pattern),
            suffix: None,
        };
    }

    if pattern.ends_with(' ') {
        return ParsedQuery {
            kind: QueryKind::EndsWith,
            upper: uppercase_letters(pattern),
            lower: Vec::new(),
            suffix: trailing_suffix(pattern),
        };
    }

    ParsedQuery {
        kind: QueryKind::CamelHump,
        upper: uppercase_letters(pattern),
        lower: lowercase_letters(pattern),
        suffix: None,
    }
}

/// Remove every wildcard from a pattern
pub fn strip_wildcards(pattern: &str) -> String {
    pattern.chars().filter(|c| *c != WILDCARD).collect()
}

/// Required ending for an `EndsWith` query
///
/// Finds the last uppercase letter of the pattern and returns the trimmed text
/// that follows its last occurrence. `None` when the pattern has no uppercase
/// letter.
///
/// # Examples
/// ```
/// # use hump_finder::pattern::trailing_suffix;
/// assert_eq!(trailing_suffix("FooBar "), Some("ar".to_string()));
/// assert_eq!(trailing_suffix("NMS "), Some(String::new()));
/// assert_eq!(trailing_suffix("abc "), None);
/// ```
pub fn trailing_suffix(pattern: &str) -> Option<String> {
    let last_upper = pattern.chars().rev().find(|c| c.is_uppercase())?;
    let pos = pattern.rfind(last_upper)?;
    Some(pattern[pos + last_upper.len_utf8()..].trim().to_string())
}

#[inline]
fn uppercase_letters(pattern: &str) -> Vec<char> {
    pattern.chars().filter(|c| c.is_uppercase()).collect()
}

#[inline]
fn lowercase_letters(pattern: &str) -> Vec<char> {
    pattern.chars().filter(|c| c.is_lowercase()).collect()
}
