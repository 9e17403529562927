//! # Hump Finder: CamelHump Class Name Search
//!
//! Builds an index of simple class names from a stream of fully-qualified
//! names and filters it with the abbreviated queries used by IDE
//! "navigate to class" dialogs.
//!
//! ## Query Syntax
//!
//! 1. **Empty** - `""` or no pattern matches nothing
//! 2. **All** - `"*"` returns every name
//! 3. **Wildcard** - `"F*Bar"`: `*` is dropped, the rest is a CamelHump query
//! 4. **Ends with** - `"NMS "`: trailing space; uppercase letters must be
//!    present and the name must end with the text after the last uppercase letter
//! 5. **CamelHump** - `"FBar"`: every uppercase and lowercase letter of the
//!    query must occur in the name (case-sensitive)
//!
//! ## Example Usage
//!
//! ```
//! use hump_finder::ClassFinder;
//! use std::io::Cursor;
//!
//! let input = "c.d.FooBar\ncom.LooBarBaz\nFioBarBaz\n";
//! let finder = ClassFinder::new(Some(Cursor::new(input)))?;
//!
//! assert_eq!(finder.find_matching(Some("FBar")), vec!["FioBarBaz", "FooBar"]);
//! assert_eq!(finder.find_matching(Some("*")).len(), 3);
//! # Ok::<(), hump_finder::FinderError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Index Builder** - Splits the stream into records and sorts simple names
//! - **Pattern Parser** - Classifies a query and extracts required letters
//! - **Name Matcher** - Stable, read-only filter over the index
//! - **ClassFinder API** - Main entry point combining all components

pub mod data;
pub mod matcher;
pub mod pattern;
pub mod search;
pub mod types;

// Re-export main types and functions for convenience
pub use data::{simple_name, BuildOptions, NameIndex};
pub use matcher::NameMatcher;
pub use pattern::parse_query;
pub use search::ClassFinder;
pub use types::{FinderError, IndexStats, ParsedQuery, QueryKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
