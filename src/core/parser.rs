//! JSON configuration parser.

use super::document::Node;
use super::flat_map::FlatMap;
use super::options::ParserOptions;
use super::walker::walk;
use crate::error::ParseError;
use std::fmt;

/// Converts configuration content into a flat map.
///
/// Implement this trait to support other content formats. Sources hold their
/// parser behind this trait so callers can swap it per content type.
///
/// Implementations must not keep per-call state: a single parser may be shared
/// by several sources and threads.
pub trait ConfigurationParser: fmt::Debug + Send + Sync {
    /// Flatten one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or two leaves share a path.
    fn parse(&self, input: &str) -> Result<FlatMap, ParseError>;
}

/// Flattens JSON documents into colon-delimited key paths.
///
/// The parser only holds its options; every call builds its own traversal
/// state, so one instance can serve any number of concurrent parses.
///
/// # Examples
///
/// ```rust
/// use flatjson_config::core::JsonConfigParser;
///
/// let parser = JsonConfigParser::new();
/// let map = parser.parse(r#"{"a": {"b": 1, "c": [true, false]}}"#).unwrap();
///
/// assert_eq!(map.get("a:b"), Some("1"));
/// assert_eq!(map.get("a:c:0"), Some("true"));
/// assert_eq!(map.get("a:c:1"), Some("false"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigParser {
    options: ParserOptions,
}

impl JsonConfigParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Flatten one JSON document.
    ///
    /// The root must be an object or an array. Nothing is returned unless the
    /// whole document was flattened.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Format`] for invalid JSON, a scalar root, or nesting
    ///   deeper than the configured limit
    /// - [`ParseError::DuplicateKey`] if two leaves resolve to the same path,
    ///   ignoring case
    pub fn parse(&self, input: &str) -> Result<FlatMap, ParseError> {
        let root = Node::from_json(input)?;

        if let Node::Scalar(_) = root {
            return Err(ParseError::format(
                format!(
                    "Unsupported JSON root '{}'; a configuration document must be an object or array",
                    root.kind()
                ),
                "",
            ));
        }

        let map = walk(&root, &self.options)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(entries = map.len(), "flattened JSON configuration document");

        Ok(map)
    }
}

impl ConfigurationParser for JsonConfigParser {
    fn parse(&self, input: &str) -> Result<FlatMap, ParseError> {
        JsonConfigParser::parse(self, input)
    }
}
