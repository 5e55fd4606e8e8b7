//! # flatjson-config
//!
//! Flatten JSON configuration documents into case-insensitive, colon-delimited
//! key paths.
//!
//! ## Overview
//!
//! Hierarchical configuration systems address settings by path, for example
//! `server:hosts:0`. This crate converts an arbitrary JSON document into that
//! shape:
//! - Objects contribute their property names as path segments
//! - Arrays contribute zero-based indices
//! - Every scalar becomes one entry with a canonical string value
//! - Paths are unique ignoring case; a collision fails the whole parse
//!
//! ## Quick Start
//!
//! ```rust
//! let map = flatjson_config::parse(r#"{"a": {"b": 1, "c": [true, false]}}"#)?;
//!
//! assert_eq!(map.get("a:b"), Some("1"));
//! assert_eq!(map.get("a:c:0"), Some("true"));
//! assert_eq!(map.get("A:C:1"), Some("false"));
//! # Ok::<(), flatjson_config::error::ParseError>(())
//! ```
//!
//! ## Sources
//!
//! [`sources::DocumentSource`] and [`sources::FileSource`] wrap a parser and
//! implement both [`sources::ConfigSource`] and `config::Source`, so flattened
//! entries can be handed to a `config::ConfigBuilder`.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events when documents are parsed or
//!   sources are loaded

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sources;

use crate::core::{FlatMap, JsonConfigParser};
use crate::error::ParseError;

/// Flatten a JSON document with default options.
///
/// Shorthand for [`JsonConfigParser::new().parse(document)`](JsonConfigParser::parse).
///
/// # Errors
///
/// Returns [`ParseError::Format`] for malformed JSON or a scalar root, and
/// [`ParseError::DuplicateKey`] when two leaves share a path ignoring case.
pub fn parse(document: &str) -> Result<FlatMap, ParseError> {
    JsonConfigParser::new().parse(document)
}

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        ConfigurationParser, FlatMap, JsonConfigParser, NullValue, ParserOptions,
    };
    pub use crate::error::{ConfigError, ParseError, Result};
    pub use crate::parse;
    pub use crate::sources::{ConfigSource, DocumentSource, FileSource};
}
