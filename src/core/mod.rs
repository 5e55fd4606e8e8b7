//! Core flattening types.

mod document;
mod flat_map;
mod format;
mod options;
mod parser;
mod path;
mod walker;

pub use document::{Node, Scalar};
pub use flat_map::{FlatMap, IntoIter, Iter};
pub use format::{NullValue, format_scalar};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::{ConfigurationParser, JsonConfigParser};
pub use path::{KEY_DELIMITER, PathComposer, combine_path};
pub use walker::walk;
