//! Parser settings.

use super::format::NullValue;

/// Default maximum nesting depth.
///
/// Kept below the JSON reader's own recursion limit (128 containers), so an
/// over-deep document is rejected by the walker with the path it reached.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for [`JsonConfigParser`](super::JsonConfigParser).
///
/// # Examples
///
/// ```rust
/// use flatjson_config::core::{NullValue, ParserOptions};
///
/// let options = ParserOptions::default()
///     .with_max_depth(16)
///     .with_null_value(NullValue::Empty);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of segments in a canonical path.
    pub max_depth: usize,
    /// Rendering of `null` leaves.
    pub null_value: NullValue,
}

impl ParserOptions {
    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set how `null` leaves are rendered.
    pub fn with_null_value(mut self, null_value: NullValue) -> Self {
        self.null_value = null_value;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            null_value: NullValue::default(),
        }
    }
}
