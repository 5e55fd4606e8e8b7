//! Configuration source trait.

use crate::core::FlatMap;
use crate::error::Result;
use std::collections::HashMap;

/// Trait for configuration sources.
///
/// A source produces one flat map of canonical paths to string values.
/// Combining several sources is left to the caller, typically a
/// `config::ConfigBuilder`.
pub trait ConfigSource: Send + Sync {
    /// Load and flatten the source content.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<FlatMap>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// Load the source as `config` values keyed by canonical path.
    ///
    /// Every value is a string whose origin is the source name.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`load`](ConfigSource::load).
    fn load_values(&self) -> Result<HashMap<String, config::Value>> {
        let origin = self.name();
        let map = self.load()?;

        Ok(map
            .into_iter()
            .map(|(key, value)| {
                let value = config::Value::new(Some(&origin), config::ValueKind::String(value));
                (key, value)
            })
            .collect())
    }
}

/// Adapt a [`ConfigSource`] result for `config::Source::collect`.
pub(crate) fn collect_values<S>(
    source: &S,
) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError>
where
    S: ConfigSource + ?Sized,
{
    source
        .load_values()
        .map(|values| values.into_iter().collect())
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))
}
