//! In-memory configuration source.

use super::ConfigSource;
use super::config_source::collect_values;
use crate::core::{ConfigurationParser, FlatMap, JsonConfigParser};
use crate::error::Result;
use std::sync::Arc;

/// Configuration source holding document text in memory.
///
/// Use it for content delivered by a remote configuration service, embedded
/// defaults, or anything else already held as a string.
///
/// Registered with a `config::ConfigBuilder`, each canonical path becomes a
/// literal key, and `config` lowercases keys: `Service:Name` is stored as
/// `service:name`.
///
/// # Examples
///
/// ```rust
/// use flatjson_config::sources::{ConfigSource, DocumentSource};
///
/// let source = DocumentSource::new("defaults", r#"{"server": {"port": 8080}}"#);
/// let map = source.load().unwrap();
/// assert_eq!(map.get("server:port"), Some("8080"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentSource {
    name: String,
    content: String,
    parser: Arc<dyn ConfigurationParser>,
}

impl DocumentSource {
    /// Create a source parsed as JSON with default options.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            parser: Arc::new(JsonConfigParser::new()),
        }
    }

    /// Use a different parser for the content.
    pub fn with_parser(mut self, parser: impl ConfigurationParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Replace the document text, e.g. after a remote change notification.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// The raw document text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl ConfigSource for DocumentSource {
    fn load(&self) -> Result<FlatMap> {
        let map = match self.parser.parse(&self.content) {
            Ok(map) => map,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(source = %self.name, error = %e, "failed to parse configuration document");
                return Err(e.into());
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(source = %self.name, entries = map.len(), "loaded configuration document");

        Ok(map)
    }

    fn name(&self) -> String {
        format!("document:{}", self.name)
    }
}

impl config::Source for DocumentSource {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(
        &self,
    ) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError> {
        collect_values(self)
    }
}
