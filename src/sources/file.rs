//! File-based configuration source.

use super::ConfigSource;
use super::config_source::collect_values;
use crate::core::{ConfigurationParser, FlatMap, JsonConfigParser};
use crate::error::{ConfigError, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// File-based configuration source.
///
/// Reads a `.json` file and flattens it on every load, so edits on disk are
/// picked up the next time the source is loaded.
///
/// Registered with a `config::ConfigBuilder`, each canonical path becomes a
/// literal key, and `config` lowercases keys: `Service:Name` is stored as
/// `service:name`.
///
/// # Examples
///
/// ```rust,no_run
/// use flatjson_config::sources::FileSource;
///
/// let source = FileSource::new("config/appsettings.json").required(false);
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
    parser: Arc<dyn ConfigurationParser>,
}

impl FileSource {
    /// Create a new, required file source parsed as JSON.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
            parser: Arc::new(JsonConfigParser::new()),
        }
    }

    /// Set whether a missing file is an error.
    ///
    /// An optional source that does not exist loads as an empty map.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Use a different parser for the file content.
    pub fn with_parser(mut self, parser: impl ConfigurationParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Validate that the file extension is supported.
    fn validate_extension(&self) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        if extension.eq_ignore_ascii_case("json") {
            Ok(())
        } else {
            Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .json",
                extension
            )))
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<FlatMap> {
        self.validate_extension()?;

        if !self.path.exists() {
            if self.required {
                return Err(ConfigError::LoadError(format!(
                    "Configuration file not found: {}",
                    self.path.display()
                )));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(path = %self.path.display(), "optional configuration file not found");

            return Ok(FlatMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;

        let map = match self.parser.parse(&content) {
            Ok(map) => map,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %self.path.display(), error = %e, "failed to parse configuration file");
                return Err(e.into());
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %self.path.display(), entries = map.len(), "loaded configuration file");

        Ok(map)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

impl config::Source for FileSource {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(
        &self,
    ) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError> {
        collect_values(self)
    }
}
