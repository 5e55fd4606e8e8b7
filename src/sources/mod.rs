//! Configuration sources backed by a [`ConfigurationParser`](crate::core::ConfigurationParser).

mod config_source;
mod document;
mod file;

pub use config_source::ConfigSource;
pub use document::DocumentSource;
pub use file::FileSource;
