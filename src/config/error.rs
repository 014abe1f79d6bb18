use crate::proxy::shadowsocks::ShadowsocksError;
use thiserror::Error;

/// Everything that can stop the adapter section from turning into a registry.
/// The first one hit aborts the whole build.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationParserError {
    #[error("no adapter is defined, the adapter section should be a list")]
    NoAdapterDefined,
    #[error("an adapter entry has no usable id")]
    AdapterIDMissing,
    #[error("an adapter entry has no type")]
    AdapterTypeMissing,
    #[error("unknown adapter type {0}")]
    AdapterTypeUnknown(String),
    #[error("failed to parse adapter: {0}")]
    AdapterParsingError(String),
}

impl From<ShadowsocksError> for ConfigurationParserError {
    fn from(e: ShadowsocksError) -> Self {
        ConfigurationParserError::AdapterParsingError(e.to_string())
    }
}
