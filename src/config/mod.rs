use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::proxy::AdapterFactoryManager;

mod adapter;
mod error;
pub mod log;
mod protocol;
mod value;

pub use self::error::ConfigurationParserError;
pub use self::protocol::AdapterKind;

/// The configuration file is YAML. Its top level is either the adapter list
/// itself or a mapping holding it under `adapter`:
///
/// ```yaml
/// log:
///   level: info
/// adapter:
///   - id: proxy
///     type: shadowsocks
///     host: ss.example.com
///     port: 8388
///     method: aes-256-cfb
///     password: secret
/// rule: []
/// ```
///
/// Keys other than `adapter` and `log` belong to other components and are
/// left alone.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    adapter: Value,
    #[serde(default)]
    log: log::Log,
}

impl Config {
    fn from_document(doc: Value) -> Result<Config> {
        match doc {
            Value::Sequence(_) => Ok(Config {
                adapter: doc,
                log: Default::default(),
            }),
            Value::Mapping(_) => {
                serde_yaml::from_value(doc).context("invalid configuration document")
            }
            _ => Ok(Config::default()),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Config> {
        let doc: Value = serde_yaml::from_reader(reader).context("malformed YAML")?;
        Config::from_document(doc)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        Config::from_reader(file).with_context(|| format!("cannot load {}", path.display()))
    }

    /// The raw adapter section, `Null` when the document has none.
    pub fn adapter(&self) -> &Value {
        &self.adapter
    }

    pub fn log(&self) -> &log::Log {
        &self.log
    }

    pub fn build_adapter_factory_manager(
        &self,
    ) -> std::result::Result<AdapterFactoryManager, ConfigurationParserError> {
        AdapterFactoryManager::from_config(&self.adapter)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Config> {
        let doc: Value = serde_yaml::from_str(s).context("malformed YAML")?;
        Config::from_document(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::log::LogLevel;
    use crate::proxy::ProtocolType;
    use std::io::Write;

    #[test]
    fn test_top_level_sequence() {
        let config: Config = "- {id: r, type: reject, delay: 1}".parse().unwrap();
        assert_eq!(config.log().level, LogLevel::Info);
        let m = config.build_adapter_factory_manager().unwrap();
        assert_eq!(m.get("r").unwrap().protocol_type(), ProtocolType::Reject);
    }

    #[test]
    fn test_top_level_mapping() {
        let config: Config = r#"
log:
  level: debug
port: 9090
adapter:
  - id: p
    type: socks5
    host: 127.0.0.1
    port: 1080
rule:
  - type: all
    adapter: p
"#
        .parse()
        .unwrap();
        assert_eq!(config.log().level, LogLevel::Debug);
        let m = config.build_adapter_factory_manager().unwrap();
        assert_eq!(m.len(), 2);
        assert!(m.contains("p"));
    }

    #[test]
    fn test_missing_adapter_section() {
        let config: Config = "rule: []".parse().unwrap();
        assert!(config.adapter().is_null());
        assert_eq!(
            config.build_adapter_factory_manager().unwrap_err(),
            ConfigurationParserError::NoAdapterDefined
        );

        let config: Config = "adapter: {id: p}".parse().unwrap();
        assert_eq!(
            config.build_adapter_factory_manager().unwrap_err(),
            ConfigurationParserError::NoAdapterDefined
        );
    }

    #[test]
    fn test_invalid_documents() {
        assert!("adapter: [\n".parse::<Config>().is_err());
        assert!("log: {level: loud}".parse::<Config>().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "adapter:").unwrap();
        writeln!(file, "  - {{id: web, type: http, host: proxy.local, port: 3128}}").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        let m = config.build_adapter_factory_manager().unwrap();
        assert_eq!(m.get("web").unwrap().protocol_type(), ProtocolType::Http);

        let err = Config::from_file("/nonexistent/adapter.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/adapter.yaml"));
    }
}
