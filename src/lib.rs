//! Turns the adapter section of a proxy configuration into a frozen registry
//! of adapter factories, keyed by adapter id.

pub mod config;
pub mod proxy;

pub use config::{Config, ConfigurationParserError};
pub use proxy::{AdapterFactory, AdapterFactoryManager, ProtocolType};
