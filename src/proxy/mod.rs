use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub mod address;
pub mod direct;
pub mod http;
pub mod reject;
pub mod shadowsocks;
pub mod socks5;
pub mod speed;

pub use address::Address;

use direct::DirectAdapterFactory;
use http::HttpAdapterFactory;
use reject::RejectAdapterFactory;
use shadowsocks::ShadowsocksAdapterFactory;
use socks5::Socks5AdapterFactory;
use speed::SpeedAdapterFactory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtocolType {
    Direct,
    Http,
    SecureHttp,
    Socks5,
    Shadowsocks,
    Speed,
    Reject,
}

impl ProtocolType {
    /// The `type` tag an adapter entry uses for this protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolType::Direct => "direct",
            ProtocolType::Http => "http",
            ProtocolType::SecureHttp => "shttp",
            ProtocolType::Socks5 => "socks5",
            ProtocolType::Shadowsocks => "shadowsocks",
            ProtocolType::Speed => "speed",
            ProtocolType::Reject => "reject",
        }
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, immutable blueprint for one outbound adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterFactory {
    Direct(DirectAdapterFactory),
    Http(HttpAdapterFactory),
    SecureHttp(HttpAdapterFactory),
    Socks5(Socks5AdapterFactory),
    Shadowsocks(ShadowsocksAdapterFactory),
    Speed(SpeedAdapterFactory),
    Reject(RejectAdapterFactory),
}

impl AdapterFactory {
    pub fn protocol_type(&self) -> ProtocolType {
        match self {
            AdapterFactory::Direct(f) => f.protocol_type(),
            AdapterFactory::Http(f) | AdapterFactory::SecureHttp(f) => f.protocol_type(),
            AdapterFactory::Socks5(f) => f.protocol_type(),
            AdapterFactory::Shadowsocks(f) => f.protocol_type(),
            AdapterFactory::Speed(f) => f.protocol_type(),
            AdapterFactory::Reject(f) => f.protocol_type(),
        }
    }

    /// Upstream server for the adapters that dial one.
    pub fn server_address(&self) -> Option<Address> {
        match self {
            AdapterFactory::Http(f) | AdapterFactory::SecureHttp(f) => Some(f.address()),
            AdapterFactory::Socks5(f) => Some(f.address()),
            AdapterFactory::Shadowsocks(f) => Some(f.address()),
            AdapterFactory::Direct(_) | AdapterFactory::Speed(_) | AdapterFactory::Reject(_) => {
                None
            }
        }
    }
}

impl From<DirectAdapterFactory> for AdapterFactory {
    fn from(f: DirectAdapterFactory) -> Self {
        AdapterFactory::Direct(f)
    }
}

impl From<Socks5AdapterFactory> for AdapterFactory {
    fn from(f: Socks5AdapterFactory) -> Self {
        AdapterFactory::Socks5(f)
    }
}

impl From<ShadowsocksAdapterFactory> for AdapterFactory {
    fn from(f: ShadowsocksAdapterFactory) -> Self {
        AdapterFactory::Shadowsocks(f)
    }
}

impl From<SpeedAdapterFactory> for AdapterFactory {
    fn from(f: SpeedAdapterFactory) -> Self {
        AdapterFactory::Speed(f)
    }
}

impl From<RejectAdapterFactory> for AdapterFactory {
    fn from(f: RejectAdapterFactory) -> Self {
        AdapterFactory::Reject(f)
    }
}

/// Frozen id → factory table handed to the router. There is no way to add,
/// remove or replace an entry once the manager exists, so clones can be
/// shared across connection handlers without locking.
#[derive(Clone, Debug)]
pub struct AdapterFactoryManager {
    factories: Arc<HashMap<String, Arc<AdapterFactory>>>,
}

impl AdapterFactoryManager {
    pub(crate) fn new(factories: HashMap<String, Arc<AdapterFactory>>) -> Self {
        Self {
            factories: Arc::new(factories),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<AdapterFactory>> {
        self.factories.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
