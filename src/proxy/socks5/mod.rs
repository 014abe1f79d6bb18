use crate::proxy::{Address, ProtocolType};

/// Tunnels connections through a SOCKS5 server. No authentication is offered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Socks5AdapterFactory {
    host: String,
    port: u16,
}

impl Socks5AdapterFactory {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn address(&self) -> Address {
        Address::from_host_port(&self.host, self.port)
    }

    pub fn protocol_type(&self) -> ProtocolType {
        ProtocolType::Socks5
    }
}
