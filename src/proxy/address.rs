use std::fmt::{self, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Where an adapter dials its upstream server.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Address {
    /// Socket address (IP Address)
    SocketAddress(SocketAddr),
    /// Domain name address and port
    DomainNameAddress(String, u16),
}

impl Address {
    /// Builds an address from a configured host and port. Hosts that parse as an
    /// IP literal become socket addresses, anything else is kept as a domain.
    pub fn from_host_port(host: &str, port: u16) -> Address {
        let trimmed = host.trim_start_matches('[').trim_end_matches(']');
        match IpAddr::from_str(trimmed) {
            Ok(ip) => Address::SocketAddress(SocketAddr::new(ip, port)),
            Err(_) => Address::DomainNameAddress(host.to_owned(), port),
        }
    }

    #[inline]
    pub fn port(&self) -> u16 {
        match self {
            Address::SocketAddress(addr) => addr.port(),
            Address::DomainNameAddress(_, port) => *port,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Address::SocketAddress(ref addr) => write!(f, "{}", addr),
            Address::DomainNameAddress(ref addr, ref port) => write!(f, "{}:{}", addr, port),
        }
    }
}
