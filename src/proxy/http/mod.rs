use crate::proxy::{Address, ProtocolType};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Credentials sent to an HTTP proxy with every `CONNECT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthentication {
    username: String,
    password: String,
}

impl HttpAuthentication {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Value of the `Proxy-Authorization` header, `Basic base64(user:pass)`.
    pub fn authorization_header(&self) -> String {
        let credential = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(credential.as_bytes()))
    }
}

/// Tunnels connections through an HTTP proxy using `CONNECT`. The same
/// parameters serve both the plain and the TLS-wrapped (`shttp`) variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAdapterFactory {
    host: String,
    port: u16,
    auth: Option<HttpAuthentication>,
    secured: bool,
}

impl HttpAdapterFactory {
    pub fn new(host: String, port: u16, auth: Option<HttpAuthentication>) -> Self {
        Self {
            host,
            port,
            auth,
            secured: false,
        }
    }

    pub fn new_secured(host: String, port: u16, auth: Option<HttpAuthentication>) -> Self {
        Self {
            host,
            port,
            auth,
            secured: true,
        }
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

    pub fn auth(&self) -> Option<&HttpAuthentication> {
        self.auth.as_ref()
    }

    #[inline]
    pub fn is_secured(&self) -> bool {
        self.secured
    }

    pub fn protocol_type(&self) -> ProtocolType {
        if self.secured {
            ProtocolType::SecureHttp
        } else {
            ProtocolType::Http
        }
    }
}
