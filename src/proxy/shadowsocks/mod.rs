use crate::proxy::{Address, ProtocolType};
use thiserror::Error;

pub mod cipher;

pub use cipher::{CipherKind, StreamObfuscater};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShadowsocksError {
    #[error("Unsupported encryption method {0}.")]
    UnsupportedMethod(String),
    #[error("One-time auth is not available for the AEAD method {0}.")]
    OtaWithAead(CipherKind),
}

/// Master key from password: OpenSSL's EVP_BytesToKey with MD5, no salt.
pub(crate) fn openssl_bytes_to_key(password: &[u8], key: &mut [u8]) {
    use md5::{Digest, Md5};

    let key_len = key.len();
    let mut last_digest: Option<[u8; 16]> = None;
    let mut offset = 0usize;
    while offset < key_len {
        let mut m = Md5::new();
        if let Some(digest) = last_digest {
            m.update(digest);
        }
        m.update(password);
        let digest: [u8; 16] = m.finalize().into();

        let amt = std::cmp::min(key_len - offset, digest.len());
        key[offset..offset + amt].copy_from_slice(&digest[..amt]);

        offset += amt;
        last_digest = Some(digest);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowsocksAdapterFactory {
    host: String,
    port: u16,
    method: CipherKind,
    key: Vec<u8>,
    obfuscater: StreamObfuscater,
}

impl ShadowsocksAdapterFactory {
    /// Rejects unknown methods and one-time auth on AEAD methods.
    pub fn new_from_config(
        host: String,
        port: u16,
        method: &str,
        password: &str,
        obfuscater: StreamObfuscater,
    ) -> Result<ShadowsocksAdapterFactory, ShadowsocksError> {
        let method: CipherKind = method.parse()?;
        if obfuscater == StreamObfuscater::OnetimeAuth && method.is_aead() {
            return Err(ShadowsocksError::OtaWithAead(method));
        }
        let mut key = vec![0u8; method.key_len()];
        openssl_bytes_to_key(password.as_bytes(), &mut key);
        Ok(ShadowsocksAdapterFactory {
            host,
            port,
            method,
            key,
            obfuscater,
        })
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

    pub fn method(&self) -> CipherKind {
        self.method
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn stream_obfuscater(&self) -> StreamObfuscater {
        self.obfuscater
    }

    pub fn protocol_type(&self) -> ProtocolType {
        ProtocolType::Shadowsocks
    }
}
