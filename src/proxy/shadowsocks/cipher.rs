use crate::proxy::shadowsocks::ShadowsocksError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherKind {
    None,
    Aes128Cfb,
    Aes192Cfb,
    Aes256Cfb,
    ChaCha20,
    ChaCha20Ietf,
    Salsa20,
    Rc4Md5,
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
    ChaCha20Poly1305,
}

impl CipherKind {
    pub fn key_len(&self) -> usize {
        match self {
            CipherKind::None => 0,
            CipherKind::Aes128Cfb | CipherKind::Rc4Md5 | CipherKind::Aes128Gcm => 16,
            CipherKind::Aes192Cfb | CipherKind::Aes192Gcm => 24,
            CipherKind::Aes256Cfb
            | CipherKind::ChaCha20
            | CipherKind::ChaCha20Ietf
            | CipherKind::Salsa20
            | CipherKind::Aes256Gcm
            | CipherKind::ChaCha20Poly1305 => 32,
        }
    }

    /// IV length for stream ciphers, salt length for AEAD ciphers.
    pub fn iv_or_salt_len(&self) -> usize {
        match self {
            CipherKind::None => 0,
            CipherKind::ChaCha20 | CipherKind::Salsa20 => 8,
            CipherKind::ChaCha20Ietf => 12,
            CipherKind::Aes128Cfb
            | CipherKind::Aes192Cfb
            | CipherKind::Aes256Cfb
            | CipherKind::Rc4Md5 => 16,
            CipherKind::Aes128Gcm
            | CipherKind::Aes192Gcm
            | CipherKind::Aes256Gcm
            | CipherKind::ChaCha20Poly1305 => self.key_len(),
        }
    }

    #[inline]
    pub fn is_aead(&self) -> bool {
        matches!(
            self,
            CipherKind::Aes128Gcm
                | CipherKind::Aes192Gcm
                | CipherKind::Aes256Gcm
                | CipherKind::ChaCha20Poly1305
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CipherKind::None => "none",
            CipherKind::Aes128Cfb => "aes-128-cfb",
            CipherKind::Aes192Cfb => "aes-192-cfb",
            CipherKind::Aes256Cfb => "aes-256-cfb",
            CipherKind::ChaCha20 => "chacha20",
            CipherKind::ChaCha20Ietf => "chacha20-ietf",
            CipherKind::Salsa20 => "salsa20",
            CipherKind::Rc4Md5 => "rc4-md5",
            CipherKind::Aes128Gcm => "aes-128-gcm",
            CipherKind::Aes192Gcm => "aes-192-gcm",
            CipherKind::Aes256Gcm => "aes-256-gcm",
            CipherKind::ChaCha20Poly1305 => "chacha20-ietf-poly1305",
        }
    }
}

impl FromStr for CipherKind {
    type Err = ShadowsocksError;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        let kind = match method.to_ascii_lowercase().as_str() {
            "none" | "plain" => CipherKind::None,
            "aes-128-cfb" => CipherKind::Aes128Cfb,
            "aes-192-cfb" => CipherKind::Aes192Cfb,
            "aes-256-cfb" => CipherKind::Aes256Cfb,
            "chacha20" => CipherKind::ChaCha20,
            "chacha20-ietf" => CipherKind::ChaCha20Ietf,
            "salsa20" => CipherKind::Salsa20,
            "rc4-md5" => CipherKind::Rc4Md5,
            "aes-128-gcm" => CipherKind::Aes128Gcm,
            "aes-192-gcm" => CipherKind::Aes192Gcm,
            "aes-256-gcm" => CipherKind::Aes256Gcm,
            "chacha20-ietf-poly1305" | "chacha20-poly1305" => CipherKind::ChaCha20Poly1305,
            _ => return Err(ShadowsocksError::UnsupportedMethod(method.to_owned())),
        };
        Ok(kind)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the encrypted stream is framed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamObfuscater {
    /// Plain shadowsocks framing.
    Origin,
    /// One-time auth: every chunk carries an HMAC-SHA1 tag.
    OnetimeAuth,
}

impl StreamObfuscater {
    pub fn from_ota(ota: bool) -> Self {
        if ota {
            StreamObfuscater::OnetimeAuth
        } else {
            StreamObfuscater::Origin
        }
    }
}

impl Default for StreamObfuscater {
    fn default() -> Self {
        StreamObfuscater::Origin
    }
}
