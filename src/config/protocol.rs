//! One validator per adapter kind. Each turns an entry into its factory or
//! the first problem found with it.

use crate::config::value::{
    identifier, optional_bool, required_delay, required_port, required_str,
    required_string_or_int,
};
use crate::config::ConfigurationParserError;
use crate::proxy::direct::DirectAdapterFactory;
use crate::proxy::http::{HttpAdapterFactory, HttpAuthentication};
use crate::proxy::reject::RejectAdapterFactory;
use crate::proxy::shadowsocks::{ShadowsocksAdapterFactory, StreamObfuscater};
use crate::proxy::socks5::Socks5AdapterFactory;
use crate::proxy::speed::{SpeedAdapterFactory, SpeedMember};
use crate::proxy::{AdapterFactory, ProtocolType};
use serde_yaml::Value;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ConfigurationParserError>;

/// The adapter kinds an entry may declare. Matching is case-insensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterKind {
    Http,
    SecureHttp,
    Socks5,
    Shadowsocks,
    Speed,
    Reject,
}

impl FromStr for AdapterKind {
    type Err = ConfigurationParserError;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.to_lowercase().as_str() {
            "http" => AdapterKind::Http,
            "shttp" => AdapterKind::SecureHttp,
            "socks5" => AdapterKind::Socks5,
            "shadowsocks" => AdapterKind::Shadowsocks,
            "speed" => AdapterKind::Speed,
            "reject" => AdapterKind::Reject,
            _ => return Err(ConfigurationParserError::AdapterTypeUnknown(s.to_owned())),
        };
        Ok(kind)
    }
}

impl From<AdapterKind> for ProtocolType {
    fn from(kind: AdapterKind) -> Self {
        match kind {
            AdapterKind::Http => ProtocolType::Http,
            AdapterKind::SecureHttp => ProtocolType::SecureHttp,
            AdapterKind::Socks5 => ProtocolType::Socks5,
            AdapterKind::Shadowsocks => ProtocolType::Shadowsocks,
            AdapterKind::Speed => ProtocolType::Speed,
            AdapterKind::Reject => ProtocolType::Reject,
        }
    }
}

pub(super) fn parse_direct() -> AdapterFactory {
    DirectAdapterFactory::new().into()
}

fn parse_http_auth(entry: &Value) -> Result<Option<HttpAuthentication>> {
    if !optional_bool(entry, "auth", "Auth", false)? {
        return Ok(None);
    }
    let username = required_string_or_int(entry, "username", "Username")?;
    let password = required_string_or_int(entry, "password", "Password")?;
    Ok(Some(HttpAuthentication::new(username, password)))
}

pub(super) fn parse_http(entry: &Value) -> Result<AdapterFactory> {
    let host = required_str(entry, "host", "Host")?;
    let port = required_port(entry, "port", "Port")?;
    let auth = parse_http_auth(entry)?;
    Ok(AdapterFactory::Http(HttpAdapterFactory::new(host, port, auth)))
}

pub(super) fn parse_secure_http(entry: &Value) -> Result<AdapterFactory> {
    let host = required_str(entry, "host", "Host")?;
    let port = required_port(entry, "port", "Port")?;
    let auth = parse_http_auth(entry)?;
    Ok(AdapterFactory::SecureHttp(HttpAdapterFactory::new_secured(
        host, port, auth,
    )))
}

pub(super) fn parse_socks5(entry: &Value) -> Result<AdapterFactory> {
    let host = required_str(entry, "host", "Host")?;
    let port = required_port(entry, "port", "Port")?;
    Ok(Socks5AdapterFactory::new(host, port).into())
}

pub(super) fn parse_shadowsocks(entry: &Value) -> Result<AdapterFactory> {
    let host = required_str(entry, "host", "Host")?;
    let port = required_port(entry, "port", "Port")?;
    let method = required_str(entry, "method", "Encryption method")?;
    let password = required_string_or_int(entry, "password", "Password")?;
    let ota = optional_bool(entry, "ota", "One time auth", false)?;
    let factory = ShadowsocksAdapterFactory::new_from_config(
        host,
        port,
        &method,
        &password,
        StreamObfuscater::from_ota(ota),
    )?;
    Ok(factory.into())
}

/// `registered` is the registry as it stands before this entry; every member
/// must name an id already in it.
pub(super) fn parse_speed(
    entry: &Value,
    registered: &HashMap<String, Arc<AdapterFactory>>,
) -> Result<AdapterFactory> {
    let adapters = match entry.get("adapters") {
        Some(Value::Sequence(adapters)) => adapters,
        _ => {
            return Err(ConfigurationParserError::AdapterParsingError(
                "Speed adapter should specify a list of adapters (adapters).".to_string(),
            ))
        }
    };
    let mut members = Vec::with_capacity(adapters.len());
    for member in adapters {
        let id = match member.get("id") {
            None | Some(Value::Null) => {
                return Err(ConfigurationParserError::AdapterParsingError(
                    "Adapter id (id) is required.".to_string(),
                ))
            }
            Some(_) => identifier(member).ok_or_else(|| {
                ConfigurationParserError::AdapterParsingError(
                    "Adapter id (id) should be a string.".to_string(),
                )
            })?,
        };
        let delay = required_delay(member, "delay", "Delay")?;
        let factory = registered.get(&id).ok_or_else(|| {
            ConfigurationParserError::AdapterParsingError(format!(
                "Unknown adapter id {} in speed adapter.",
                id
            ))
        })?;
        members.push(SpeedMember::new(factory.clone(), delay));
    }
    Ok(SpeedAdapterFactory::new(members).into())
}

pub(super) fn parse_reject(entry: &Value) -> Result<AdapterFactory> {
    let delay = required_delay(entry, "delay", "Delay")?;
    Ok(RejectAdapterFactory::new(delay).into())
}
