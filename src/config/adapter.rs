use crate::config::protocol::{
    parse_direct, parse_http, parse_reject, parse_secure_http, parse_shadowsocks, parse_socks5,
    parse_speed, AdapterKind,
};
use crate::config::value::identifier;
use crate::config::ConfigurationParserError;
use crate::proxy::direct::DirectAdapterFactory;
use crate::proxy::{AdapterFactory, AdapterFactoryManager, ProtocolType};
use log::{debug, info, warn};
use serde_yaml::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Renders a non-string `type` value the way it was written.
fn render_scalar(v: &Value) -> String {
    match v {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_owned())
            .unwrap_or_default(),
    }
}

impl AdapterFactoryManager {
    /// Builds the registry from the adapter section of a config document.
    ///
    /// Entries are processed in document order and the first invalid one
    /// aborts the build. `direct` is always registered before any entry, and
    /// an entry reusing an id replaces the earlier factory. A `speed` entry
    /// can only refer to ids registered above it.
    ///
    /// ```yaml
    /// - id: proxy
    ///   type: socks5
    ///   host: 10.0.0.1
    ///   port: 1080
    /// - id: fast
    ///   type: speed
    ///   adapters:
    ///     - id: proxy
    ///       delay: 0
    ///     - id: direct
    ///       delay: 300
    /// ```
    pub fn from_config(adapters: &Value) -> Result<Self, ConfigurationParserError> {
        let mut factories: HashMap<String, Arc<AdapterFactory>> = HashMap::new();
        factories.insert(
            DirectAdapterFactory::ID.to_string(),
            Arc::new(parse_direct()),
        );

        let entries = match adapters {
            Value::Sequence(entries) => entries,
            _ => return Err(ConfigurationParserError::NoAdapterDefined),
        };

        for entry in entries {
            let id = identifier(entry).ok_or(ConfigurationParserError::AdapterIDMissing)?;
            let kind: AdapterKind = match entry.get("type") {
                None | Some(Value::Null) => {
                    return Err(ConfigurationParserError::AdapterTypeMissing)
                }
                Some(Value::String(ty)) => ty.parse()?,
                Some(other) => {
                    return Err(ConfigurationParserError::AdapterTypeUnknown(
                        render_scalar(other),
                    ))
                }
            };

            let factory = match kind {
                AdapterKind::Http => parse_http(entry),
                AdapterKind::SecureHttp => parse_secure_http(entry),
                AdapterKind::Socks5 => parse_socks5(entry),
                AdapterKind::Shadowsocks => parse_shadowsocks(entry),
                AdapterKind::Speed => parse_speed(entry, &factories),
                AdapterKind::Reject => parse_reject(entry),
            }
            .map_err(|e| {
                debug!("adapter {} ({}) is invalid: {}", id, ProtocolType::from(kind), e);
                e
            })?;

            debug!("registered adapter {} as {}", id, factory.protocol_type());
            if let Some(previous) = factories.insert(id.clone(), Arc::new(factory)) {
                warn!(
                    "adapter {} ({}) is replaced by a later entry with the same id",
                    id,
                    previous.protocol_type()
                );
            }
        }

        info!("{} adapter factories registered", factories.len());
        Ok(AdapterFactoryManager::new(factories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::shadowsocks::StreamObfuscater;
    use serde_yaml::from_str;

    fn build(doc: &str) -> Result<AdapterFactoryManager, ConfigurationParserError> {
        let doc: Value = from_str(doc).unwrap();
        AdapterFactoryManager::from_config(&doc)
    }

    #[test]
    fn test_not_a_sequence() {
        for doc in &["id: p1", "42", "~", "\"adapters\""] {
            assert_eq!(
                build(doc).unwrap_err(),
                ConfigurationParserError::NoAdapterDefined
            );
        }
    }

    #[test]
    fn test_empty_sequence_has_direct() {
        let m = build("[]").unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(
            m.get("direct").unwrap().protocol_type(),
            ProtocolType::Direct
        );
    }

    #[test]
    fn test_entry_header_errors() {
        assert_eq!(
            build("- type: http\n  host: h\n  port: 80").unwrap_err(),
            ConfigurationParserError::AdapterIDMissing
        );
        assert_eq!(
            build("- id: [a]\n  type: http").unwrap_err(),
            ConfigurationParserError::AdapterIDMissing
        );
        assert_eq!(
            build("- id: p1\n  host: h\n  port: 80").unwrap_err(),
            ConfigurationParserError::AdapterTypeMissing
        );
        assert_eq!(
            build("- id: p1\n  type: bogus").unwrap_err(),
            ConfigurationParserError::AdapterTypeUnknown("bogus".to_string())
        );
        assert_eq!(
            build("- id: p1\n  type: 5").unwrap_err(),
            ConfigurationParserError::AdapterTypeUnknown("5".to_string())
        );
        assert_eq!(
            build("- id: p1\n  type: true").unwrap_err(),
            ConfigurationParserError::AdapterTypeUnknown("true".to_string())
        );
        assert_eq!(
            build("- id: p1\n  type: [http]").unwrap_err().to_string(),
            "unknown adapter type a list"
        );
        assert!(matches!(
            build("- {}").unwrap_err(),
            ConfigurationParserError::AdapterIDMissing
        ));
    }

    #[test]
    fn test_type_is_case_insensitive() {
        for ty in &["HTTP", "Http", "http"] {
            let m = build(&format!("- id: p\n  type: {}\n  host: h\n  port: 80", ty)).unwrap();
            assert_eq!(m.get("p").unwrap().protocol_type(), ProtocolType::Http);
        }
    }

    #[test]
    fn test_socks5_entry() {
        let m = build("- {id: p1, type: socks5, host: 10.0.0.1, port: 1080}").unwrap();
        match m.get("p1").unwrap().as_ref() {
            AdapterFactory::Socks5(f) => {
                assert_eq!(f.host(), "10.0.0.1");
                assert_eq!(f.port(), 1080);
            }
            other => panic!("unexpected factory {:?}", other),
        }
        assert!(m.contains("direct"));
    }

    #[test]
    fn test_integer_id() {
        let m = build("- {id: 7, type: reject, delay: 10}").unwrap();
        assert!(m.contains("7"));
    }

    #[test]
    fn test_http_auth_without_username() {
        let err = build("- {id: s1, type: http, host: h, port: 80, auth: true}").unwrap_err();
        match err {
            ConfigurationParserError::AdapterParsingError(msg) => {
                assert!(msg.contains("username"), "{}", msg)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_user_direct_overrides_builtin() {
        let m = build("- {id: direct, type: reject, delay: 0}").unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(
            m.get("direct").unwrap().protocol_type(),
            ProtocolType::Reject
        );
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let m = build(
            "- {id: a, type: reject, delay: 1}\n- {id: a, type: socks5, host: h, port: 1}",
        )
        .unwrap();
        assert_eq!(m.get("a").unwrap().protocol_type(), ProtocolType::Socks5);
    }

    #[test]
    fn test_speed_references() {
        let doc = r#"
- id: p1
  type: socks5
  host: 10.0.0.1
  port: 1080
- id: fast
  type: speed
  adapters:
    - id: p1
      delay: 0
    - id: direct
      delay: 300
"#;
        let m = build(doc).unwrap();
        match m.get("fast").unwrap().as_ref() {
            AdapterFactory::Speed(f) => {
                let members = f.members();
                assert_eq!(members.len(), 2);
                assert!(Arc::ptr_eq(members[0].factory(), m.get("p1").unwrap()));
                assert_eq!(members[0].delay_millis(), 0);
                assert!(Arc::ptr_eq(members[1].factory(), m.get("direct").unwrap()));
                assert_eq!(members[1].delay_millis(), 300);
            }
            other => panic!("unexpected factory {:?}", other),
        }
    }

    #[test]
    fn test_speed_forward_reference_fails() {
        let doc = r#"
- id: fast
  type: speed
  adapters:
    - id: p1
      delay: 0
- id: p1
  type: socks5
  host: 10.0.0.1
  port: 1080
"#;
        assert!(matches!(
            build(doc).unwrap_err(),
            ConfigurationParserError::AdapterParsingError(_)
        ));
    }

    #[test]
    fn test_first_error_aborts() {
        let doc = "- {id: a, type: reject}\n- {id: b, type: bogus}";
        assert_eq!(
            build(doc).unwrap_err(),
            ConfigurationParserError::AdapterParsingError("Delay (delay) is required.".to_string())
        );
    }

    #[test]
    fn test_shadowsocks_ota_variants() {
        let doc = r#"
- {id: a, type: shadowsocks, host: h, port: 8388, method: aes-128-cfb, password: p}
- {id: b, type: shadowsocks, host: h, port: 8388, method: aes-128-cfb, password: p, ota: false}
- {id: c, type: shadowsocks, host: h, port: 8388, method: aes-128-cfb, password: p, ota: true}
"#;
        let m = build(doc).unwrap();
        let obfuscater = |id: &str| match m.get(id).unwrap().as_ref() {
            AdapterFactory::Shadowsocks(f) => f.stream_obfuscater(),
            other => panic!("unexpected factory {:?}", other),
        };
        assert_eq!(obfuscater("a"), StreamObfuscater::Origin);
        assert_eq!(obfuscater("b"), StreamObfuscater::Origin);
        assert_eq!(obfuscater("c"), StreamObfuscater::OnetimeAuth);
    }

    #[test]
    fn test_build_is_repeatable() {
        let doc = r#"
- {id: h, type: shttp, host: h, port: 443, auth: true, username: u, password: p}
- {id: s, type: shadowsocks, host: h, port: 8388, method: chacha20, password: p}
- {id: g, type: speed, adapters: [{id: h, delay: 0}, {id: s, delay: 100}]}
- {id: r, type: reject, delay: 5}
"#;
        let a = build(doc).unwrap();
        let b = build(doc).unwrap();
        let mut ids_a: Vec<_> = a.ids().collect();
        let mut ids_b: Vec<_> = b.ids().collect();
        ids_a.sort_unstable();
        ids_b.sort_unstable();
        assert_eq!(ids_a, ids_b);
        assert_eq!(ids_a, vec!["direct", "g", "h", "r", "s"]);
        for id in ids_a {
            assert_eq!(a.get(id), b.get(id));
        }
    }
}
