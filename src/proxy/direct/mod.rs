use crate::proxy::ProtocolType;

/// Connects straight to the requested target without any upstream proxy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectAdapterFactory;

impl DirectAdapterFactory {
    /// Id the passthrough factory is always registered under.
    pub const ID: &'static str = "direct";

    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn protocol_type(&self) -> ProtocolType {
        ProtocolType::Direct
    }
}
