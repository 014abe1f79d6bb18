use crate::proxy::ProtocolType;
use std::time::Duration;

/// Holds an incoming connection for `delay` and then refuses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectAdapterFactory {
    delay: u64,
}

impl RejectAdapterFactory {
    /// `delay` is in milliseconds.
    pub fn new(delay: u64) -> Self {
        Self { delay }
    }

    #[inline]
    pub fn delay_millis(&self) -> u64 {
        self.delay
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    pub fn protocol_type(&self) -> ProtocolType {
        ProtocolType::Reject
    }
}
