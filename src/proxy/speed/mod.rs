use crate::proxy::{AdapterFactory, ProtocolType};
use std::sync::Arc;
use std::time::Duration;

/// One member of a speed group: the factory to try and how long to wait
/// before starting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeedMember {
    factory: Arc<AdapterFactory>,
    delay: u64,
}

impl SpeedMember {
    /// `delay` is in milliseconds.
    pub fn new(factory: Arc<AdapterFactory>, delay: u64) -> Self {
        Self { factory, delay }
    }

    pub fn factory(&self) -> &Arc<AdapterFactory> {
        &self.factory
    }

    #[inline]
    pub fn delay_millis(&self) -> u64 {
        self.delay
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

/// Races several adapters and keeps whichever connects first. Members are
/// kept in declaration order, which is the order they are started in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeedAdapterFactory {
    members: Vec<SpeedMember>,
}

impl SpeedAdapterFactory {
    pub fn new(members: Vec<SpeedMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[SpeedMember] {
        &self.members
    }

    pub fn protocol_type(&self) -> ProtocolType {
        ProtocolType::Speed
    }
}
