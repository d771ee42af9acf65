use crate::endpoint::{EndpointRecord, ServiceInfo};
use std::sync::RwLock;

/// Append-only collection of endpoint documentation metadata plus the
/// service info singleton.
///
/// Owned by the hosting service's composition root and shared by reference
/// (or behind an `Arc`) with whatever serves the docs endpoints. Writers
/// take the lock exclusively, readers share it; readers always receive
/// defensive snapshots and can never observe a half-applied write.
#[derive(Default)]
pub struct ApiRegistry {
    inner: RwLock<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    info: ServiceInfo,
    endpoints: Vec<EndpointRecord>,
}

/// A coherent point-in-time copy of the registry contents.
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    pub info: ServiceInfo,
    pub endpoints: Vec<EndpointRecord>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the service metadata. Last caller wins, no merge.
    pub fn set_service_info(&self, info: ServiceInfo) {
        let mut inner = self.inner.write().unwrap();
        inner.info = info;
    }

    /// Append an endpoint record.
    ///
    /// No validation of method or path, and no duplicate detection:
    /// registering the same path+method twice simply produces two records,
    /// and the document assembler lets the later one win the slot.
    pub fn register_endpoint(&self, record: EndpointRecord) {
        tracing::debug!(
            method = %record.method,
            path = %record.path,
            "registering endpoint metadata"
        );
        let mut inner = self.inner.write().unwrap();
        inner.endpoints.push(record);
    }

    /// Snapshot of all registered endpoints, in registration order.
    pub fn endpoints(&self) -> Vec<EndpointRecord> {
        self.inner.read().unwrap().endpoints.clone()
    }

    /// Current service metadata.
    pub fn service_info(&self) -> ServiceInfo {
        self.inner.read().unwrap().info.clone()
    }

    /// One coherent copy of info and endpoints for document generation.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let inner = self.inner.read().unwrap();
        RegistrySnapshot {
            info: inner.info.clone(),
            endpoints: inner.endpoints.clone(),
        }
    }
}
