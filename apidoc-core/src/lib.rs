pub mod descriptor;
pub mod endpoint;
pub mod registry;

pub use descriptor::{Describe, FieldDescriptor, RecordDescriptor, TypeDescriptor};
pub use endpoint::{EndpointRecord, ResponseSpec, ServiceInfo};
pub use registry::{ApiRegistry, RegistrySnapshot};
