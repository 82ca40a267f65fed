// Field catalog: categories, descriptors and the per-platform registries
pub mod category;
pub mod descriptor;
pub mod health_connect;
pub mod health_kit;
pub mod registry;

pub use category::Category;
pub use descriptor::{FieldDescriptor, FieldKind};
pub use registry::{FieldRegistry, RegistryError};
