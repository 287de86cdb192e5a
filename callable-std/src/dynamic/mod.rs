//! Dynamic dispatch support.
//!
//! Target types described at runtime and looked up by name. Use when the set
//! of callable types is determined at runtime (plugins, config-driven).

#[cfg(feature = "inventory")]
pub mod collected;
pub mod registry;
pub mod target_type;

#[cfg(feature = "inventory")]
pub use collected::TargetRegistration;
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use target_type::{DynInstance, TargetType, TargetTypeBuilder};
