//! Distributed registration of target types.

use super::registry::RegistryBuilder;
use super::target_type::TargetType;

/// A target type submitted to the distributed collection via `inventory`.
///
/// ```rust,ignore
/// fn send_email() -> TargetType {
///     TargetType::of::<SendEmail>()
/// }
///
/// inventory::submit! { TargetRegistration::new(send_email) }
///
/// let registry = Registry::builder().collect().build()?;
/// ```
pub struct TargetRegistration {
    factory: fn() -> TargetType,
}

impl TargetRegistration {
    /// Register the target type produced by `factory`.
    pub const fn new(factory: fn() -> TargetType) -> Self {
        Self { factory }
    }

    /// Build the target type.
    pub fn target(&self) -> TargetType {
        (self.factory)()
    }
}

inventory::collect!(TargetRegistration);

impl RegistryBuilder {
    /// Register every target type submitted with `inventory::submit!`.
    pub fn collect(self) -> Self {
        inventory::iter::<TargetRegistration>
            .into_iter()
            .fold(self, |builder, registration| {
                builder.register(registration.target())
            })
    }
}
