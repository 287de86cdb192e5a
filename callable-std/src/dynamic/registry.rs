//! Name-indexed registry of target types.

use super::target_type::TargetType;
use crate::dispatch::Dispatcher;
use callable_core::{Args, Callable, CallableError, Callback, Value};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors from registry lookups and dispatches.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No target type is registered under the name.
    #[error("no target type registered as {0}")]
    UnknownTarget(String),

    /// Two target types were registered under the same name.
    #[error("target type already registered: {0}")]
    AlreadyRegistered(String),

    /// The dispatch itself failed.
    #[error(transparent)]
    Call(#[from] CallableError),
}

/// Target types looked up by name at dispatch time.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    targets: HashMap<String, Arc<TargetType>>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The target type registered as `name`.
    pub fn get(&self, name: &str) -> Option<&TargetType> {
        self.targets.get(name).map(Arc::as_ref)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Number of registered target types.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Look up `name`, construct it from `args` and invoke it.
    pub fn invoke(
        &self,
        name: &str,
        args: Args,
        callback: Option<Callback<'_>>,
    ) -> Result<Value, RegistryError> {
        let target = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTarget(name.to_owned()))?;
        Ok(Dispatcher::new(target).invoke(args, callback)?)
    }
}

/// Builder for constructing a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    targets: HashMap<String, Arc<TargetType>>,
    duplicate: Option<String>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target type under its own name.
    pub fn register(mut self, target: TargetType) -> Self {
        let name = target.name().to_owned();
        if self.targets.contains_key(&name) {
            self.duplicate.get_or_insert(name);
        } else {
            self.targets.insert(name, Arc::new(target));
        }
        self
    }

    /// Register the callable type `T`.
    pub fn register_callable<T>(self) -> Self
    where
        T: Callable,
        T::Output: Serialize,
    {
        self.register(TargetType::of::<T>())
    }

    /// Build the registry. Fails on the first name registered twice.
    pub fn build(self) -> Result<Registry, RegistryError> {
        if let Some(name) = self.duplicate {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        Ok(Registry {
            targets: self.targets,
        })
    }
}
