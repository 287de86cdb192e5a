//! Runtime-described target types.

use callable_core::{
    Arity, Callable, Callback, Failure, MissingOperationError, Params, Target, Value,
};
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// A type-erased instance.
pub type DynInstance = Box<dyn Any>;

type Constructor =
    Box<dyn Fn(Params, Option<Callback<'_>>) -> Result<DynInstance, Failure> + Send + Sync>;
type Operation =
    Box<dyn Fn(DynInstance, Option<Callback<'_>>) -> Result<Value, Failure> + Send + Sync>;

/// A target type described at runtime.
///
/// Unlike a [`Callable`], a `TargetType` may be defined without an invocation
/// operation; dispatching it then fails with
/// [`MissingOperationError`](callable_core::MissingOperationError).
/// Outputs are serialized to [`Value`].
pub struct TargetType {
    name: String,
    constructor: Constructor,
    operation: Option<(Arity, Operation)>,
}

impl TargetType {
    /// Start describing a type whose instances are `I`.
    pub fn builder<I, F>(name: impl Into<String>, constructor: F) -> TargetTypeBuilder<I>
    where
        I: Any,
        F: Fn(Params, Option<Callback<'_>>) -> Result<I, Failure> + Send + Sync + 'static,
    {
        let erased = move |params: Params, callback: Option<Callback<'_>>| {
            constructor(params, callback)
                .map(|instance| Box::new(instance) as DynInstance)
        };
        let constructor: Constructor = Box::new(erased);
        TargetTypeBuilder {
            name: name.into(),
            constructor,
            operation: None,
            _instance: PhantomData,
        }
    }

    /// Describe the callable type `T`.
    pub fn of<T>() -> Self
    where
        T: Callable,
        T::Output: Serialize,
    {
        Self::builder(T::name(), T::construct)
            .operation(T::ARITY, T::call)
            .build()
    }

    /// The type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared arity of the invocation operation, if there is one.
    pub fn arity(&self) -> Option<Arity> {
        self.operation.as_ref().map(|(arity, _)| *arity)
    }
}

impl fmt::Debug for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetType")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

impl Target for TargetType {
    type Instance = DynInstance;
    type Output = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn construct(
        &self,
        params: Params,
        callback: Option<Callback<'_>>,
    ) -> Result<DynInstance, Failure> {
        (self.constructor)(params, callback)
    }

    fn operation(&self, _instance: &DynInstance) -> Option<Arity> {
        self.arity()
    }

    fn invoke(
        &self,
        instance: DynInstance,
        callback: Option<Callback<'_>>,
    ) -> Result<Value, Failure> {
        match &self.operation {
            Some((_, operation)) => operation(instance, callback),
            None => Err(Failure::custom(MissingOperationError::new(&self.name))),
        }
    }
}

/// Builder returned by [`TargetType::builder`].
pub struct TargetTypeBuilder<I> {
    name: String,
    constructor: Constructor,
    operation: Option<(Arity, Operation)>,
    _instance: PhantomData<fn() -> I>,
}

impl<I: Any> TargetTypeBuilder<I> {
    /// Give instances an invocation operation with the declared `arity`.
    pub fn operation<O, F>(mut self, arity: Arity, operation: F) -> Self
    where
        O: Serialize,
        F: Fn(I, Option<Callback<'_>>) -> Result<O, Failure> + Send + Sync + 'static,
    {
        let name = self.name.clone();
        let erased = move |instance: DynInstance, callback: Option<Callback<'_>>| {
            let Ok(instance) = instance.downcast::<I>() else {
                let message = format!("{name} received an instance of another type");
                return Err(Failure::msg(message));
            };
            let output = operation(*instance, callback)?;
            serde_json::to_value(output).map_err(Failure::custom)
        };
        let operation: Operation = Box::new(erased);
        self.operation = Some((arity, operation));
        self
    }

    /// Finish the description.
    pub fn build(self) -> TargetType {
        TargetType {
            name: self.name,
            constructor: self.constructor,
            operation: self.operation,
        }
    }
}
