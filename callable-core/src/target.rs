//! # Callable types and dispatch targets
//!
//! [`Callable`] is what a type implements to take part in the protocol: a
//! constructor fed from caller arguments and an invocation operation that
//! consumes the instance.
//!
//! [`Target`] is the seam the dispatcher is written against. Every `Callable`
//! is a target through [`StaticTarget`]; runtime-described types (looked up by
//! name) implement it directly and may lack an invocation operation.

use crate::arity::Arity;
use crate::callback::Callback;
use crate::error::Failure;
use crate::params::Params;
use std::marker::PhantomData;

/// A type that can be constructed from caller arguments and then invoked.
///
/// # Example
///
/// ```rust
/// use callable_core::{Callable, Callback, Failure, ParamSpec, Params};
///
/// struct Double {
///     x: i64,
/// }
///
/// impl Callable for Double {
///     type Output = i64;
///
///     fn construct(params: Params, _callback: Option<Callback<'_>>) -> Result<Self, Failure> {
///         let bound = params.bind(&ParamSpec::positional(1, 0))?;
///         Ok(Double { x: bound.arg(0)? })
///     }
///
///     fn call(self, _callback: Option<Callback<'_>>) -> Result<i64, Failure> {
///         Ok(self.x * 2)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not `Callable`",
    label = "missing `Callable` implementation",
    note = "Callable types must implement `construct` and `call`."
)]
pub trait Callable: Sized + 'static {
    /// What the invocation operation returns.
    type Output;

    /// Declared value parameters of [`Callable::call`].
    ///
    /// The callback only reaches `call` when this is [`Arity::NONE`].
    const ARITY: Arity = Arity::NONE;

    /// Name used in error messages. Defaults to the unqualified type name.
    fn name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Build an instance from caller arguments.
    ///
    /// The callback is lent here whenever the caller supplied one; using it is
    /// up to the type.
    fn construct(params: Params, callback: Option<Callback<'_>>) -> Result<Self, Failure>;

    /// The invocation operation.
    fn call(self, callback: Option<Callback<'_>>) -> Result<Self::Output, Failure>;
}

/// Something the dispatcher can construct and invoke.
pub trait Target {
    /// The constructed instance.
    type Instance;
    /// What the invocation operation returns.
    type Output;

    /// Name used in error messages.
    fn name(&self) -> &str;

    /// Build an instance.
    fn construct(
        &self,
        params: Params,
        callback: Option<Callback<'_>>,
    ) -> Result<Self::Instance, Failure>;

    /// The declared arity of the instance's invocation operation, or `None` if
    /// it has none.
    fn operation(&self, instance: &Self::Instance) -> Option<Arity>;

    /// Run the invocation operation.
    fn invoke(
        &self,
        instance: Self::Instance,
        callback: Option<Callback<'_>>,
    ) -> Result<Self::Output, Failure>;
}

impl<T: Target + ?Sized> Target for &T {
    type Instance = T::Instance;
    type Output = T::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn construct(
        &self,
        params: Params,
        callback: Option<Callback<'_>>,
    ) -> Result<Self::Instance, Failure> {
        (**self).construct(params, callback)
    }

    fn operation(&self, instance: &Self::Instance) -> Option<Arity> {
        (**self).operation(instance)
    }

    fn invoke(
        &self,
        instance: Self::Instance,
        callback: Option<Callback<'_>>,
    ) -> Result<Self::Output, Failure> {
        (**self).invoke(instance, callback)
    }
}

/// Adapts a [`Callable`] type to [`Target`].
pub struct StaticTarget<T>(PhantomData<fn() -> T>);

impl<T> StaticTarget<T> {
    /// Create the adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for StaticTarget<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StaticTarget<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticTarget<T> {}

impl<T: Callable> Target for StaticTarget<T> {
    type Instance = T;
    type Output = T::Output;

    fn name(&self) -> &str {
        T::name()
    }

    fn construct(&self, params: Params, callback: Option<Callback<'_>>) -> Result<T, Failure> {
        T::construct(params, callback)
    }

    fn operation(&self, _instance: &T) -> Option<Arity> {
        Some(T::ARITY)
    }

    fn invoke(&self, instance: T, callback: Option<Callback<'_>>) -> Result<T::Output, Failure> {
        instance.call(callback)
    }
}

/// `std::any::type_name` without the module path or generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
