//! # callable - Construct-and-Invoke for Rust types
//!
//! `callable` lets a type be used as if it were a function: a single entry
//! point builds an instance from the caller's arguments and immediately runs
//! its invocation operation, returning the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use callable::{Args, Callable, CallableExt, Callback, Failure, ParamSpec, Params};
//!
//! struct SendEmail {
//!     to: String,
//! }
//!
//! impl Callable for SendEmail {
//!     type Output = String;
//!
//!     fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
//!         let bound = params.bind(&ParamSpec::positional(1, 0))?;
//!         Ok(SendEmail { to: bound.arg(0)? })
//!     }
//!
//!     fn call(self, _: Option<Callback<'_>>) -> Result<String, Failure> {
//!         Ok(format!("sent to {}", self.to))
//!     }
//! }
//!
//! let out = SendEmail::invoke(Args::new().arg("a@example.com")).unwrap();
//! assert_eq!(out, "sent to a@example.com");
//! ```
//!
//! ## Errors
//!
//! Arguments a constructor rejects with the built-in [`ArgumentError`] come
//! back as [`ConstructionError`] naming the type. Every other failure, and
//! every failure of the invocation operation, propagates unchanged inside
//! [`CallableError::Failed`].
//!
//! ## Dynamic Path
//!
//! Types described at runtime are dispatched by name through a
//! [`dynamic::Registry`]. Only there can a type lack an invocation operation
//! ([`MissingOperationError`]).

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use callable_core::{
    Args, ArgumentError, Arity, BoxError, Bound, Callable, CallableError, Callback,
    ConstructionError, Expected, Failure, Keyword, MissingOperationError, NamedArgs, ParamSpec,
    Params, StaticTarget, Target, Value, Yield, short_type_name,
};

// Static dispatch
pub use callable_std::{CallableExt, Dispatcher, invoke};

/// The individual dispatch steps.
pub mod dispatch {
    pub use callable_std::dispatch::{
        ArgumentForwarder, CallbackRouter, ConstructionErrorTranslator, Delivery, Dispatcher,
        invoke,
    };
}

/// Dynamic dispatch support module.
pub mod dynamic {
    #[cfg(feature = "inventory")]
    pub use callable_std::dynamic::TargetRegistration;
    pub use callable_std::dynamic::{
        DynInstance, Registry, RegistryBuilder, RegistryError, TargetType, TargetTypeBuilder,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use callable_std::testing::*;
}

/// Prelude module - common imports for callable.
///
/// # Usage
///
/// ```rust,ignore
/// use callable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Args, ArgumentError, Arity, Callable, CallableError, CallableExt, Callback, Failure,
        Keyword, ParamSpec, Params, Value, Yield,
    };
}

#[cfg(feature = "macros")]
pub use callable_macros::service;

#[cfg(feature = "inventory")]
pub use inventory;
