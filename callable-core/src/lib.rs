//! # callable-core
//!
//! Core traits and error types for the construct-and-invoke protocol.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! libraries that only define callable types and don't need the dispatcher
//! from `callable-std`.
//!
//! # The protocol
//!
//! A callable type exposes a constructor and an invocation operation. A single
//! entry point builds an instance from caller arguments, then invokes it:
//!
//! - **Arguments** ([`Args`], [`Params`]): positional and named values are
//!   forwarded to the constructor as they were supplied. Constructors bind them
//!   against a [`ParamSpec`].
//! - **Errors** ([`Failure`]): constructors and operations report either the
//!   built-in [`ArgumentError`] kind or a caller-defined error. Only the former,
//!   raised while constructing, becomes a [`ConstructionError`].
//! - **Callback** ([`Callback`]): an optional caller closure, lent to the
//!   constructor and delivered to the operation only when its [`Arity`] is zero.
//!
//! # Error Types
//!
//! - [`CallableError`] - Top-level error type
//! - [`ConstructionError`] - Rejected constructor arguments
//! - [`MissingOperationError`] - No invocation operation

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod arity;
mod callback;
mod error;
mod params;
mod target;

// Re-exports
pub use args::{Args, NamedArgs, Value};
pub use arity::Arity;
pub use callback::{Callback, Yield};
pub use error::{
    ArgumentError, BoxError, CallableError, ConstructionError, Failure, MissingOperationError,
};
pub use params::{Bound, Expected, Keyword, ParamSpec, Params};
pub use target::{Callable, StaticTarget, Target, short_type_name};
