//! Error types for the construct-and-invoke protocol.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ArgumentError`] - The built-in "invalid arguments" kind
//! - [`Failure`] - What constructors and invocation operations return
//! - [`ConstructionError`] - An [`ArgumentError`] raised while constructing
//! - [`MissingOperationError`] - The instance has no invocation operation
//! - [`CallableError`] - Top-level error returned by a dispatch

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The built-in "invalid arguments" error kind.
///
/// Raised when a constructor cannot accept the supplied argument set: wrong
/// number of positional values, a missing or unknown keyword, a value of the
/// wrong shape. It is the only kind a dispatch ever turns into a
/// [`ConstructionError`].
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ArgumentError {
    message: String,
    trace: Arc<Backtrace>,
}

impl ArgumentError {
    /// Create a new argument error, capturing a backtrace at the call site.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Arc::new(Backtrace::capture()),
        }
    }

    /// `wrong number of arguments (given 0, expected 1)`.
    pub fn wrong_arity(given: usize, expected: impl fmt::Display) -> Self {
        Self::new(format!(
            "wrong number of arguments (given {given}, expected {expected})"
        ))
    }

    /// `missing keyword: :x` or `missing keywords: :x, :y`.
    pub fn missing_keywords<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(keyword_message("missing", names))
    }

    /// `unknown keyword: :x` or `unknown keywords: :x, :y`.
    pub fn unknown_keywords<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(keyword_message("unknown", names))
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The backtrace captured where the error was raised.
    ///
    /// Only populated when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it.
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }
}

fn keyword_message<S: AsRef<str>>(prefix: &str, names: &[S]) -> String {
    let plural = if names.len() == 1 { "" } else { "s" };
    let list = names
        .iter()
        .map(|n| format!(":{}", n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{prefix} keyword{plural}: {list}")
}

/// A failure raised by a constructor or an invocation operation.
///
/// The two variants are the explicit error-kind enumeration the dispatcher
/// matches on. Only [`Failure::InvalidArguments`] raised by a constructor is
/// ever reclassified; a caller-defined error always travels as
/// [`Failure::Custom`], even when it describes bad arguments too.
#[derive(Error, Debug)]
pub enum Failure {
    /// The built-in "invalid arguments" kind.
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    /// Any other error, including caller-defined refinements of
    /// "invalid arguments".
    #[error(transparent)]
    Custom(BoxError),
}

impl Failure {
    /// Wrap a caller-defined error.
    pub fn custom<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Failure::Custom(Box::new(error))
    }

    /// Shorthand for a built-in argument error with the given message.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Failure::InvalidArguments(ArgumentError::new(message))
    }

    /// Shorthand for an untyped custom error carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Failure::Custom(message.into())
    }

    /// Returns `true` for the built-in "invalid arguments" kind only.
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, Failure::InvalidArguments(_))
    }

    /// Downcast a custom error to its concrete type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Failure::Custom(err) => err.downcast_ref::<E>(),
            Failure::InvalidArguments(err) => {
                (err as &(dyn std::error::Error + 'static)).downcast_ref::<E>()
            }
        }
    }
}

impl From<BoxError> for Failure {
    fn from(err: BoxError) -> Self {
        Failure::Custom(err)
    }
}

/// A constructor rejected its argument set.
///
/// Produced only by the dispatcher, and only from a constructor failure whose
/// kind is exactly [`ArgumentError`].
#[derive(Error, Debug)]
#[error("Cannot instantiate {type_name}: {message}")]
pub struct ConstructionError {
    type_name: String,
    message: String,
    #[source]
    source: ArgumentError,
}

impl ConstructionError {
    /// Wrap an argument error raised while constructing `type_name`.
    pub fn new(type_name: impl Into<String>, source: ArgumentError) -> Self {
        Self {
            type_name: type_name.into(),
            message: source.message().to_owned(),
            source,
        }
    }

    /// Name of the type that could not be constructed.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Message of the original argument error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original argument error, backtrace included.
    pub fn original(&self) -> &ArgumentError {
        &self.source
    }
}

/// The constructed instance exposes no invocation operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{type_name} must implement call")]
pub struct MissingOperationError {
    type_name: String,
}

impl MissingOperationError {
    /// Create a new error for the given type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Name of the offending type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Top-level error type returned by a dispatch.
#[derive(Error, Debug)]
pub enum CallableError {
    /// The constructor raised the built-in "invalid arguments" kind.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// The constructed instance has no invocation operation.
    #[error(transparent)]
    MissingOperation(#[from] MissingOperationError),

    /// Any other failure from either phase, untouched.
    #[error(transparent)]
    Failed(#[from] Failure),
}

impl CallableError {
    /// Returns `true` if this is a [`ConstructionError`].
    pub fn is_construction(&self) -> bool {
        matches!(self, CallableError::Construction(_))
    }

    /// The propagated failure, if this error is one.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            CallableError::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Downcast a propagated failure to a concrete error type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.failure().and_then(Failure::downcast_ref)
    }
}
