//! The optional trailing callback.
//!
//! A [`Callback`] borrows a caller-owned `FnMut` for the duration of one
//! dispatch. Constructors and invocation operations hand it [`Yield`]s: either
//! a plain [`Value`] or a mutable reference to some target (typically the
//! instance under construction, so the caller can configure it).
//!
//! ```rust
//! use callable_core::{Callback, Yield};
//!
//! let mut seen = Vec::new();
//! let mut sink = |y: Yield<'_>| {
//!     if let Some(v) = y.value() {
//!         seen.push(v.clone());
//!     }
//! };
//! let mut callback = Callback::new(&mut sink);
//! callback.yield_value("init");
//! callback.reborrow().yield_value("call");
//! drop(callback);
//! assert_eq!(seen, vec!["init", "call"]);
//! ```

use crate::args::Value;
use std::any::Any;
use std::fmt;

/// What a constructor or an invocation operation yields to the callback.
pub enum Yield<'a> {
    /// A plain value.
    Value(Value),
    /// A mutable reference to a yielded target.
    Target(&'a mut dyn Any),
}

impl<'a> Yield<'a> {
    /// The yielded value, if this is one.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Yield::Value(value) => Some(value),
            Yield::Target(_) => None,
        }
    }

    /// Take the yielded value, if this is one.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Yield::Value(value) => Some(value),
            Yield::Target(_) => None,
        }
    }

    /// The yielded target, if it has type `T`.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        match self {
            Yield::Target(target) => target.downcast_mut::<T>(),
            Yield::Value(_) => None,
        }
    }
}

impl fmt::Debug for Yield<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Yield::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Yield::Target(_) => f.write_str("Target(..)"),
        }
    }
}

/// A borrowed caller callback.
pub struct Callback<'a> {
    inner: &'a mut dyn FnMut(Yield<'_>),
}

impl<'a> Callback<'a> {
    /// Borrow a closure as a callback.
    pub fn new(inner: &'a mut dyn FnMut(Yield<'_>)) -> Self {
        Self { inner }
    }

    /// Yield a value.
    pub fn yield_value(&mut self, value: impl Into<Value>) {
        (self.inner)(Yield::Value(value.into()));
    }

    /// Yield a mutable reference to `target`.
    pub fn yield_target<T: Any>(&mut self, target: &mut T) {
        (self.inner)(Yield::Target(target));
    }

    /// A shorter-lived handle to the same closure.
    ///
    /// Used to lend the callback to a constructor while keeping it for the
    /// invocation operation.
    pub fn reborrow(&mut self) -> Callback<'_> {
        Callback {
            inner: &mut *self.inner,
        }
    }
}

impl fmt::Debug for Callback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
