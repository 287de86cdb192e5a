//! Declared arity of an invocation operation.

use std::fmt;

/// The value parameters an invocation operation declares.
///
/// The callback slot is never counted. Parameters with defaults are: an
/// operation shaped `call(extra = null)` has an arity of one even though the
/// dispatcher never supplies `extra`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Arity {
    required: usize,
    optional: usize,
}

impl Arity {
    /// No value parameters; the operation may still take the callback.
    pub const NONE: Self = Self::new(0, 0);

    /// `required` mandatory and `optional` defaulted value parameters.
    pub const fn new(required: usize, optional: usize) -> Self {
        Self { required, optional }
    }

    /// `n` mandatory value parameters.
    pub const fn required(n: usize) -> Self {
        Self::new(n, 0)
    }

    /// `n` defaulted value parameters.
    pub const fn optional(n: usize) -> Self {
        Self::new(0, n)
    }

    /// Mandatory value parameters.
    pub const fn required_count(&self) -> usize {
        self.required
    }

    /// Defaulted value parameters.
    pub const fn optional_count(&self) -> usize {
        self.optional
    }

    /// All declared value parameters.
    pub const fn declared(&self) -> usize {
        self.required + self.optional
    }

    /// Returns `true` when no value parameter is declared.
    pub const fn is_nullary(&self) -> bool {
        self.declared() == 0
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.required, self.optional) {
            (r, 0) => write!(f, "{r}"),
            (r, o) => write!(f, "{r}..{}", r + o),
        }
    }
}
