//! Type-level entry points for callable types.

use crate::dispatch::invoke;
use callable_core::{Args, Callable, CallableError, Callback};

/// Dispatch directly on a callable type: `SendEmail::invoke(args)`.
///
/// Implemented for every [`Callable`].
pub trait CallableExt: Callable {
    /// Construct with `args` and invoke, without a callback.
    fn invoke(args: Args) -> Result<Self::Output, CallableError> {
        invoke::<Self>(args, None)
    }

    /// Construct with `args` and invoke, supplying `callback`.
    fn invoke_with(args: Args, callback: Callback<'_>) -> Result<Self::Output, CallableError> {
        invoke::<Self>(args, Some(callback))
    }

    /// A function that dispatches on this type.
    ///
    /// ```rust,ignore
    /// let results: Vec<_> = batches.into_iter().map(SendEmail::to_fn()).collect();
    /// ```
    fn to_fn() -> impl Fn(Args) -> Result<Self::Output, CallableError> {
        |args: Args| invoke::<Self>(args, None)
    }
}

impl<T: Callable> CallableExt for T {}
