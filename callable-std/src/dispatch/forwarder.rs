//! Argument forwarding.

use callable_core::{Args, Callback, Failure, Params, Target};

/// Builds exactly one instance by forwarding caller arguments unchanged.
///
/// No defaults, coercion or validation happen here. A mismatch between what
/// was supplied and what the constructor accepts surfaces from the constructor
/// itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentForwarder;

impl ArgumentForwarder {
    /// Construct one instance of `target`.
    ///
    /// An empty named map is not forwarded at all: the constructor receives
    /// positional values only, exactly as for a purely positional call.
    pub fn forward<T>(
        target: &T,
        args: Args,
        callback: Option<Callback<'_>>,
    ) -> Result<T::Instance, Failure>
    where
        T: Target + ?Sized,
    {
        let (positional, named) = args.into_parts();
        let params = if named.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target_name = target.name(),
                "forwarding positional values only"
            );
            Params::positional_only(positional)
        } else {
            Params::new(positional, named)
        };
        target.construct(params, callback)
    }
}
