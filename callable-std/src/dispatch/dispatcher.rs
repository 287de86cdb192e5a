//! The construct-and-invoke entry point.

use super::{ArgumentForwarder, CallbackRouter, ConstructionErrorTranslator};
use callable_core::{
    Args, Callable, CallableError, Callback, MissingOperationError, StaticTarget, Target,
};

/// Builds an instance of its target from caller arguments, then invokes it.
///
/// A dispatch moves through two phases and ends at the first unhandled
/// failure:
///
/// 1. **Constructing**: arguments go through [`ArgumentForwarder`] under the
///    guard of [`ConstructionErrorTranslator`]. The callback, if any, is lent
///    to the constructor.
/// 2. **Invoking**: the instance must expose an invocation operation, else
///    [`MissingOperationError`]. [`CallbackRouter`] decides whether the
///    operation receives the callback. Its result or failure is returned as
///    is.
///
/// The dispatcher owns nothing mutable; one value can serve concurrent
/// dispatches from several threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher<T> {
    target: T,
}

impl<T: Callable> Dispatcher<StaticTarget<T>> {
    /// A dispatcher for the callable type `T`.
    pub const fn of() -> Self {
        Self {
            target: StaticTarget::new(),
        }
    }
}

impl<T: Target> Dispatcher<T> {
    /// A dispatcher for `target`.
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// The dispatch target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Construct one instance from `args` and invoke it.
    pub fn invoke(
        &self,
        args: Args,
        mut callback: Option<Callback<'_>>,
    ) -> Result<T::Output, CallableError> {
        let name = self.target.name();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target_name = name,
            positional = args.positional().len(),
            named = args.named_args().len(),
            callback = callback.is_some(),
            "dispatching"
        );

        let lent = callback.as_mut().map(Callback::reborrow);
        let instance = ConstructionErrorTranslator::guard(
            name,
            ArgumentForwarder::forward(&self.target, args, lent),
        )?;

        let Some(arity) = self.target.operation(&instance) else {
            return Err(MissingOperationError::new(name).into());
        };

        let (_delivery, callback) = CallbackRouter::route(arity, callback);

        #[cfg(feature = "tracing")]
        tracing::trace!(target_name = name, %arity, delivery = ?_delivery, "invoking");

        self.target
            .invoke(instance, callback)
            .map_err(CallableError::Failed)
    }
}

/// Construct and invoke the callable type `T`.
///
/// # Example
///
/// ```rust
/// use callable_core::{Args, Callable, Callback, Failure, ParamSpec, Params};
///
/// struct Greet(String);
///
/// impl Callable for Greet {
///     type Output = String;
///
///     fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
///         let bound = params.bind(&ParamSpec::positional(1, 0))?;
///         Ok(Greet(bound.arg(0)?))
///     }
///
///     fn call(self, _: Option<Callback<'_>>) -> Result<String, Failure> {
///         Ok(format!("hello {}", self.0))
///     }
/// }
///
/// let out = callable_std::invoke::<Greet>(Args::new().arg("world"), None).unwrap();
/// assert_eq!(out, "hello world");
/// ```
pub fn invoke<T: Callable>(
    args: Args,
    callback: Option<Callback<'_>>,
) -> Result<T::Output, CallableError> {
    Dispatcher::<StaticTarget<T>>::of().invoke(args, callback)
}
