//! Procedural macros for the `callable` crate.
//!
//! - `#[service]` - turns a plain function into a `Callable` type

use proc_macro::TokenStream;

mod service;

/// Turn a function into a callable type.
///
/// The generated struct is named after the function. Each value parameter
/// becomes a field bound from the caller's arguments; the body becomes the
/// invocation operation.
///
/// # Attributes
///
/// - `name = "SendEmail"` - name of the generated struct
/// - `keywords` - bind parameters by name instead of by position
/// - `arity = 1` - value parameters declared by the invocation operation,
///   which keeps the callback from reaching it
///
/// # Parameters
///
/// - `x: T` - required
/// - `x: Option<T>` - optional; positional ones must come last
/// - `cb: Option<Callback<'_>>` - the invocation operation's callback slot
///
/// # Return type
///
/// - `Result<T, Failure>` - returned as is
/// - any other `Result`, aliases like `io::Result<T>` included - the error is
///   wrapped with `Failure::custom`
/// - anything else - wrapped in `Ok`
///
/// # Example
///
/// ```rust,ignore
/// #[callable::service(name = "Double")]
/// fn double(x: i64) -> i64 {
///     x * 2
/// }
///
/// assert_eq!(Double::invoke(Args::new().arg(4))?, 8);
/// ```
#[proc_macro_attribute]
pub fn service(attr: TokenStream, item: TokenStream) -> TokenStream {
    service::service_impl(attr, item)
}
