//! Construction error translation.

use callable_core::{CallableError, ConstructionError, Failure};

/// Guards a constructor call.
///
/// Only the built-in [`Failure::InvalidArguments`] kind is reclassified, into
/// a [`ConstructionError`]. Every other failure, caller-defined refinements of
/// "invalid arguments" included, passes through untouched. Failures of the
/// invocation operation never come through here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructionErrorTranslator;

impl ConstructionErrorTranslator {
    /// Pass a successful construction through, translate a failed one.
    pub fn guard<I>(type_name: &str, result: Result<I, Failure>) -> Result<I, CallableError> {
        result.map_err(|failure| Self::translate(type_name, failure))
    }

    /// Classify a construction failure by its exact kind.
    pub fn translate(type_name: &str, failure: Failure) -> CallableError {
        match failure {
            Failure::InvalidArguments(err) => ConstructionError::new(type_name, err).into(),
            other => CallableError::Failed(other),
        }
    }
}
