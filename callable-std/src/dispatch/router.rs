//! Callback routing.

use callable_core::{Arity, Callback};

/// Where a supplied callback ends up after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// No callback was supplied.
    NoCallback,
    /// Delivered to the invocation operation.
    Operation,
    /// Kept from the invocation operation; only the constructor saw it.
    Withheld,
}

/// Decides from the invocation operation's declared arity whether it gets the
/// callback.
///
/// The callback slot is not a value parameter, so an operation whose only
/// parameter is the (optional) callback counts as nullary. Value parameters
/// with defaults do count.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackRouter;

impl CallbackRouter {
    /// The routing decision alone.
    pub fn decide(arity: Arity, has_callback: bool) -> Delivery {
        match (has_callback, arity.is_nullary()) {
            (false, _) => Delivery::NoCallback,
            (true, true) => Delivery::Operation,
            (true, false) => Delivery::Withheld,
        }
    }

    /// Route `callback`, returning the decision and what the operation receives.
    pub fn route(arity: Arity, callback: Option<Callback<'_>>) -> (Delivery, Option<Callback<'_>>) {
        let delivery = Self::decide(arity, callback.is_some());
        match delivery {
            Delivery::Operation => (delivery, callback),
            Delivery::NoCallback | Delivery::Withheld => (delivery, None),
        }
    }
}
