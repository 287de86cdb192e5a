//! Static dispatch: the three steps of a construct-and-invoke call.
//!
//! - [`ArgumentForwarder`] - hands caller arguments to the constructor
//! - [`ConstructionErrorTranslator`] - reclassifies rejected constructor arguments
//! - [`CallbackRouter`] - decides whether the invocation operation gets the callback
//! - [`Dispatcher`] - runs them in order

pub mod dispatcher;
pub mod forwarder;
pub mod router;
pub mod translator;

pub use dispatcher::{Dispatcher, invoke};
pub use forwarder::ArgumentForwarder;
pub use router::{CallbackRouter, Delivery};
pub use translator::ConstructionErrorTranslator;
