//! Testing utilities for callable types.
//!
//! This module provides utilities to make testing constructors, invocation
//! operations and callbacks easier.
//!
//! # Features
//!
//! - [`Recorder`]: A callback sink that records every yielded value
//! - [`Counted`]: A target wrapper that counts constructions and invocations

use callable_core::{Arity, Callback, Failure, Params, Target, Value, Yield};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recorder
// ============================================================================

/// Records the values yielded to a callback.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Recorder::new();
/// let mut sink = recorder.sink();
///
/// DoubleYield::invoke_with(Args::new(), Callback::new(&mut sink))?;
///
/// assert_eq!(recorder.events(), vec![json!("init"), json!("call")]);
/// ```
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Value>>>,
    targets: Arc<AtomicUsize>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A closure to lend as a [`Callback`].
    ///
    /// Values are recorded; yielded targets are only counted.
    pub fn sink(&self) -> impl FnMut(Yield<'_>) + 'static {
        let events = self.events.clone();
        let targets = self.targets.clone();
        move |yielded: Yield<'_>| match yielded.into_value() {
            Some(value) => events.lock().unwrap().push(value),
            None => {
                targets.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Get a clone of the recorded values.
    pub fn events(&self) -> Vec<Value> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Get the number of yielded targets.
    pub fn target_count(&self) -> usize {
        self.targets.load(Ordering::SeqCst)
    }

    /// Clear all recorded values.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
        self.targets.store(0, Ordering::SeqCst);
    }
}

// ============================================================================
// Counted
// ============================================================================

/// A target that counts how often its inner target is constructed and invoked.
///
/// # Example
///
/// ```rust,ignore
/// let counted = Counted::new(StaticTarget::<NoParams>::new());
/// Dispatcher::new(&counted).invoke(Args::new(), None)?;
///
/// assert_eq!(counted.constructions(), 1);
/// assert_eq!(counted.invocations(), 1);
/// ```
pub struct Counted<T> {
    inner: T,
    constructions: AtomicUsize,
    invocations: AtomicUsize,
}

impl<T> Counted<T> {
    /// Wrap `inner`.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            constructions: AtomicUsize::new(0),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Constructor calls so far, failed ones included.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    /// Invocation calls so far, failed ones included.
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    /// Reset both counters.
    pub fn reset(&self) {
        self.constructions.store(0, Ordering::SeqCst);
        self.invocations.store(0, Ordering::SeqCst);
    }
}

impl<T: Target> Target for Counted<T> {
    type Instance = T::Instance;
    type Output = T::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn construct(
        &self,
        params: Params,
        callback: Option<Callback<'_>>,
    ) -> Result<Self::Instance, Failure> {
        self.constructions.fetch_add(1, Ordering::SeqCst);
        self.inner.construct(params, callback)
    }

    fn operation(&self, instance: &Self::Instance) -> Option<Arity> {
        self.inner.operation(instance)
    }

    fn invoke(
        &self,
        instance: Self::Instance,
        callback: Option<Callback<'_>>,
    ) -> Result<Self::Output, Failure> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.inner.invoke(instance, callback)
    }
}
