//! # callable-std
//!
//! Dispatcher and standard implementations for the construct-and-invoke
//! protocol.
//!
//! This crate provides:
//! - **Static dispatch**: [`Dispatcher`], [`invoke`], [`CallableExt`]
//! - **Dynamic dispatch**: [`Registry`], [`TargetType`]
//! - **Testing helpers**: [`testing::Recorder`], [`testing::Counted`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use callable_core;

// Modules
pub mod dispatch;
pub mod dynamic;
pub mod ext;
pub mod testing;

pub use dispatch::{Dispatcher, invoke};
pub use dynamic::{Registry, TargetType};
pub use ext::CallableExt;

#[cfg(feature = "inventory")]
pub use inventory;
