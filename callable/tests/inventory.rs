//! Distributed registration of target types.

#![cfg(feature = "inventory")]

mod common;

use callable::dynamic::{Registry, TargetRegistration, TargetType};
use callable::{Args, CallableExt};
use common::{NoParams, PositionalOpt};
use serde_json::json;

fn no_params() -> TargetType {
    TargetType::of::<NoParams>()
}

fn positional_opt() -> TargetType {
    TargetType::of::<PositionalOpt>()
}

callable::inventory::submit! { TargetRegistration::new(no_params) }
callable::inventory::submit! { TargetRegistration::new(positional_opt) }

#[test]
fn test_collected_registry() {
    let registry = Registry::builder().collect().build().unwrap();

    assert!(registry.contains("NoParams"));
    assert_eq!(
        registry.invoke("PositionalOpt", Args::new(), None).unwrap(),
        json!(5)
    );
    assert_eq!(
        registry.invoke("NoParams", Args::new(), None).unwrap(),
        json!(NoParams::invoke(Args::new()).unwrap())
    );
}
