// demos/counter.rs
//! Counter store assembled from three ducks
//!
//! Run with `RUST_LOG=ducks_middleware=trace cargo run --example counter`.

use anyhow::Result;
use ducks_middleware::observability::init_tracing;
use ducks_middleware::{
    apply_middleware, compose_interceptors, Action, Duck, DuckRegistry, Handler, Link,
    Middleware, MiddlewareApi, Store, StoreConfig,
};
use serde_json::{json, Value};
use tracing::info;

fn counter(state: &i64, action: &Value) -> i64 {
    match action.action_type() {
        "INCREMENT" => state + 1,
        "DECREMENT" => state - 1,
        _ => *state,
    }
}

/// Logs every action together with the state it was dispatched against
fn logger_duck() -> Duck<i64, Value> {
    Middleware::new(|api: &MiddlewareApi<i64, Value>| {
        let api = api.clone();
        Link::new(move |next: Handler<Value>| {
            let api = api.clone();
            Handler::new(move |action: Value| {
                info!("{} (state before: {})", action, api.get_state()?);
                next.call(action)
            })
        })
    })
    .into()
}

/// Drops decrements that would take the counter below zero
fn floor_duck() -> Duck<i64, Value> {
    Middleware::new(|api: &MiddlewareApi<i64, Value>| {
        let api = api.clone();
        Link::new(move |next: Handler<Value>| {
            let api = api.clone();
            Handler::new(move |action: Value| {
                if action.action_type() == "DECREMENT" && api.get_state()? <= 0 {
                    info!("Blocked {} at floor", action);
                    return Ok(action);
                }
                next.call(action)
            })
        })
    })
    .into()
}

fn main() -> Result<()> {
    init_tracing()?;

    let config = StoreConfig::load()?.with_name("counter");

    let ducks = DuckRegistry::new()
        .with("logger", logger_duck())
        .with("settings", Duck::new())
        .with("floor", floor_duck());

    let middleware = compose_interceptors(&ducks);
    let store = Store::create(counter, 0, Some(apply_middleware(vec![middleware])), config);

    for action in [
        json!({ "type": "INCREMENT" }),
        json!({ "type": "DECREMENT" }),
        json!({ "type": "DECREMENT" }),
        json!({ "type": "INCREMENT" }),
    ] {
        store.dispatch(action)?;
    }

    info!("Final state: {}", store.get_state());
    Ok(())
}
