// src/ducks/composer.rs
//! Interceptor composer
//!
//! Turns a registry of ducks into one middleware. The chain follows registry
//! order: the first duck with an interceptor is the outermost wrapper and
//! sees every action first. Ducks without an interceptor are skipped.

use crate::ducks::registry::DuckRegistry;
use crate::middleware::{chain, Middleware};
use tracing::{debug, trace};

/// Compose the interceptors of every duck in `registry` into one middleware
///
/// The result captures only the filtered list of interceptor factories, so
/// later changes to the registry do not affect it. For a given store it
/// invokes each factory once, left to right, and folds the resulting links
/// right to left around `forward`. With no interceptors it ignores the store
/// and returns `forward` unchanged.
pub fn compose_interceptors<S: 'static, A: 'static>(
    registry: &DuckRegistry<S, A>,
) -> Middleware<S, A> {
    let middlewares: Vec<Middleware<S, A>> = registry
        .iter()
        .filter_map(|(key, duck)| {
            let middleware = duck.middleware()?;
            trace!("Duck '{}' contributes an interceptor", key);
            Some(middleware.clone())
        })
        .collect();

    debug!(
        "Composed {} interceptors from {} ducks",
        middlewares.len(),
        registry.len()
    );

    chain(middlewares)
}
