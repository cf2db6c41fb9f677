// src/store/enhancer.rs
//! Installing middleware into a store at creation time

use crate::middleware::{chain, Handler, Middleware};
use crate::store::state_store::MiddlewareApi;

/// Wraps a store's base dispatch with a middleware chain
pub struct StoreEnhancer<S, A> {
    middleware: Middleware<S, A>,
}

/// Build an enhancer from middlewares, outermost first
pub fn apply_middleware<S: 'static, A: 'static>(
    middlewares: Vec<Middleware<S, A>>,
) -> StoreEnhancer<S, A> {
    StoreEnhancer {
        middleware: chain(middlewares),
    }
}

impl<S, A> StoreEnhancer<S, A> {
    /// Materialize the middleware for one store and wrap `dispatch`
    pub(crate) fn enhance(&self, api: &MiddlewareApi<S, A>, dispatch: Handler<A>) -> Handler<A> {
        self.middleware.materialize(api).wrap(dispatch)
    }

    pub fn middleware(&self) -> &Middleware<S, A> {
        &self.middleware
    }
}

impl<S, A> From<Middleware<S, A>> for StoreEnhancer<S, A> {
    fn from(middleware: Middleware<S, A>) -> Self {
        Self { middleware }
    }
}

impl<S, A> Clone for StoreEnhancer<S, A> {
    fn clone(&self) -> Self {
        Self {
            middleware: self.middleware.clone(),
        }
    }
}
