// src/middleware/handler.rs
//! The three stages of a middleware chain
//!
//! ```text
//! Middleware  (&MiddlewareApi) -> Link      once per store
//! Link        (forward Handler) -> Handler  once per chain build
//! Handler     (action) -> Result<action>    once per dispatch
//! ```
//!
//! All three are `Arc`-backed closures, so cloning is cheap and the chain
//! can be shared across threads.

use crate::store::MiddlewareApi;
use crate::utils::errors::Result;
use std::fmt;
use std::sync::Arc;

type HandlerFn<A> = dyn Fn(A) -> Result<A> + Send + Sync;
type LinkFn<A> = dyn Fn(Handler<A>) -> Handler<A> + Send + Sync;
type MiddlewareFn<S, A> = dyn Fn(&MiddlewareApi<S, A>) -> Link<A> + Send + Sync;

/// Receives an action and decides whether, and how often, to forward it
pub struct Handler<A> {
    inner: Arc<HandlerFn<A>>,
}

impl<A: 'static> Handler<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> Result<A> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }
}

impl<A> Handler<A> {
    /// Run the handler for one action
    pub fn call(&self, action: A) -> Result<A> {
        (self.inner)(action)
    }

    /// True when both values share the same underlying closure
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// Wraps the next stage (`forward`) into a new handler
pub struct Link<A> {
    inner: Arc<LinkFn<A>>,
}

impl<A: 'static> Link<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Handler<A>) -> Handler<A> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// `forward -> forward`
    pub fn identity() -> Self {
        Self::new(|forward| forward)
    }
}

impl<A> Link<A> {
    /// Build the handler that sits in front of `forward`
    pub fn wrap(&self, forward: Handler<A>) -> Handler<A> {
        (self.inner)(forward)
    }
}

impl<A> Clone for Link<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Link<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link").finish_non_exhaustive()
    }
}

/// Interceptor factory: turns a store capability handle into a [`Link`]
///
/// The factory runs once per store creation. Handlers that need to read state
/// or dispatch later keep a clone of the API handle.
pub struct Middleware<S, A> {
    inner: Arc<MiddlewareFn<S, A>>,
}

impl<S: 'static, A: 'static> Middleware<S, A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&MiddlewareApi<S, A>) -> Link<A> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Ignores the store and forwards every action untouched
    pub fn passthrough() -> Self {
        Self::new(|_api| Link::identity())
    }
}

impl<S, A> Middleware<S, A> {
    /// Invoke the factory against a store
    pub fn materialize(&self, api: &MiddlewareApi<S, A>) -> Link<A> {
        (self.inner)(api)
    }
}

impl<S, A> Clone for Middleware<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for Middleware<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::DucksError;

    #[test]
    fn test_handler_call() {
        let handler = Handler::new(|action: u32| Ok(action * 2));
        assert_eq!(handler.call(21).unwrap(), 42);
    }

    #[test]
    fn test_handler_error() {
        let handler = Handler::new(|_action: u32| {
            Err(DucksError::InterceptionFailed("nope".to_string()))
        });
        assert!(matches!(
            handler.call(1),
            Err(DucksError::InterceptionFailed(_))
        ));
    }

    #[test]
    fn test_identity_link_returns_forward() {
        let forward = Handler::new(|action: u32| Ok(action));
        let wrapped = Link::identity().wrap(forward.clone());
        assert!(wrapped.ptr_eq(&forward));
    }

    #[test]
    fn test_link_wraps_forward() {
        let link = Link::new(|next: Handler<u32>| {
            Handler::new(move |action: u32| next.call(action + 1))
        });
        let handler = link.wrap(Handler::new(|action: u32| Ok(action * 10)));
        assert_eq!(handler.call(1).unwrap(), 20);
    }
}
