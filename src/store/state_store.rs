// src/store/state_store.rs
//! Synchronous state container with a middleware-wrapped dispatch
//!
//! The store owns the state and the reducer. Its dispatch is built once, at
//! creation, by wrapping the reducer step with the enhancer's middleware.
//! Middleware receives a [`MiddlewareApi`] that only holds a weak reference,
//! so the chain never keeps its own store alive.

use crate::action::Action;
use crate::middleware::Handler;
use crate::store::depth;
use crate::store::enhancer::StoreEnhancer;
use crate::utils::config::StoreConfig;
use crate::utils::errors::{DucksError, Result};
use metrics::counter;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Computes the next state from the current state and an action
pub type Reducer<S, A> = Arc<dyn Fn(&S, &A) -> S + Send + Sync>;

struct StoreInner<S, A> {
    config: StoreConfig,
    state: RwLock<S>,
    reducer: Reducer<S, A>,
    /// Filled once the middleware chain has been materialized
    dispatcher: OnceCell<Handler<A>>,
}

impl<S, A: Action> StoreInner<S, A> {
    fn dispatch(&self, action: A) -> Result<A> {
        let dispatcher = self
            .dispatcher
            .get()
            .ok_or(DucksError::DispatchDuringConstruction)?;

        let _depth = depth::enter(self.depth_key(), self.config.max_dispatch_depth)?;

        counter!("ducks_store_dispatches_total", "store" => self.config.name.clone()).increment(1);
        if self.config.trace_actions {
            trace!(
                store = %self.config.name,
                action_type = action.action_type(),
                depth = depth::current_depth(self.depth_key()),
                "Dispatching action"
            );
        }

        dispatcher.call(action)
    }

    /// Identifies this store in the per-thread depth table
    fn depth_key(&self) -> usize {
        self as *const Self as *const () as usize
    }

    fn reduce(&self, action: A) -> Result<A> {
        let mut state = self.state.write();
        let next = (self.reducer)(&*state, &action);
        *state = next;
        Ok(action)
    }
}

/// Unidirectional state store
pub struct Store<S, A> {
    inner: Arc<StoreInner<S, A>>,
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Action + 'static,
{
    /// Store without middleware: dispatch goes straight to the reducer
    pub fn new<R>(reducer: R, initial: S) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Self::create(reducer, initial, None, StoreConfig::default())
    }

    pub fn with_enhancer<R>(reducer: R, initial: S, enhancer: StoreEnhancer<S, A>) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Self::create(reducer, initial, Some(enhancer), StoreConfig::default())
    }

    /// Create a store, materializing the enhancer's middleware exactly once
    ///
    /// Middleware factories run synchronously here. A factory may read state
    /// through its API handle, but dispatching fails until creation returns.
    pub fn create<R>(
        reducer: R,
        initial: S,
        enhancer: Option<StoreEnhancer<S, A>>,
        config: StoreConfig,
    ) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        let inner = Arc::new(StoreInner {
            config,
            state: RwLock::new(initial),
            reducer: Arc::new(reducer),
            dispatcher: OnceCell::new(),
        });

        let base = Self::base_dispatch(Arc::downgrade(&inner));
        let dispatcher = match enhancer {
            Some(enhancer) => {
                let api = MiddlewareApi::new(Arc::downgrade(&inner));
                enhancer.enhance(&api, base)
            }
            None => base,
        };

        // Only this constructor fills the cell
        let _ = inner.dispatcher.set(dispatcher);

        debug!("Created store '{}'", inner.config.name);
        Self { inner }
    }

    fn base_dispatch(store: Weak<StoreInner<S, A>>) -> Handler<A> {
        Handler::new(move |action: A| {
            let store = store.upgrade().ok_or(DucksError::StoreDropped)?;
            store.reduce(action)
        })
    }

    /// Send an action through the middleware chain
    pub fn dispatch(&self, action: A) -> Result<A> {
        self.inner.dispatch(action)
    }

    /// Run `f` against the current state without cloning it
    ///
    /// `f` runs under the state read lock. It must not dispatch to this store:
    /// the reducer's write lock would wait on that read lock forever.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.inner.state.read())
    }

    /// Snapshot of the current state
    pub fn get_state(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.read().clone()
    }

    /// Capability handle equivalent to the one middleware receives
    pub fn api(&self) -> MiddlewareApi<S, A> {
        MiddlewareApi::new(Arc::downgrade(&self.inner))
    }
}

impl<S, A> Store<S, A> {
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Store capabilities handed to middleware: state reads and re-entrant dispatch
pub struct MiddlewareApi<S, A> {
    store: Weak<StoreInner<S, A>>,
}

impl<S, A> MiddlewareApi<S, A> {
    fn new(store: Weak<StoreInner<S, A>>) -> Self {
        Self { store }
    }

    fn upgrade(&self) -> Result<Arc<StoreInner<S, A>>> {
        self.store.upgrade().ok_or(DucksError::StoreDropped)
    }

    /// Snapshot of the store's current state
    pub fn get_state(&self) -> Result<S>
    where
        S: Clone,
    {
        let store = self.upgrade()?;
        let state = store.state.read().clone();
        Ok(state)
    }

    /// Run `f` against the current state without cloning it
    ///
    /// `f` runs under the state read lock. Calling [`MiddlewareApi::dispatch`]
    /// from inside `f` deadlocks once the reducer takes the write lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R> {
        let store = self.upgrade()?;
        let result = f(&*store.state.read());
        Ok(result)
    }
}

impl<S, A: Action> MiddlewareApi<S, A> {
    /// Dispatch through the whole chain, starting at the outermost middleware
    pub fn dispatch(&self, action: A) -> Result<A> {
        self.upgrade()?.dispatch(action)
    }
}

impl<S, A> Clone for MiddlewareApi<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
        }
    }
}

impl<S, A> fmt::Debug for MiddlewareApi<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareApi")
            .field("alive", &(self.store.strong_count() > 0))
            .finish()
    }
}
