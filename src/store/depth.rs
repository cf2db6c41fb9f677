// src/store/depth.rs
//! Per-store, per-thread dispatch nesting guard
//!
//! Middleware that re-dispatches without a stop condition would otherwise
//! recurse until the thread's stack overflows. Depth is counted separately for
//! each store, so dispatching into another store from a handler does not count
//! against that store's limit.

use crate::utils::errors::{DucksError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::warn;

thread_local! {
    /// Active dispatch depth keyed by store address; entries at zero are removed
    static DISPATCH_DEPTH: RefCell<HashMap<usize, usize>> = RefCell::new(HashMap::new());
}

/// Held for the duration of one dispatch; decrements the depth on drop
pub(crate) struct DepthGuard {
    key: usize,
    // Tied to the thread whose counter it incremented
    _not_send: PhantomData<*const ()>,
}

/// Enter one more level of dispatch on store `key`, failing once `limit`
/// levels are active for that store
pub(crate) fn enter(key: usize, limit: usize) -> Result<DepthGuard> {
    DISPATCH_DEPTH.with(|depths| {
        let mut depths = depths.borrow_mut();
        let depth = depths.entry(key).or_insert(0);
        if *depth >= limit {
            warn!("Dispatch depth limit of {} reached", limit);
            if *depth == 0 {
                depths.remove(&key);
            }
            return Err(DucksError::DispatchDepthExceeded { limit });
        }

        *depth += 1;
        Ok(DepthGuard {
            key,
            _not_send: PhantomData,
        })
    })
}

/// Number of dispatches currently active for store `key` on this thread
pub(crate) fn current_depth(key: usize) -> usize {
    DISPATCH_DEPTH.with(|depths| depths.borrow().get(&key).copied().unwrap_or(0))
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DISPATCH_DEPTH.with(|depths| {
            let mut depths = depths.borrow_mut();
            if let Some(depth) = depths.get_mut(&self.key) {
                *depth = depth.saturating_sub(1);
                if *depth == 0 {
                    depths.remove(&self.key);
                }
            }
        });
    }
}
