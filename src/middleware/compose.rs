// src/middleware/compose.rs
//! Right-to-left composition of links
//!
//! `compose([l0, l1, l2])` wraps `forward` as `l0(l1(l2(forward)))`, so the
//! first link is the outermost and sees every action first.

use crate::middleware::handler::{Link, Middleware};

/// Fold `links` around `forward`, innermost (last) first
///
/// An empty list yields [`Link::identity`].
pub fn compose<A: 'static>(links: Vec<Link<A>>) -> Link<A> {
    if links.is_empty() {
        return Link::identity();
    }

    Link::new(move |forward| {
        links
            .iter()
            .rev()
            .fold(forward, |next, link| link.wrap(next))
    })
}

/// Combine several middlewares into one
///
/// Every factory is materialized left to right against the same API handle,
/// then the links are composed with [`compose`].
pub fn chain<S: 'static, A: 'static>(middlewares: Vec<Middleware<S, A>>) -> Middleware<S, A> {
    if middlewares.is_empty() {
        return Middleware::passthrough();
    }

    Middleware::new(move |api| {
        let links = middlewares
            .iter()
            .map(|middleware| middleware.materialize(api))
            .collect();
        compose(links)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::handler::Handler;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Log = Arc<Mutex<Vec<String>>>;

    fn tracing_link(name: &'static str, log: &Log) -> Link<u32> {
        let log = Arc::clone(log);
        Link::new(move |next: Handler<u32>| {
            let log = Arc::clone(&log);
            Handler::new(move |action: u32| {
                log.lock().push(format!("enter {}", name));
                let result = next.call(action);
                log.lock().push(format!("exit {}", name));
                result
            })
        })
    }

    fn terminal(log: &Log) -> Handler<u32> {
        let log = Arc::clone(log);
        Handler::new(move |action: u32| {
            log.lock().push(format!("forward {}", action));
            Ok(action)
        })
    }

    #[test]
    fn test_compose_empty_is_identity() {
        let log = Log::default();
        let forward = terminal(&log);

        let handler = compose(Vec::new()).wrap(forward.clone());
        assert!(handler.ptr_eq(&forward));
    }

    #[test]
    fn test_compose_order() {
        let log = Log::default();
        let links = vec![
            tracing_link("a", &log),
            tracing_link("b", &log),
            tracing_link("c", &log),
        ];

        let handler = compose(links).wrap(terminal(&log));
        assert_eq!(handler.call(7).unwrap(), 7);

        assert_eq!(
            *log.lock(),
            vec![
                "enter a", "enter b", "enter c", "forward 7", "exit c", "exit b", "exit a"
            ]
        );
    }

    #[test]
    fn test_compose_single_link() {
        let log = Log::default();
        let handler = compose(vec![tracing_link("only", &log)]).wrap(terminal(&log));
        handler.call(1).unwrap();

        assert_eq!(*log.lock(), vec!["enter only", "forward 1", "exit only"]);
    }

    #[test]
    fn test_composed_link_is_reusable() {
        let log = Log::default();
        let link = compose(vec![tracing_link("a", &log)]);

        link.wrap(terminal(&log)).call(1).unwrap();
        link.wrap(terminal(&log)).call(2).unwrap();

        assert_eq!(log.lock().len(), 6);
    }
}
