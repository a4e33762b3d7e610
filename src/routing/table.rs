//! # Route Table
//!
//! Method + pattern bindings, built once at startup and read concurrently
//! afterwards.

use axum::http::Method;

use super::errors::{RouteError, RouteResult};
use super::pattern::{split_path, RouteParams, RoutePattern};

/// One registered binding
#[derive(Debug)]
pub struct Route<H> {
    method: Method,
    pattern: RoutePattern,
    handler: H,
}

impl<H> Route<H> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Result of a successful dispatch
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub route: &'a Route<H>,
    pub params: RouteParams,
}

impl<'a, H> RouteMatch<'a, H> {
    pub fn handler(&self) -> &'a H {
        self.route.handler()
    }
}

/// Ordered set of bindings from (method, pattern) to a handler
#[derive(Debug)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `method` + `pattern`.
    ///
    /// Fails if the pattern is malformed or if a binding with the same
    /// method and shape already exists.
    pub fn register(&mut self, method: Method, pattern: &str, handler: H) -> RouteResult<()> {
        let pattern = RoutePattern::parse(pattern)?;

        if let Some(existing) = self
            .routes
            .iter()
            .find(|r| r.method == method && r.pattern.same_shape(&pattern))
        {
            return Err(RouteError::DuplicateRoute {
                method: method.to_string(),
                pattern: pattern.to_string(),
                existing: existing.pattern.to_string(),
            });
        }

        self.routes.push(Route {
            method,
            pattern,
            handler,
        });
        Ok(())
    }

    /// Find the binding for a request.
    ///
    /// When several patterns match, the most specific one wins (see
    /// [`RoutePattern::is_more_specific_than`]).
    pub fn dispatch(&self, method: &Method, path: &str) -> RouteResult<RouteMatch<'_, H>> {
        let segments = split_path(path);
        let mut best: Option<RouteMatch<'_, H>> = None;

        for route in self.routes.iter().filter(|r| &r.method == method) {
            let Some(params) = route.pattern.match_segments(&segments) else {
                continue;
            };

            let wins = match &best {
                None => true,
                Some(current) => route.pattern.is_more_specific_than(&current.route.pattern),
            };
            if wins {
                best = Some(RouteMatch { route, params });
            }
        }

        best.ok_or_else(|| RouteError::NoRoute {
            method: method.to_string(),
            path: path.to_string(),
        })
    }

    /// Registered bindings in registration order
    pub fn routes(&self) -> impl Iterator<Item = &Route<H>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
