//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler, and every handler receives a clone of the router's state.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router<S = ()> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

impl Router<()> {
    /// A router without application state.
    pub fn new() -> Self {
        Self::with_state(())
    }
}

impl Default for Router<()> {
    fn default() -> Self { Self::new() }
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// A router whose handlers each receive a clone of `state`.
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use roster::{Method, Request, Response, Router};
    /// # async fn get_user(_: Request, _: ()) -> Response { Response::text("") }
    /// # async fn delete_user(_: Request, _: ()) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Delete, "/api/users/{id}", delete_user)
    ///     .on(Method::Get,    "/api/users/{id}", get_user);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_insert_with(MatchitRouter::new)
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Patch, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Delete, path, handler)
    }

    fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one request and produces one response.
    ///
    /// Unknown method tokens get `405`, unmatched paths `404`.
    pub async fn handle(&self, mut req: Request) -> Response {
        let Ok(method) = Method::try_from(req.method()) else {
            return Response::status(Status::MethodNotAllowed);
        };
        match self.lookup(method, req.path()) {
            Some((handler, params)) => {
                req.params = params;
                handler.call(req, self.state.clone()).await
            }
            None => Response::status(Status::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo_id(req: Request, prefix: &'static str) -> String {
        format!("{prefix}{}", req.param("id").unwrap_or("?"))
    }

    #[tokio::test]
    async fn dispatches_with_params_and_state() {
        let router = Router::with_state("user-").get("/users/{id}", echo_id);
        let res = router.handle(Request::new(Method::Get, "/users/7", "")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"user-7");
    }

    #[tokio::test]
    async fn unmatched_path_is_not_found() {
        let router = Router::with_state("").get("/users/{id}", echo_id);
        let res = router.handle(Request::new(Method::Get, "/nope", "")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn method_without_route_is_not_found() {
        let router = Router::with_state("").get("/users/{id}", echo_id);
        let res = router.handle(Request::new(Method::Post, "/users/7", "")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::with_state("")
            .get("/users/{id}", echo_id)
            .get("/users/{id}", echo_id);
    }
}
