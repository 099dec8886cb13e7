//! # roster
//!
//! A small users REST service over an in-memory store, on a minimal HTTP
//! layer built from hyper and a `matchit` radix-tree router.
//!
//! ## Routes
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | `GET` | `/` | `201 {"msg":"Hello"}` | |
//! | `GET` | `/api/users?filter=&value=` | `200` users | `400` bad query |
//! | `POST` | `/api/users` | `201` created user | `400 {"error":[…]}` |
//! | `GET` | `/api/users/{id}` | `200` user | `400` / `404` |
//! | `PUT` | `/api/users/{id}` | `200` | `400` / `404` |
//! | `PATCH` | `/api/users/{id}` | `200` | `400` / `404` |
//! | `DELETE` | `/api/users/{id}` | `200` | `400` / `404` |
//! | `GET` | `/api/product` | `200` products | |
//! | `GET` | `/healthz`, `/readyz` | `200` | |
//!
//! ## In-process dispatch
//!
//! ```rust
//! use roster::{Method, Request, app};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let router = app::router(app::AppState::seeded());
//! let res = router.handle(Request::new(Method::Get, "/api/users/1", "")).await;
//! assert_eq!(res.status_code(), 200);
//! # }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod app;
pub mod config;
pub mod env;
pub mod health;
pub mod middleware;
pub mod products;
pub mod users;
pub mod validate;

pub use error::{ApiError, Error};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
