//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every dispatched request. Route-specific
//! stages (id resolution, validation) live with the handlers that use them.

mod trace;

pub use trace::trace;
