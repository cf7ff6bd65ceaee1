//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction), added in `main`
//! 2. `TraceLayer` (request span and latency)
//! 3. Request ID (recorded on the span opened by `TraceLayer`)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
