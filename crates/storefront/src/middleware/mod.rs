//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Session lock (serialize state-changing requests per session)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Request ID (add unique ID to each request)

pub mod request_id;
pub mod session;
pub mod session_lock;

pub use request_id::request_id_middleware;
pub use session::create_session_layer;
pub use session_lock::{SessionLocks, session_lock_middleware};
