//! Per-session request serialization.
//!
//! The session layer loads a visitor's record lazily during the request and
//! writes it back after the response. Two mutating requests on one session
//! that overlap would each save their own snapshot, and the later save drops
//! the earlier change. This middleware sits outside the session layer and
//! holds a per-session lock around the whole load, mutate, save cycle for
//! state-changing requests.
//!
//! Requests without a session cookie are not locked: each of them starts a
//! fresh session of its own.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use moka::future::Cache;
use tokio::sync::Mutex;
use tower_sessions::cookie::Cookie;

use crate::middleware::session::{SESSION_COOKIE_NAME, SESSION_EXPIRY_SECONDS};
use crate::state::AppState;

/// Per-session mutexes, keyed by session cookie value.
///
/// Entries idle out on the same schedule as the sessions they guard.
#[derive(Clone)]
pub struct SessionLocks {
    locks: Cache<String, Arc<Mutex<()>>>,
}

impl SessionLocks {
    /// Create an empty lock table.
    #[must_use]
    pub fn new() -> Self {
        let idle = Duration::from_secs(SESSION_EXPIRY_SECONDS.unsigned_abs());
        Self {
            locks: Cache::builder().time_to_idle(idle).build(),
        }
    }

    /// Get the mutex for `session_key`, creating it on first use.
    ///
    /// Concurrent callers with the same key always receive the same mutex.
    pub async fn lock_for(&self, session_key: &str) -> Arc<Mutex<()>> {
        self.locks
            .get_with(session_key.to_string(), async { Arc::new(Mutex::new(())) })
            .await
    }
}

impl Default for SessionLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the session cookie value from a request, if any.
fn session_key(request: &Request<Body>) -> Option<String> {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Serialize state-changing requests that share a session.
///
/// Safe methods (`GET`, `HEAD`, ...) never write the session and pass
/// through without waiting.
pub async fn session_lock_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method().is_safe() {
        return next.run(request).await;
    }

    let Some(key) = session_key(&request) else {
        return next.run(request).await;
    };

    let lock = state.session_locks().lock_for(&key).await;
    let _guard = lock.lock().await;
    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request_with_cookie(cookie: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/cart/add")
            .header(COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_session_key_found_among_cookies() {
        let request = request_with_cookie("theme=dark; shirt_store_session=abc123; other=1");
        assert_eq!(session_key(&request).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_key_missing() {
        let request = request_with_cookie("theme=dark");
        assert_eq!(session_key(&request), None);

        let request = Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        assert_eq!(session_key(&request), None);
    }

    #[test]
    fn test_session_key_empty_value_ignored() {
        let request = request_with_cookie("shirt_store_session=");
        assert_eq!(session_key(&request), None);
    }

    #[tokio::test]
    async fn test_same_key_shares_one_lock() {
        let locks = SessionLocks::new();
        let first = locks.lock_for("abc").await;
        let second = locks.lock_for("abc").await;
        let other = locks.lock_for("xyz").await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[tokio::test]
    async fn test_lock_excludes_second_holder() {
        let locks = SessionLocks::new();
        let lock = locks.lock_for("abc").await;
        let _held = lock.lock().await;

        let again = locks.lock_for("abc").await;
        assert!(again.try_lock().is_err());
    }
}
