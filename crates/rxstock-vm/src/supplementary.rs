//! Graceful degradation for supplementary data loads.

use std::future::Future;

/// Runs a supplementary fetch — badges, aging signals, alert counts —
/// whose failure must never block or degrade the primary screen. Errors
/// are logged and swallowed; the caller renders the feature as simply
/// absent. Primary data loads must NOT go through here: they surface
/// their error to the user with a retry action.
pub async fn load_supplementary<T, E, Fut>(what: &str, fetch: Fut) -> Option<T>
where
    E: std::fmt::Display,
    Fut: Future<Output = Result<T, E>>,
{
    match fetch.await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(what, error = %e, "supplementary load failed; feature hidden");
            None
        }
    }
}
