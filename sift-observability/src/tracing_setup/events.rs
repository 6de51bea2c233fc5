//! Structured log events for degradation state changes.

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a component returning to normal operation.
pub fn degradation_recovered(component: &str, degraded_secs: i64) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        degraded_secs = degraded_secs,
        "degradation recovered"
    );
}
