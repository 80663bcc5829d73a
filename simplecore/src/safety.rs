//! Crash isolation for per-frame UI code.
//!
//! A panic while drawing one frame must not take the calculator down with it.

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%reason, "caught panic in frame, recovered");
            fallback
        }
    }
}
