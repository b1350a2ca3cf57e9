//! Process-wide validation toggle.
//!
//! Validation normally runs on every serialization call. Advanced callers
//! can disable it globally with [`disable_validation`], or per-call by
//! passing `Some(false)` as the `validation_override` argument of any
//! `to_json` — at their own risk, since the resulting payload then carries
//! no correctness guarantee.
//!
//! The toggle has explicit init semantics: it starts enabled and is only
//! ever changed through the two functions below.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

static VALIDATION_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enable payload validation process-wide.
///
/// This is the default state.
pub fn enable_validation() {
    if !VALIDATION_ENABLED.swap(true, Ordering::Relaxed) {
        debug!("payload validation enabled");
    }
}

/// Disable payload validation process-wide.
///
/// Serialization calls still return `Result`, but will never fail unless a
/// per-call override of `Some(true)` is passed.
pub fn disable_validation() {
    if VALIDATION_ENABLED.swap(false, Ordering::Relaxed) {
        debug!("payload validation disabled");
    }
}

/// Whether payload validation is currently enabled process-wide.
pub fn is_validation_enabled() -> bool {
    VALIDATION_ENABLED.load(Ordering::Relaxed)
}

/// Resolve a per-call override against the process-wide default.
///
/// The override always wins; the global toggle is only consulted when the
/// caller passed `None`.
pub(crate) fn should_validate(validation_override: Option<bool>) -> bool {
    let run = validation_override.unwrap_or_else(is_validation_enabled);

    if !run {
        trace!("serializing payload without validation");
    }

    run
}

#[cfg(test)]
mod tests {
    use super::{disable_validation, enable_validation, is_validation_enabled, should_validate};

    // Note: these mutate process-global state, so they run in one test to
    // avoid interleaving with each other under the parallel test runner.
    #[test]
    fn toggle_and_override_resolution() {
        assert!(is_validation_enabled());
        assert!(should_validate(None));

        disable_validation();
        assert!(!is_validation_enabled());
        assert!(!should_validate(None));
        // Per-call override beats the global toggle in both directions.
        assert!(should_validate(Some(true)));

        enable_validation();
        assert!(is_validation_enabled());
        assert!(!should_validate(Some(false)));
    }
}
