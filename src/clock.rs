//! Injected clock and nonce source
//!
//! Generation output is named from the current time plus a request-scoped
//! nonce. Both come through this trait so tests can pin them and so two
//! requests for the same subject in the same second cannot collide.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of timestamps and request-scoped unique suffixes
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;

    /// Short unique token for output-filename disambiguation
    fn nonce(&self) -> String;
}

/// Production clock: system time and random UUID nonces
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn nonce(&self) -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }
}

/// Fixed clock for deterministic tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub timestamp: DateTime<Utc>,
    pub nonce: String,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn nonce(&self) -> String {
        self.nonce.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_nonce_is_short_and_unique() {
        let clock = SystemClock;
        let a = clock.nonce();
        let b = clock.nonce();
        assert_eq!(a.len(), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock {
            timestamp: "2024-03-01T12:00:00Z".parse().unwrap(),
            nonce: "deadbeef".to_string(),
        };
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.nonce(), "deadbeef");
    }
}
