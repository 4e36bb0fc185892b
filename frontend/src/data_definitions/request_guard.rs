//! Staleness guard for overlapping listing fetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket dispenser for in-flight requests.
///
/// Rapid filter toggling can leave several fetches running at once, and
/// without a guard whichever resolves last would win the visible result
/// set, stale or not. Each fetch takes a ticket when it starts and
/// checks it when it resolves; only the newest ticket's response is kept.
#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
}

impl RequestGuard {
    /// Issue the next ticket, making every earlier ticket stale.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let guard = RequestGuard::default();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let guard = RequestGuard::default();
        let clone = guard.clone();
        let ticket = guard.issue();
        assert!(clone.is_current(ticket));
        clone.issue();
        assert!(!guard.is_current(ticket));
    }
}
