/// Time source for token issuance and refresh decisions.
///
/// Expiry arithmetic is pure over a supplied instant; this trait is the
/// single place the current time enters the system, so tests can substitute
/// their own source without touching process state.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The only implementation used outside tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_tracks_wall_time() {
        let clock = SystemClock;
        let before = Utc::now();
        let observed = clock.now_utc();
        let after = Utc::now();

        assert!(before <= observed);
        assert!(observed <= after);
    }
}
