//! Inter-request delay and session rotation policy.
//!
//! Both policies are pure functions of the caller's RNG, so any number of
//! workers can use them without coordination and tests can drive them with
//! a seeded generator.

use std::time::Duration;

use rand::Rng;

/// Inter-request delay bounds, inclusive.
pub const MIN_DELAY_MS: u64 = 500;
pub const MAX_DELAY_MS: u64 = 2500;

/// Requests per simulated browsing session, inclusive bounds.
pub const SESSION_MIN: u32 = 8;
pub const SESSION_MAX: u32 = 25;

/// Human-like delay before the next request, uniform in
/// [`MIN_DELAY_MS`, `MAX_DELAY_MS`].
pub fn next_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(MIN_DELAY_MS..=MAX_DELAY_MS))
}

/// Length of the next simulated session, uniform in
/// [`SESSION_MIN`, `SESSION_MAX`].
pub fn new_session_limit<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(SESSION_MIN..=SESSION_MAX)
}

/// Per-worker session state. Owned exclusively by one worker; rotation has
/// no effect beyond re-rolling the cadence (headers are regenerated every
/// request regardless).
#[derive(Debug)]
pub struct SessionState {
    requests_in_session: u32,
    session_limit: u32,
}

impl SessionState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            requests_in_session: 0,
            session_limit: new_session_limit(rng),
        }
    }

    #[must_use]
    pub fn should_rotate(&self) -> bool {
        self.requests_in_session >= self.session_limit
    }

    pub fn rotate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.requests_in_session = 0;
        self.session_limit = new_session_limit(rng);
    }

    /// Advances the session counter after a response was received.
    pub fn record_request(&mut self) {
        self.requests_in_session = self.requests_in_session.saturating_add(1);
    }

    #[must_use]
    pub fn requests_in_session(&self) -> u32 {
        self.requests_in_session
    }

    #[must_use]
    pub fn session_limit(&self) -> u32 {
        self.session_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLES: usize = 10_000;

    #[test]
    fn next_delay_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..SAMPLES {
            let delay = next_delay(&mut rng);
            assert!(delay >= Duration::from_millis(MIN_DELAY_MS));
            assert!(delay <= Duration::from_millis(MAX_DELAY_MS));
        }
    }

    #[test]
    fn session_limit_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..SAMPLES {
            let limit = new_session_limit(&mut rng);
            assert!((SESSION_MIN..=SESSION_MAX).contains(&limit));
        }
    }

    #[test]
    fn rotation_triggers_only_at_limit() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = SessionState::new(&mut rng);
        let limit = session.session_limit();

        for _ in 0..limit {
            assert!(!session.should_rotate());
            session.record_request();
        }
        assert!(session.should_rotate());

        session.rotate(&mut rng);
        assert_eq!(session.requests_in_session(), 0);
        assert!((SESSION_MIN..=SESSION_MAX).contains(&session.session_limit()));
        assert!(!session.should_rotate());
    }
}
