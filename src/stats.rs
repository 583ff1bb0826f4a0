//! Shared outcome counters updated concurrently by every worker.

use std::sync::atomic::{AtomicU64, Ordering};

/// Status codes treated as a rate-limit or access-denial signal.
const BLOCKED_STATUS: [u16; 2] = [403, 429];

/// A progress line is emitted every this many completed requests.
pub const PROGRESS_INTERVAL: u64 = 50;

/// Blocked-rate thresholds (percent x100) for the final assessment.
const STRONG_FILTERING_X100: u64 = 5_000;
const MODERATE_FILTERING_X100: u64 = 2_000;

/// Four monotone counters. Increments are individually atomic; a snapshot
/// is an eventually-consistent view, which is all reporting needs.
#[derive(Debug, Default)]
pub struct Stats {
    requests: AtomicU64,
    success: AtomicU64,
    blocked: AtomicU64,
    errors: AtomicU64,
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies a received response and returns the post-increment request
    /// total, so the caller can fire the periodic progress hook.
    ///
    /// Blocked responses (403/429) are received responses, not errors: they
    /// count toward `requests` and `blocked`, never `errors`.
    pub fn record_response(&self, status: u16) -> u64 {
        if BLOCKED_STATUS.contains(&status) {
            self.blocked.fetch_add(1, Ordering::Relaxed);
        } else if status == 200 {
            self.success.fetch_add(1, Ordering::Relaxed);
        }
        self.requests.fetch_add(1, Ordering::Relaxed).saturating_add(1)
    }

    /// Tallies a transport-level failure for which no response arrived.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            success: self.success.load(Ordering::Relaxed),
            blocked: self.blocked.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub requests: u64,
    pub success: u64,
    pub blocked: u64,
    pub errors: u64,
}

impl StatsSnapshot {
    /// Success rate as percent x100 (e.g. 8450 for 84.50%).
    #[must_use]
    pub fn success_rate_x100(&self) -> u64 {
        rate_x100(self.success, self.requests)
    }

    /// Blocked rate as percent x100.
    #[must_use]
    pub fn blocked_rate_x100(&self) -> u64 {
        rate_x100(self.blocked, self.requests)
    }

    #[must_use]
    pub fn assessment(&self) -> FilterAssessment {
        let blocked = self.blocked_rate_x100();
        if blocked > STRONG_FILTERING_X100 {
            FilterAssessment::StrongFiltering
        } else if blocked > MODERATE_FILTERING_X100 {
            FilterAssessment::ModerateFiltering
        } else {
            FilterAssessment::EvasionEffective
        }
    }
}

/// Advisory classification of the observed blocked rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAssessment {
    StrongFiltering,
    ModerateFiltering,
    EvasionEffective,
}

impl FilterAssessment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterAssessment::StrongFiltering => "strong filtering detected",
            FilterAssessment::ModerateFiltering => "moderate filtering",
            FilterAssessment::EvasionEffective => "evasion effective",
        }
    }
}

fn rate_x100(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(part)
        .saturating_mul(10_000)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
