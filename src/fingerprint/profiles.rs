//! Fixed pool of coherent browser fingerprint profiles.
//!
//! Accept headers and client-hint emission are a fixed mapping from the
//! browser family, so a profile can never present, say, a Safari identity
//! with Chromium client hints.

/// Browser engine family a profile declares. Only Chromium-based families
/// emit `sec-ch-ua*` / `sec-fetch-*` client hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFamily {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserFamily {
    #[must_use]
    pub fn accept(self) -> &'static str {
        match self {
            BrowserFamily::Chrome => {
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"
            }
            BrowserFamily::Edge | BrowserFamily::Firefox => {
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
            }
            BrowserFamily::Safari => "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        }
    }

    /// `sec-ch-ua` value for Chromium families; `None` means the profile
    /// emits no client hints at all.
    #[must_use]
    pub fn client_hints(self) -> Option<&'static str> {
        match self {
            BrowserFamily::Chrome => {
                Some("\"Chromium\";v=\"131\", \"Google Chrome\";v=\"131\", \"Not_A Brand\";v=\"24\"")
            }
            BrowserFamily::Edge => {
                Some("\"Microsoft Edge\";v=\"131\", \"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\"")
            }
            BrowserFamily::Firefox | BrowserFamily::Safari => None,
        }
    }
}

/// One coherent synthetic client. Immutable; drawn at random per request.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintProfile {
    pub user_agent: &'static str,
    pub family: BrowserFamily,
    /// `sec-ch-ua-platform` value for Chromium profiles.
    pub platform: &'static str,
    pub mobile: bool,
}

pub const PROFILE_POOL: [FingerprintProfile; 10] = [
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
        family: BrowserFamily::Chrome,
        platform: "Windows",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36",
        family: BrowserFamily::Chrome,
        platform: "Windows",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
        family: BrowserFamily::Chrome,
        platform: "macOS",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
        family: BrowserFamily::Firefox,
        platform: "Windows",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:132.0) Gecko/20100101 Firefox/132.0",
        family: BrowserFamily::Firefox,
        platform: "Windows",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
        family: BrowserFamily::Firefox,
        platform: "macOS",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.2 Safari/605.1.15",
        family: BrowserFamily::Safari,
        platform: "macOS",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
        family: BrowserFamily::Edge,
        platform: "Windows",
        mobile: false,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (Linux; Android 10; SM-G973F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36",
        family: BrowserFamily::Chrome,
        platform: "Android",
        mobile: true,
    },
    FingerprintProfile {
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 18_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.2 Mobile/15E148 Safari/604.1",
        family: BrowserFamily::Safari,
        platform: "iOS",
        mobile: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_spans_families_and_form_factors() {
        assert!(PROFILE_POOL.len() >= 10);
        for family in [
            BrowserFamily::Chrome,
            BrowserFamily::Edge,
            BrowserFamily::Firefox,
            BrowserFamily::Safari,
        ] {
            assert!(PROFILE_POOL.iter().any(|profile| profile.family == family));
        }
        assert!(PROFILE_POOL.iter().any(|profile| profile.mobile));
        assert!(PROFILE_POOL.iter().any(|profile| !profile.mobile));
    }

    #[test]
    fn hints_only_for_chromium_families() {
        assert!(BrowserFamily::Chrome.client_hints().is_some());
        assert!(BrowserFamily::Edge.client_hints().is_some());
        assert!(BrowserFamily::Firefox.client_hints().is_none());
        assert!(BrowserFamily::Safari.client_hints().is_none());
    }
}
