//! Per-request HTTP fingerprint generation.
//!
//! Every request gets a freshly assembled header set: a profile drawn from
//! the fixed pool plus independently randomized locale, cache-control, DNT
//! and (usually) a referer. Nothing is carried over between requests.

mod profiles;

use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, HeaderMap, HeaderName,
    HeaderValue, REFERER, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use crate::error::{AppError, AppResult, HttpError};
use crate::target::Target;

pub use profiles::{BrowserFamily, FingerprintProfile, PROFILE_POOL};

const LOCALES: [&str; 4] = [
    "en-US,en;q=0.9",
    "en-GB,en;q=0.9",
    "fr-FR,fr;q=0.9,en;q=0.8",
    "de-DE,de;q=0.9,en;q=0.8",
];

const CACHE_DIRECTIVES: [&str; 2] = ["no-cache", "max-age=0"];

const REFERER_PROBABILITY: f64 = 0.7;

const DNT: HeaderName = HeaderName::from_static("dnt");
const SEC_CH_UA: HeaderName = HeaderName::from_static("sec-ch-ua");
const SEC_CH_UA_MOBILE: HeaderName = HeaderName::from_static("sec-ch-ua-mobile");
const SEC_CH_UA_PLATFORM: HeaderName = HeaderName::from_static("sec-ch-ua-platform");
const SEC_FETCH_DEST: HeaderName = HeaderName::from_static("sec-fetch-dest");
const SEC_FETCH_MODE: HeaderName = HeaderName::from_static("sec-fetch-mode");
const SEC_FETCH_SITE: HeaderName = HeaderName::from_static("sec-fetch-site");
const SEC_FETCH_USER: HeaderName = HeaderName::from_static("sec-fetch-user");

/// Assembles randomized, internally consistent header sets for one target.
///
/// Referer candidates (same-origin variants plus two well-known search
/// engines) are validated once at construction so generation itself is
/// infallible.
#[derive(Debug)]
pub struct FingerprintGenerator {
    referers: Vec<HeaderValue>,
}

impl FingerprintGenerator {
    /// # Errors
    ///
    /// Returns an error if a referer candidate derived from the target is
    /// not a valid header value.
    pub fn new(target: &Target) -> AppResult<Self> {
        let origin = target.url().to_owned();
        let candidates = [
            origin.clone(),
            format!("{origin}/"),
            "https://www.google.com/".to_owned(),
            "https://www.bing.com/".to_owned(),
        ];
        let referers = candidates
            .into_iter()
            .map(|candidate| {
                HeaderValue::from_str(&candidate).map_err(|err| {
                    AppError::http(HttpError::InvalidReferer {
                        value: candidate.clone(),
                        source: err,
                    })
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self { referers })
    }

    /// One fresh header set: profile-coherent identity, accept and client
    /// hints, plus independently randomized locale, cache-control, DNT and
    /// an optional referer.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> HeaderMap {
        let profile = PROFILE_POOL
            .choose(rng)
            .copied()
            .unwrap_or(PROFILE_POOL[0]);
        let locale = LOCALES.choose(rng).copied().unwrap_or(LOCALES[0]);
        let cache = CACHE_DIRECTIVES
            .choose(rng)
            .copied()
            .unwrap_or(CACHE_DIRECTIVES[0]);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(profile.user_agent));
        headers.insert(ACCEPT, HeaderValue::from_static(profile.family.accept()));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(locale));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(cache));
        headers.insert(
            DNT,
            HeaderValue::from_static(if rng.gen_bool(0.5) { "1" } else { "0" }),
        );
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        // Client hints are a fixed function of the profile's family, never
        // a random choice.
        if let Some(hints) = profile.family.client_hints() {
            headers.insert(SEC_CH_UA, HeaderValue::from_static(hints));
            headers.insert(
                SEC_CH_UA_MOBILE,
                HeaderValue::from_static(if profile.mobile { "?1" } else { "?0" }),
            );
            headers.insert(
                SEC_CH_UA_PLATFORM,
                HeaderValue::from_static(platform_hint(profile.platform)),
            );
            headers.insert(SEC_FETCH_DEST, HeaderValue::from_static("document"));
            headers.insert(SEC_FETCH_MODE, HeaderValue::from_static("navigate"));
            headers.insert(SEC_FETCH_SITE, HeaderValue::from_static("none"));
            headers.insert(SEC_FETCH_USER, HeaderValue::from_static("?1"));
        }

        if rng.gen_bool(REFERER_PROBABILITY)
            && let Some(referer) = self.referers.choose(rng)
        {
            headers.insert(REFERER, referer.clone());
        }

        headers
    }
}

fn platform_hint(platform: &str) -> &'static str {
    match platform {
        "macOS" => "\"macOS\"",
        "Android" => "\"Android\"",
        "iOS" => "\"iOS\"",
        "Linux" => "\"Linux\"",
        _ => "\"Windows\"",
    }
}
