//! Precedence resolution over a response's challenges
//!
//! Digest outranks Basic, which outranks nothing at all. Unsupported schemes
//! are skipped. Among equal schemes the first one in header order wins.

use tracing::{debug, trace};

use super::basic::BasicChallenge;
use super::digest::DigestChallenge;
use super::headers::{collect_challenges, HeaderSource};
use super::scheme::{Challenge, Scheme};
use super::AuthMethod;
use crate::config::SelectorConfig;

/// Picks one [`AuthMethod`] from a 401 response
#[derive(Debug, Clone, Default)]
pub struct AuthMethodSelector {
    config: SelectorConfig,
}

impl AuthMethodSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Collect, classify and resolve all `WWW-Authenticate` challenges
    pub fn scan_response<S: HeaderSource + ?Sized>(&self, source: &S) -> AuthMethod {
        let challenges = collect_challenges(source);
        self.select(&challenges)
    }

    /// Resolve already-collected raw challenges
    pub fn select<C: AsRef<str>>(&self, challenges: &[C]) -> AuthMethod {
        let mut best = AuthMethod::None;

        for raw in challenges {
            let challenge = Challenge::parse(raw.as_ref());
            trace!(scheme = %challenge.scheme, token = %challenge.token, "classified challenge");

            let candidate = match self.candidate(&challenge) {
                Some(candidate) => candidate,
                None => continue,
            };

            if candidate.scheme().precedence() > best.scheme().precedence() {
                best = candidate;
            }
        }

        debug!(
            scheme = %best.scheme(),
            usable = best.is_usable(),
            challenges = challenges.len(),
            "selected authentication method"
        );
        best
    }

    /// Method for one challenge, or `None` if it cannot take part
    fn candidate(&self, challenge: &Challenge) -> Option<AuthMethod> {
        match challenge.scheme {
            Scheme::Basic if self.config.allow_basic => {
                Some(AuthMethod::Basic(BasicChallenge::parse(&challenge.params)))
            }
            Scheme::Digest => {
                let digest = DigestChallenge::parse(&challenge.params);
                if self.config.prefer_usable_digest && !digest.is_usable() {
                    debug!(token = %challenge.token, "skipping Digest challenge without realm or nonce");
                    return None;
                }
                Some(AuthMethod::Digest(digest))
            }
            Scheme::Basic | Scheme::None | Scheme::Unsupported => None,
        }
    }
}

/// Scan with the default policy
pub fn scan_response<S: HeaderSource + ?Sized>(source: &S) -> AuthMethod {
    AuthMethodSelector::default().scan_response(source)
}
