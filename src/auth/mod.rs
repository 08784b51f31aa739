//! Authentication method negotiation
//!
//! The negotiated method is a sum type rather than a trait object: the set of
//! schemes we can answer is closed, and callers dispatch with `match`.

mod basic;
mod digest;
mod headers;
mod params;
mod scheme;
mod selector;

pub use basic::{BasicChallenge, Credentials};
pub use digest::{DigestAlgorithm, DigestChallenge};
pub use headers::{collect_challenges, split_challenges, HeaderSource, StaticHeaders};
pub use params::{parse_auth_params, unquote, AuthParams};
pub use scheme::{Challenge, Scheme};
pub use selector::{scan_response, AuthMethodSelector};

use reqwest::header::HeaderMap;
use thiserror::Error;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    #[error("missing credentials")]
    MissingCredentials,

    #[error("digest authentication requires a computed response: hash the challenge with the request method and URI")]
    DigestResponseRequired,

    #[error("unusable authentication challenge: {0}")]
    UnusableChallenge(String),
}

/// Outcome of scanning a 401 response
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// No recognized challenge
    #[default]
    None,
    /// HTTP Basic Authentication (RFC 7617)
    Basic(BasicChallenge),
    /// HTTP Digest Authentication (RFC 7616)
    Digest(DigestChallenge),
}

impl AuthMethod {
    pub fn scheme(&self) -> Scheme {
        match self {
            AuthMethod::None => Scheme::None,
            AuthMethod::Basic(_) => Scheme::Basic,
            AuthMethod::Digest(_) => Scheme::Digest,
        }
    }

    /// Scheme name for display/debugging
    pub fn name(&self) -> &'static str {
        self.scheme().as_str()
    }

    /// Digest directives, if this is a Digest method
    pub fn digest(&self) -> Option<&DigestChallenge> {
        match self {
            AuthMethod::Digest(challenge) => Some(challenge),
            _ => None,
        }
    }

    /// Whether the retry logic can answer this method.
    ///
    /// `None` is trivially usable (nothing to do); Digest needs realm and nonce.
    pub fn is_usable(&self) -> bool {
        match self {
            AuthMethod::None | AuthMethod::Basic(_) => true,
            AuthMethod::Digest(challenge) => challenge.is_usable(),
        }
    }

    /// Apply credentials to the next request's headers
    pub fn apply(&self, credentials: &Credentials, headers: &mut HeaderMap) -> Result<(), AuthError> {
        match self {
            AuthMethod::None => Ok(()),
            AuthMethod::Basic(_) => credentials.apply_basic(headers),
            AuthMethod::Digest(challenge) if !challenge.is_usable() => Err(AuthError::UnusableChallenge(
                "Digest challenge is missing realm or nonce".to_string(),
            )),
            AuthMethod::Digest(_) => Err(AuthError::DigestResponseRequired),
        }
    }
}
