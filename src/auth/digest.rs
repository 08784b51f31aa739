//! HTTP Digest challenges (RFC 7616)
//!
//! Only the challenge side lives here. Computing the `response` hash for the
//! `Authorization` header is left to the caller.

use super::params::{parse_auth_params, AuthParams};

/// Digest algorithms named by RFC 7616 §3.3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    MD5,
    MD5Sess,
    SHA256,
    SHA256Sess,
    SHA512_256,
    SHA512_256Sess,
}

impl DigestAlgorithm {
    /// Parse algorithm token (case-insensitive); unknown tokens yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MD5" => Some(DigestAlgorithm::MD5),
            "MD5-SESS" => Some(DigestAlgorithm::MD5Sess),
            "SHA-256" | "SHA256" => Some(DigestAlgorithm::SHA256),
            "SHA-256-SESS" | "SHA256-SESS" => Some(DigestAlgorithm::SHA256Sess),
            "SHA-512-256" | "SHA512-256" => Some(DigestAlgorithm::SHA512_256),
            "SHA-512-256-SESS" | "SHA512-256-SESS" => Some(DigestAlgorithm::SHA512_256Sess),
            _ => None,
        }
    }

    /// Name for the Authorization header
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::MD5 => "MD5",
            DigestAlgorithm::MD5Sess => "MD5-sess",
            DigestAlgorithm::SHA256 => "SHA-256",
            DigestAlgorithm::SHA256Sess => "SHA-256-sess",
            DigestAlgorithm::SHA512_256 => "SHA-512-256",
            DigestAlgorithm::SHA512_256Sess => "SHA-512-256-sess",
        }
    }

    pub fn is_session(&self) -> bool {
        matches!(
            self,
            DigestAlgorithm::MD5Sess | DigestAlgorithm::SHA256Sess | DigestAlgorithm::SHA512_256Sess
        )
    }
}

/// Parsed `WWW-Authenticate: Digest` directives
///
/// Every directive is kept, including unknown ones, in the order the server
/// sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestChallenge {
    directives: AuthParams,
}

impl DigestChallenge {
    /// Parse the directive list following the `Digest` token.
    ///
    /// Never fails. Missing `realm`/`nonce` is reported by [`is_usable`].
    ///
    /// [`is_usable`]: DigestChallenge::is_usable
    pub fn parse(params: &str) -> Self {
        Self {
            directives: parse_auth_params(params),
        }
    }

    /// Raw directive lookup by (case-insensitive) name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.directives
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    pub fn directives(&self) -> &AuthParams {
        &self.directives
    }

    pub fn realm(&self) -> Option<&str> {
        self.get("realm")
    }

    pub fn nonce(&self) -> Option<&str> {
        self.get("nonce")
    }

    pub fn qop(&self) -> Option<&str> {
        self.get("qop")
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.get("algorithm")
    }

    pub fn opaque(&self) -> Option<&str> {
        self.get("opaque")
    }

    pub fn charset(&self) -> Option<&str> {
        self.get("charset")
    }

    pub fn domain(&self) -> Option<&str> {
        self.get("domain")
    }

    pub fn stale(&self) -> bool {
        self.get("stale")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Individual qop options, e.g. `"auth,auth-int"` -> `["auth", "auth-int"]`
    pub fn qop_options(&self) -> Vec<&str> {
        self.qop()
            .map(|q| q.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Protection space URIs from `domain`
    pub fn domain_uris(&self) -> Vec<&str> {
        self.domain()
            .map(|d| d.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Typed algorithm. Absent means MD5; unrecognized yields `None`.
    pub fn algorithm_kind(&self) -> Option<DigestAlgorithm> {
        match self.algorithm() {
            Some(alg) => DigestAlgorithm::parse(alg),
            None => Some(DigestAlgorithm::MD5),
        }
    }

    /// Whether realm and nonce are both present
    pub fn is_usable(&self) -> bool {
        self.realm().is_some() && self.nonce().is_some()
    }
}
