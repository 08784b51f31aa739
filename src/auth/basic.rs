//! HTTP Basic Authentication (RFC 7617)

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::params::parse_auth_params;
use super::AuthError;

/// Parameters of a `WWW-Authenticate: Basic` challenge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicChallenge {
    pub realm: Option<String>,
    /// Only `UTF-8` is defined by RFC 7617
    pub charset: Option<String>,
}

impl BasicChallenge {
    /// Parse the parameter list following the `Basic` token. Never fails.
    pub fn parse(params: &str) -> Self {
        let mut params = parse_auth_params(params);
        Self {
            realm: params.shift_remove("realm"),
            charset: params.shift_remove("charset"),
        }
    }
}

/// Username/password pair used to answer a challenge
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse credentials from "username:password" format
    pub fn from_credentials(creds: &str) -> Result<Self, AuthError> {
        let (username, password) = creds.split_once(':').unwrap_or((creds, ""));
        if username.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// `Basic base64(user:password)` header value
    pub fn basic_header_value(&self) -> Result<HeaderValue, AuthError> {
        let credentials = format!("{}:{}", self.username, self.password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());

        HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| AuthError::InvalidHeader(e.to_string()))
    }

    /// Insert a Basic Authorization header
    pub fn apply_basic(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        headers.insert(AUTHORIZATION, self.basic_header_value()?);
        Ok(())
    }
}
