//! Challenge scheme classification

use std::fmt;

/// Authentication scheme family of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// No recognized challenge
    None,
    /// HTTP Basic (RFC 7617)
    Basic,
    /// HTTP Digest (RFC 7616)
    Digest,
    /// NTLM, Bearer, Negotiate or any unknown token
    Unsupported,
}

impl Scheme {
    /// Classify a scheme token (case-insensitive)
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("basic") {
            Scheme::Basic
        } else if token.eq_ignore_ascii_case("digest") {
            Scheme::Digest
        } else {
            Scheme::Unsupported
        }
    }

    /// Precedence rank; `None` for schemes that never take part in selection
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Scheme::None => Some(0),
            Scheme::Basic => Some(1),
            Scheme::Digest => Some(2),
            Scheme::Unsupported => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::None => "None",
            Scheme::Basic => "Basic",
            Scheme::Digest => "Digest",
            Scheme::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified challenge: scheme plus the unparsed parameter text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub scheme: Scheme,
    /// Scheme token as sent by the server
    pub token: String,
    /// Everything after the scheme token, trimmed
    pub params: String,
}

impl Challenge {
    /// Classify one raw challenge. Never fails; garbage is `Unsupported`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (token, params) = match raw.find(char::is_whitespace) {
            Some(idx) => (&raw[..idx], raw[idx..].trim()),
            None => (raw, ""),
        };

        let scheme = if token.is_empty() {
            Scheme::Unsupported
        } else {
            Scheme::from_token(token)
        };

        Challenge {
            scheme,
            token: token.to_string(),
            params: params.to_string(),
        }
    }
}
