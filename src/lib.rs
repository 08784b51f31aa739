//! pulse-auth library interface
//!
//! Picks the authentication scheme to retry a request with, given the
//! `WWW-Authenticate` challenges of a 401 response.
//!
//! # Module Organization
//!
//! - [`auth`] - Challenge collection, classification and selection (AuthMethod)
//! - [`config`] - Selection policy (SelectorConfig)
//! - [`errors`] - Error types (PulseAuthError, Result)
//! - [`logging`] - Tracing subscriber setup
//!
//! ```
//! use pulse_auth::auth::{scan_response, AuthMethod, StaticHeaders};
//!
//! let headers = StaticHeaders::from_lines(&[
//!     "WWW-Authenticate: NTLM",
//!     "WWW-Authenticate: Basic realm=\"example\"",
//!     "WWW-Authenticate: Digest realm=\"example\", nonce=\"abc\", qop=\"auth\"",
//! ]);
//!
//! match scan_response(&headers) {
//!     AuthMethod::Digest(digest) => assert_eq!(digest.nonce(), Some("abc")),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod auth;
pub mod config;
pub mod errors;
pub mod logging;

pub use auth::{scan_response, AuthMethod, AuthMethodSelector, HeaderSource, Scheme};
pub use config::SelectorConfig;
pub use errors::{PulseAuthError, Result};
