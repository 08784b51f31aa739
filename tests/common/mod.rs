//! Common test utilities for pulse-auth integration tests
//!
//! Challenge fixtures as real servers send them, plus helpers for scanning
//! raw header lines.

#![allow(dead_code)]

use pulse_auth::auth::{scan_response, AuthMethod, StaticHeaders};

pub const DIGEST_HEADER: &str =
    r#"WWW-Authenticate: Digest qop="auth",algorithm=MD5-sess,nonce="+Upgraded+v1b9...ba",charset=utf-8,realm="Digest""#;

pub const BASIC_HEADER: &str = r#"WWW-Authenticate: Basic realm="everyones.loves.git""#;

pub const NTLM_HEADER: &str = "WWW-Authenticate: NTLM";

pub const BEARER_HEADER: &str = "WWW-Authenticate: Bearer";

pub const BASIC: &str = "Basic";
pub const DIGEST: &str = "Digest";
pub const NONE: &str = "None";

/// Strip the header name off a fixture line
pub fn value_of(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or(line)
}

/// Scan raw `Name: value` lines with the default policy
pub fn scan_lines(lines: &[&str]) -> AuthMethod {
    scan_response(&StaticHeaders::from_lines(lines))
}

/// Assert the method chosen for `lines`
pub fn check_response(lines: &[&str], expected: &str) {
    let method = scan_lines(lines);
    assert_eq!(
        method.name(),
        expected,
        "Wrong authentication method: expected {}, but received {}",
        expected,
        method.name()
    );
}
