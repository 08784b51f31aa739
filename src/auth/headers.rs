//! Challenge collection from response headers
//!
//! [`HeaderSource`] is the seam between the negotiator and whatever HTTP
//! stack produced the response. Implementations are provided for reqwest and
//! `http` types, plus [`StaticHeaders`] for in-memory use.

use reqwest::header::{HeaderMap, WWW_AUTHENTICATE};
use tracing::debug;

use super::params::split_params;

/// Read access to a response's headers
pub trait HeaderSource {
    /// All values for `name` in receipt order.
    ///
    /// `None` means the full set is not available from this source, which
    /// makes the collector fall back to [`header_field`](Self::header_field).
    fn header_values(&self, name: &str) -> Option<Vec<String>>;

    /// The most recent value for `name`
    fn header_field(&self, name: &str) -> Option<String>;
}

impl HeaderSource for HeaderMap {
    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        Some(
            self.get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect(),
        )
    }

    fn header_field(&self, name: &str) -> Option<String> {
        self.get_all(name)
            .iter()
            .last()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }
}

impl<B> HeaderSource for http::Response<B> {
    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        self.headers().header_values(name)
    }

    fn header_field(&self, name: &str) -> Option<String> {
        self.headers().header_field(name)
    }
}

impl HeaderSource for reqwest::Response {
    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        self.headers().header_values(name)
    }

    fn header_field(&self, name: &str) -> Option<String> {
        self.headers().header_field(name)
    }
}

impl HeaderSource for reqwest::blocking::Response {
    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        self.headers().header_values(name)
    }

    fn header_field(&self, name: &str) -> Option<String> {
        self.headers().header_field(name)
    }
}

/// In-memory header list
#[derive(Debug, Clone, Default)]
pub struct StaticHeaders {
    entries: Vec<(String, String)>,
}

impl StaticHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `Name: value` lines; lines without a colon are skipped
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut headers = Self::new();
        for line in lines {
            if let Some((name, value)) = line.as_ref().split_once(':') {
                headers.append(name.trim(), value.trim());
            }
        }
        headers
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderSource for StaticHeaders {
    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        Some(
            self.entries
                .iter()
                .filter(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.clone())
                .collect(),
        )
    }

    fn header_field(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }
}

/// Collect every `WWW-Authenticate` challenge, in order
pub fn collect_challenges<S: HeaderSource + ?Sized>(source: &S) -> Vec<String> {
    let name = WWW_AUTHENTICATE.as_str();

    let values = match source.header_values(name) {
        Some(values) => values,
        None => {
            debug!(header = name, "full header set unavailable, using last value only");
            source.header_field(name).into_iter().collect()
        }
    };

    values.iter().flat_map(|v| split_challenges(v)).collect()
}

/// Split one header value that may list several challenges.
///
/// An element whose first token is not followed by `=` starts a new
/// challenge; other elements are parameters of the current one.
pub fn split_challenges(value: &str) -> Vec<String> {
    let mut challenges: Vec<String> = Vec::new();

    for part in split_params(value) {
        match challenges.last_mut() {
            Some(current) if !starts_challenge(&part) => {
                current.push_str(", ");
                current.push_str(&part);
            }
            _ => challenges.push(part),
        }
    }

    challenges
}

fn starts_challenge(element: &str) -> bool {
    let token_end = element
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(element.len());

    !element[token_end..].trim_start().starts_with('=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    /// Only exposes the single-value accessor
    struct LastValueOnly(StaticHeaders);

    impl HeaderSource for LastValueOnly {
        fn header_values(&self, _name: &str) -> Option<Vec<String>> {
            None
        }

        fn header_field(&self, name: &str) -> Option<String> {
            self.0.header_field(name)
        }
    }

    #[test]
    fn test_from_lines_keeps_order_and_skips_garbage() {
        let headers = StaticHeaders::from_lines(&[
            r#"WWW-Authenticate: Basic realm="x""#,
            "not a header",
            "www-authenticate:  NTLM ",
        ]);

        assert_eq!(headers.len(), 2);
        assert_eq!(
            collect_challenges(&headers),
            vec![r#"Basic realm="x""#.to_string(), "NTLM".to_string()]
        );
    }

    #[test]
    fn test_header_field_is_last_value() {
        let headers = StaticHeaders::new()
            .with("WWW-Authenticate", "Basic")
            .with("WWW-Authenticate", "Digest realm=\"r\"");

        assert_eq!(headers.header_field("www-authenticate").as_deref(), Some("Digest realm=\"r\""));
    }

    #[test]
    fn test_absent_header_is_empty() {
        let headers = StaticHeaders::new().with("Content-Type", "text/plain");
        assert!(collect_challenges(&headers).is_empty());
        assert!(collect_challenges(&LastValueOnly(headers)).is_empty());
    }

    #[test]
    fn test_fallback_to_single_value() {
        let headers = StaticHeaders::new()
            .with("WWW-Authenticate", "Digest realm=\"r\", nonce=\"n\"")
            .with("WWW-Authenticate", "Basic realm=\"b\"");

        assert_eq!(collect_challenges(&LastValueOnly(headers)), vec![r#"Basic realm="b""#.to_string()]);
    }

    #[test]
    fn test_header_map_multi_values() {
        let mut map = HeaderMap::new();
        map.append(WWW_AUTHENTICATE, HeaderValue::from_static("NTLM"));
        map.append(WWW_AUTHENTICATE, HeaderValue::from_static("Basic realm=\"x\""));
        map.append(WWW_AUTHENTICATE, HeaderValue::from_bytes(b"Digest realm=\"\xff\"").unwrap());

        let challenges = collect_challenges(&map);
        assert_eq!(challenges.len(), 3);
        assert_eq!(challenges[1], r#"Basic realm="x""#);
        assert!(challenges[2].starts_with("Digest realm="));
        assert_eq!(map.header_field("WWW-Authenticate").as_deref(), Some(challenges[2].as_str()));
    }

    #[test]
    fn test_http_response_source() {
        let response = http::Response::builder()
            .status(401)
            .header("WWW-Authenticate", "Bearer")
            .header("WWW-Authenticate", "Basic realm=\"r\"")
            .body(())
            .unwrap();

        assert_eq!(collect_challenges(&response), vec!["Bearer", r#"Basic realm="r""#]);
    }

    #[test]
    fn test_split_multiple_challenges_in_one_value() {
        let split = split_challenges(r#"Basic realm="a, b", Digest realm="d", nonce="n", NTLM"#);

        assert_eq!(
            split,
            vec![
                r#"Basic realm="a, b""#.to_string(),
                r#"Digest realm="d", nonce="n""#.to_string(),
                "NTLM".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_keeps_single_digest_intact() {
        let value = r#"Digest qop="auth",algorithm=MD5-sess,nonce="+Upgraded+v1b9...ba",charset=utf-8,realm="Digest""#;
        let split = split_challenges(value);

        assert_eq!(split.len(), 1);
        assert!(split[0].starts_with("Digest qop=\"auth\""));
        assert!(split[0].ends_with("realm=\"Digest\""));
    }

    #[test]
    fn test_split_param_with_spaces_around_equals() {
        let split = split_challenges(r#"Digest realm = "r", nonce = "n""#);
        assert_eq!(split.len(), 1);
    }

    #[test]
    fn test_split_token68_and_blank() {
        assert_eq!(split_challenges("Negotiate YIIBhg=="), vec!["Negotiate YIIBhg=="]);
        assert!(split_challenges("   ").is_empty());
        assert_eq!(split_challenges(r#"realm="x""#), vec![r#"realm="x""#]);
    }
}
