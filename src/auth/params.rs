//! auth-param list parsing (RFC 7235 §2.1, RFC 7616 §3.3)
//!
//! Shared by the Digest and Basic challenge models. Parsing is total: any
//! input yields a (possibly empty) map.

use indexmap::IndexMap;

/// Ordered directive map, keyed by lowercased directive name
pub type AuthParams = IndexMap<String, String>;

/// Parse a comma-separated `name=value` / `name="value"` list.
///
/// Later duplicates overwrite earlier values in place.
pub fn parse_auth_params(s: &str) -> AuthParams {
    let mut params = AuthParams::new();

    for part in split_params(s) {
        if let Some((name, value)) = parse_param(&part) {
            params.insert(name, value);
        }
    }

    params
}

/// Split on commas outside quoted strings, honoring `\` escapes inside quotes
pub(crate) fn split_params(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for c in s.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' if in_quotes => {
                escaped = true;
                current.push(c);
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                if !current.trim().is_empty() {
                    parts.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }

    parts
}

/// Parse a single `name=value` element
fn parse_param(s: &str) -> Option<(String, String)> {
    let (name, value) = match s.split_once('=') {
        Some((name, value)) => (name, value.trim()),
        None => (s, ""),
    };

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some((name.to_ascii_lowercase(), unquote(value)))
}

/// Strip surrounding quotes and resolve quoted-pair escapes
pub fn unquote(value: &str) -> String {
    let inner = match value.strip_prefix('"') {
        Some(rest) => rest.strip_suffix('"').unwrap_or(rest),
        None => return value.to_string(),
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
