use url::{Url, form_urlencoded};

/// Components of a URL string, best effort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub path: String,
    /// Query keys in first-seen order, each with its values in order of occurrence.
    pub query: Vec<(String, Vec<String>)>,
}

impl ParsedUrl {
    pub fn query_keys(&self) -> impl Iterator<Item = &str> {
        self.query.iter().map(|(key, _)| key.as_str())
    }

    /// Non-empty slash-delimited path segments.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// Decompose a URL string into scheme, host, path and query.
///
/// Path and query are sliced from the raw string, never normalized: dot segments,
/// backslashes and unencoded characters survive as written. The `url` crate only
/// supplies scheme and host, and when it rejects the input those come from the raw
/// split too. Never fails.
pub fn decompose_url(raw: &str) -> ParsedUrl {
    let raw = raw.trim();
    let split = split_raw(raw);
    let (scheme, host) = match Url::parse(raw) {
        Ok(url) => (
            url.scheme().to_string(),
            url.host_str().unwrap_or_default().to_string(),
        ),
        Err(_) => (
            split.scheme.to_ascii_lowercase(),
            host_from_authority(split.authority),
        ),
    };

    ParsedUrl {
        scheme,
        host,
        path: split.path.to_string(),
        query: parse_query(split.query),
    }
}

/// Literal slices of a URL string
struct RawParts<'a> {
    scheme: &'a str,
    authority: &'a str,
    path: &'a str,
    query: &'a str,
}

fn split_raw(raw: &str) -> RawParts<'_> {
    let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
    let (rest, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let (scheme, rest) = match rest.split_once(':') {
        Some((scheme, remainder)) if is_scheme(scheme) => (scheme, remainder),
        _ => ("", rest),
    };

    let (authority, path) = match rest.strip_prefix("//") {
        Some(remainder) => match remainder.find('/') {
            Some(slash) => (&remainder[..slash], &remainder[slash..]),
            None => (remainder, ""),
        },
        None => ("", rest),
    };

    RawParts {
        scheme,
        authority,
        path: strip_params(path),
        query,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// `;params` are only recognised on the last path segment.
fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').map_or(0, |slash| slash + 1);
    match path[last_segment..].find(';') {
        Some(semicolon) => &path[..last_segment + semicolon],
        None => path,
    }
}

fn host_from_authority(authority: &str) -> String {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let host = if let Some(bracketed) = host_port.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };
    host.to_ascii_lowercase()
}

/// Parse a form-urlencoded query string. Keys whose values are all blank are dropped.
pub fn parse_query(query: &str) -> Vec<(String, Vec<String>)> {
    let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, values)) => values.push(value.into_owned()),
            None => pairs.push((key.into_owned(), vec![value.into_owned()])),
        }
    }
    pairs
}
