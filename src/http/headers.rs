use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Parse header strings into HeaderMap
pub fn parse_headers(headers: &[String]) -> HeaderMap {
    let mut header_map = HeaderMap::new();
    for header_str in headers {
        let Some((key, value)) = header_str.split_once(':') else {
            tracing::warn!(
                "Invalid header format. Expected 'Key: Value'. Got: {}",
                header_str
            );
            continue;
        };
        let Ok(header_name) = HeaderName::from_bytes(key.trim().as_bytes()) else {
            tracing::warn!("Invalid header name: {}", key);
            continue;
        };
        match HeaderValue::from_str(value.trim()) {
            Ok(header_value) => {
                header_map.insert(header_name, header_value);
            }
            Err(_) => tracing::warn!("Invalid header value for key '{}'", key),
        }
    }
    header_map
}
