//! Token extraction from URL strings and fetched page bodies.

pub mod html;
pub mod script;

pub use html::extract_input_names;
pub use script::extract_js_variables;

use crate::types::{PageTokens, TokenSet};
use crate::utils::decompose_url;

/// Collect the distinct query parameter names across all URLs.
pub fn extract_parameters<S: AsRef<str>>(urls: &[S]) -> TokenSet {
    let mut parameters = TokenSet::new();
    for url in urls {
        let parsed = decompose_url(url.as_ref());
        parameters.extend(parsed.query_keys().map(str::to_string));
    }
    parameters
}

/// Collect the distinct non-empty path segments across all URLs.
pub fn extract_paths<S: AsRef<str>>(urls: &[S]) -> TokenSet {
    let mut paths = TokenSet::new();
    for url in urls {
        let parsed = decompose_url(url.as_ref());
        paths.extend(parsed.path_segments().map(str::to_string));
    }
    paths
}

/// Run both page scanners over one body.
pub fn scan_page(body: &str) -> PageTokens {
    PageTokens {
        inputs: extract_input_names(body).into_iter().collect(),
        js_variables: extract_js_variables(body).into_iter().collect(),
    }
}
