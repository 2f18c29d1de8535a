use scraper::{Html, Selector};

use crate::constants::INPUT_NAME_SELECTOR;

/// Extract the `name` attribute of every `input` element in an HTML document.
/// Malformed markup is parsed leniently; inputs with an empty name are skipped.
pub fn extract_input_names(html: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(INPUT_NAME_SELECTOR) else {
        return Vec::new();
    };
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .filter_map(|input| input.value().attr("name"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
