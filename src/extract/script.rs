use regex::Regex;
use std::sync::LazyLock;

use crate::constants::JS_VARIABLE_PATTERN;

static JS_VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(JS_VARIABLE_PATTERN).expect("variable declaration pattern is a valid regex")
});

/// Extract names declared with `var`, `let` or `const` anywhere in the page source.
///
/// This is a lexical scan of the raw markup, not a script parser. Declarations inside
/// comments or strings are reported, while comma-separated declarators and statements
/// without a terminating `;` are missed.
pub fn extract_js_variables(html: &str) -> Vec<String> {
    JS_VARIABLE_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_js_variables() {
        assert_eq!(
            extract_js_variables("var a = 1; let b = {}; const c;"),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_extract_js_variables_quoted_values() {
        let script = r#"const apiKey = "k;ey"; let path='/v1/users'; var $el = [];"#;
        assert_eq!(extract_js_variables(script), vec!["apiKey", "path", "$el"]);
    }

    #[test]
    fn test_extract_js_variables_inside_markup() {
        let html = r#"
            <html><head>
            <script>
              var userId = window.USER_ID;
              const config = {};
            </script>
            </head><body><p>let me = know;</p></body></html>
        "#;
        assert_eq!(
            extract_js_variables(html),
            vec!["userId", "config", "me"]
        );
    }

    #[test]
    fn test_extract_js_variables_misses_unterminated_and_lists() {
        assert!(extract_js_variables("let x = 1\nconst y = 2").is_empty());
        assert!(extract_js_variables("var first = 1, second = 2;").is_empty());
    }

    #[test]
    fn test_extract_js_variables_matches_comments() {
        assert_eq!(extract_js_variables("// var legacy = true;"), vec!["legacy"]);
    }
}
