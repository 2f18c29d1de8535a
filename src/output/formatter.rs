use colored::*;
use serde_json::json;

use crate::types::{Category, OutputFormat, TokenSet};

/// How tokens are rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStyle {
    pub format: OutputFormat,
    /// Append the bracketed category tag to each plain line.
    pub info: bool,
    /// Highlight category tags with ANSI colors.
    pub colored: bool,
}

fn paint(category: Category) -> ColoredString {
    let tag = category.as_str();
    match category {
        Category::Parameter => tag.bright_magenta(),
        Category::Input => tag.bright_green(),
        Category::JsVariable => tag.bright_yellow(),
        Category::Directory => tag.bright_blue(),
    }
}

/// Format a single token as one output line, without the trailing newline
pub fn format_token(token: &str, category: Category, style: &RenderStyle) -> String {
    match style.format {
        OutputFormat::Plain if !style.info => token.to_string(),
        OutputFormat::Plain if style.colored => format!("{} [{}]", token, paint(category)),
        OutputFormat::Plain => format!("{} [{}]", token, category),
        OutputFormat::Jsonl => json!({ "token": token, "category": category }).to_string(),
    }
}

/// Render sections in the given order, each token on its own line
pub fn render_sections(sections: &[(Category, &TokenSet)], style: &RenderStyle) -> String {
    let mut output = String::new();
    for (category, tokens) in sections {
        for token in tokens.iter() {
            output.push_str(&format_token(token, *category, style));
            output.push('\n');
        }
    }
    output
}
