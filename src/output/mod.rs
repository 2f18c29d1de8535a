pub mod formatter;
pub mod writer;

pub use formatter::{RenderStyle, format_token, render_sections};
pub use writer::{OutputTarget, write_report};
