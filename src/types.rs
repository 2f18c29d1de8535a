use clap::Parser;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Output format options
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Jsonl,
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Extract URL parameters, form inputs, script variables or paths from a list of URLs.",
    long_about = None
)]
pub struct Cli {
    // INPUT
    /// Path to the file containing URLs, or "-" to read from stdin.
    #[arg(short, long, help_heading = "INPUT")]
    pub urls: String,

    // MODE
    /// Parameter discovery: query parameters, form inputs and script variables.
    #[arg(short, long, help_heading = "MODE")]
    pub parameters: bool,

    /// Directory discovery: path segments.
    #[arg(short, long, help_heading = "MODE")]
    pub directories: bool,

    // NETWORK
    /// Timeout for each request in seconds.
    #[arg(
        long,
        default_value_t = crate::constants::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "NETWORK"
    )]
    pub timeout: u64,

    /// Maximum number of concurrent requests (0 for one per URL).
    #[arg(long, default_value_t = crate::constants::DEFAULT_CONCURRENCY, help_heading = "NETWORK")]
    pub concurrency: usize,

    /// Use a proxy for requests (e.g., "http://127.0.0.1:8080").
    #[arg(long, help_heading = "NETWORK")]
    pub proxy: Option<String>,

    /// Accept invalid TLS certificates (certificates are verified by default).
    #[arg(short = 'k', long, help_heading = "NETWORK")]
    pub insecure: bool,

    /// Limit requests per second. E.g., --rate-limit 100.
    #[arg(long, help_heading = "NETWORK")]
    pub rate_limit: Option<u64>,

    /// Random delay before each request in milliseconds. E.g., --random-delay 100:500.
    #[arg(long, help_heading = "NETWORK")]
    pub random_delay: Option<String>,

    // HTTP
    /// Whether to follow HTTP redirects.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, help_heading = "HTTP")]
    pub follow_redirect: bool,

    /// Use HTTP/2 for requests.
    #[arg(long, help_heading = "HTTP")]
    pub http2: bool,

    /// Custom headers to add to the request (e.g., "User-Agent: my-app").
    #[arg(short = 'H', long, help_heading = "HTTP")]
    pub headers: Vec<String>,

    // OUTPUT
    /// Output file for the extracted items (instead of stdout).
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<String>,

    /// Write parameters.txt and directories.txt in the current directory.
    #[arg(short = 'O', long = "Output", help_heading = "OUTPUT")]
    pub output_split: bool,

    /// Tag every item with its category.
    #[arg(long, help_heading = "OUTPUT")]
    pub info: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain, help_heading = "OUTPUT")]
    pub format: OutputFormat,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Do not print the banner.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub silent: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,
}

/// Kind of a discovered token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Parameter,
    Input,
    JsVariable,
    Directory,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Parameter => "parameter",
            Category::Input => "input",
            Category::JsVariable => "js_variable",
            Category::Directory => "directory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens of one category, deduplicated and kept in lexicographic order.
pub type TokenSet = BTreeSet<String>;

/// Outcome of fetching one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Body(String),
    Unavailable,
}

/// Tokens scanned out of fetched pages
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageTokens {
    pub inputs: TokenSet,
    pub js_variables: TokenSet,
}

impl PageTokens {
    pub fn merge(&mut self, other: PageTokens) {
        self.inputs.extend(other.inputs);
        self.js_variables.extend(other.js_variables);
    }
}

/// Discovery modes requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    pub parameters: bool,
    pub directories: bool,
}

impl Modes {
    /// Returns `None` when neither mode was requested.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        if cli.parameters || cli.directories {
            Some(Self {
                parameters: cli.parameters,
                directories: cli.directories,
            })
        } else {
            None
        }
    }
}

/// Token sets collected during one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Findings {
    pub parameters: TokenSet,
    pub inputs: TokenSet,
    pub js_variables: TokenSet,
    pub directories: TokenSet,
}

impl Findings {
    /// Sections in emission order for the requested modes.
    pub fn sections(&self, modes: Modes) -> Vec<(Category, &TokenSet)> {
        let mut sections = Vec::with_capacity(4);
        if modes.parameters {
            sections.extend(self.parameter_sections());
        }
        if modes.directories {
            sections.extend(self.directory_sections());
        }
        sections
    }

    pub fn parameter_sections(&self) -> [(Category, &TokenSet); 3] {
        [
            (Category::Parameter, &self.parameters),
            (Category::Input, &self.inputs),
            (Category::JsVariable, &self.js_variables),
        ]
    }

    pub fn directory_sections(&self) -> [(Category, &TokenSet); 1] {
        [(Category::Directory, &self.directories)]
    }
}
