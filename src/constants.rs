/// HTTP constants
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 50;
pub const HTTP_OK: u16 = 200;

/// HTML parsing constants
pub const INPUT_NAME_SELECTOR: &str = "input[name]";

/// Declarations of the form `var|let|const <name> [= <value>];`.
/// Single- and double-quoted values are matched lazily up to their closing quote.
pub const JS_VARIABLE_PATTERN: &str =
    r#"(?:var|let|const)\s+([\w$]+)\s*=?\s*(?::\s*\[\]|\{\}|=\s*(?:".*?"|'.*?'|[^;,]+))?;"#;

/// Time conversion constants
pub const MICROSECONDS_PER_SECOND: u64 = 1_000_000;

/// Files written by `--Output`
pub const PARAMETERS_FILE: &str = "parameters.txt";
pub const DIRECTORIES_FILE: &str = "directories.txt";

/// Marker for reading the URL list from stdin
pub const STDIN_MARKER: &str = "-";

pub const MISSING_MODE_ERROR: &str = "Error: Please specify either --parameters or --directories.";

pub const BANNER: &str = r#"
 ▄▄ • ▄▄▄  ▄▄▄ . ▄▄▄· ▄▄▄· ▄· ▄▌
▐█ ▀ ▪▀▄ █·▀▄.▀·▐█ ▄█▐█ ▄█▐█▪██▌
▄█ ▀█▄▐▀▀▄ ▐▀▀▪▄ ██▀· ██▀·▐█▌▐█▪
▐█▄▪▐█▐█•█▌▐█▄▄▌▐█▪·•▐█▪·• ▐█▀·.
·▀▀▀▀ .▀  ▀ ▀▀▀ .▀   .▀     ▀ •
"#;
