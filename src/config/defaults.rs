/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

// Process listing defaults
pub const DEFAULT_PROCESS_COMMAND: &str = "ps";
pub const DEFAULT_PROCESS_ARGS: &[&str] = &["aux", "--no-headers"];
pub const DEFAULT_PROCESS_TIMEOUT_SECS: u64 = 10;

// Markdown content defaults
pub const DEFAULT_MARKDOWN_ROOT: &str = "./content";
pub const DEFAULT_MARKDOWN_EXTENSION: &str = "md";

// Table display defaults
pub const DEFAULT_TABLE_HEIGHT: &str = "500px";
pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_AUTO_REFRESH_MS: u64 = 2000;
pub const DEFAULT_REFRESH_INTERVALS: &[u32] = &[1, 2, 5, 10];
pub const DEFAULT_REFRESH_INTERVAL_SECS: u32 = 2;

// Client-side libraries
pub const TABULATOR_CSS_URL: &str = "https://unpkg.com/tabulator-tables@6.2.1/dist/css/tabulator.min.css";
pub const TABULATOR_JS_URL: &str = "https://unpkg.com/tabulator-tables@6.2.1/dist/js/tabulator.min.js";
pub const MARKED_JS_URL: &str = "https://cdn.jsdelivr.net/npm/marked/marked.min.js";
pub const GITHUB_MARKDOWN_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/github-markdown-css/5.5.1/github-markdown.min.css";
