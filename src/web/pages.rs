//! Server-rendered HTML pages

use askama::Template;

use crate::config::TableDisplayConfig;
use crate::config::defaults::{
    GITHUB_MARKDOWN_CSS_URL, MARKED_JS_URL, TABULATOR_CSS_URL, TABULATOR_JS_URL,
};
use crate::errors::TableResult;
use crate::table::{
    ColumnDescriptor, RenderedTable, SortDirection, Sorter, Table, TableBuilder,
    TableControls, render_table,
};

/// Id of the process table on the index page
pub const PROCESS_TABLE_ID: &str = "procs";
/// Data source polled by the process table
pub const PROCESS_API_URL: &str = "/api/processes";
/// Document linked from the index heading
pub const PROCESS_INFO_HREF: &str = "/md/process-monitor.md";

/// Third-party libraries loaded into every page
#[derive(Debug, Clone, Copy)]
pub struct CdnAssets {
    pub tabulator_css: &'static str,
    pub tabulator_js: &'static str,
    pub marked_js: &'static str,
    pub markdown_css: &'static str,
}

impl Default for CdnAssets {
    fn default() -> Self {
        Self {
            tabulator_css: TABULATOR_CSS_URL,
            tabulator_js: TABULATOR_JS_URL,
            marked_js: MARKED_JS_URL,
            markdown_css: GITHUB_MARKDOWN_CSS_URL,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    pub assets: CdnAssets,
    pub info_href: &'static str,
    pub controls: String,
    pub table: RenderedTable,
}

#[derive(Template)]
#[template(path = "markdown.html")]
pub struct MarkdownPage {
    pub title: String,
    pub assets: CdnAssets,
    pub content: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub title: &'static str,
    pub assets: CdnAssets,
    pub requested: String,
}

impl MarkdownPage {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: name.into(),
            assets: CdnAssets::default(),
            content: content.into(),
        }
    }
}

impl NotFoundPage {
    pub fn new(requested: impl Into<String>) -> Self {
        Self {
            title: "Not Found",
            assets: CdnAssets::default(),
            requested: requested.into(),
        }
    }
}

/// Columns shown for each process
pub fn process_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::titled("pid", "PID").width(80).sorter(Sorter::Number),
        ColumnDescriptor::titled("user", "User").width(100).sorter(Sorter::String),
        ColumnDescriptor::titled("cpu", "CPU %").width(80).sorter(Sorter::Number),
        ColumnDescriptor::titled("mem", "Mem %").width(80).sorter(Sorter::Number),
        ColumnDescriptor::titled("vsz", "VSZ").width(90).sorter(Sorter::Number),
        ColumnDescriptor::titled("rss", "RSS").width(90).sorter(Sorter::Number),
        ColumnDescriptor::titled("tty", "TTY").width(80),
        ColumnDescriptor::titled("stat", "Stat").width(60),
        ColumnDescriptor::titled("start", "Start").width(80),
        ColumnDescriptor::titled("time", "Time").width(80),
        ColumnDescriptor::titled("command", "Command").min_width(200),
    ]
}

/// The process table, polling the process API and sorted by CPU usage
pub fn process_table(display: &TableDisplayConfig) -> TableResult<Table> {
    TableBuilder::new(PROCESS_TABLE_ID, process_columns())
        .ajax_url(PROCESS_API_URL)
        .height(display.height.clone())
        .page_size(display.page_size)
        .sort_by("cpu", SortDirection::Desc)
        .auto_refresh(display.auto_refresh_ms)
        .build()
}

impl IndexPage {
    /// Assemble the "Process Monitor" page
    pub fn build(display: &TableDisplayConfig) -> TableResult<Self> {
        let table = process_table(display)?;
        let controls = TableControls::new(PROCESS_TABLE_ID)
            .intervals(display.refresh_intervals.clone())
            .default_interval(display.default_interval)
            .state(table.auto_refresh())
            .render()?;

        Ok(Self {
            title: "Process Monitor",
            assets: CdnAssets::default(),
            info_href: PROCESS_INFO_HREF,
            controls,
            table: render_table(&table)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_columns_serialise() {
        let columns = serde_json::to_value(process_columns()).unwrap();
        assert_eq!(columns.as_array().unwrap().len(), 11);
        assert_eq!(
            columns[0],
            serde_json::json!({"field": "pid", "title": "PID", "width": 80, "sorter": "number"})
        );
        assert_eq!(
            columns[10],
            serde_json::json!({"field": "command", "title": "Command", "minWidth": 200})
        );
    }

    #[test]
    fn test_index_page_renders_table_and_controls() {
        let html = IndexPage::build(&TableDisplayConfig::default())
            .unwrap()
            .render()
            .unwrap();

        assert!(html.contains("<title>Process Monitor</title>"));
        assert!(html.contains("System Process List"));
        assert!(html.contains(r#"<a href="/md/process-monitor.md"> see info..</a>"#));
        assert!(html.contains("Click column headers to sort. Drag to reorder columns."));
        assert!(html.contains(r#"<div id="procs"></div>"#));
        assert!(html.contains("Refresh Now"));
        assert!(html.contains("Auto-refresh: ON (2s)"));
        assert!(html.contains("startAutoRefresh_procs(2000);"));
        assert!(html.contains(r#""initialSort":[{"column":"cpu","dir":"desc"}]"#));
        assert!(html.contains(TABULATOR_JS_URL));
        assert!(html.contains("/static/js/table-runtime.js"));
    }

    #[test]
    fn test_index_page_without_auto_refresh() {
        let display = TableDisplayConfig {
            auto_refresh_ms: 0,
            ..TableDisplayConfig::default()
        };
        let html = IndexPage::build(&display).unwrap().render().unwrap();
        assert!(html.contains("Auto-refresh: OFF"));
        assert!(!html.contains("startAutoRefresh_procs(0)"));
    }

    #[test]
    fn test_interval_selector_matches_configured_auto_refresh() {
        let display = TableDisplayConfig {
            auto_refresh_ms: 5000,
            ..TableDisplayConfig::default()
        };
        let html = IndexPage::build(&display).unwrap().render().unwrap();
        assert!(html.contains("Auto-refresh: ON (5s)"));
        assert!(html.contains(r#"<option value="5" selected>5 seconds</option>"#));
        assert!(html.contains(r#"<option value="2">2 seconds</option>"#));
    }

    #[test]
    fn test_markdown_page_escapes_raw_text() {
        let html = MarkdownPage::new("notes.md", "# Title\n<script>x</script>")
            .render()
            .unwrap();
        assert!(html.contains("<title>notes.md</title>"));
        assert!(html.contains(r#"<div class="marked"># Title"#));
        assert!(html.contains("&lt;script&gt;x"));
        assert!(!html.contains("<script>x"));
    }

    #[test]
    fn test_not_found_page_echoes_request() {
        let html = NotFoundPage::new("missing").render().unwrap();
        assert!(html.contains("<h1>Not Found</h1>"));
        assert!(html.contains("File not found: missing"));
    }
}
