//! Client-side initialisation for a table
//!
//! Every global a table introduces is derived from its id, so any number of
//! tables can share a page. Timer bookkeeping lives in the shared
//! `TableRuntime` object (served from `/static/js/table-runtime.js`), keyed
//! by table id; the per-table functions only delegate to it.

use askama::Template;

use super::config::Table;
use crate::errors::TableResult;

/// Names of the globals and DOM elements generated for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientNames {
    pub table_id: String,
    pub instance: String,
    pub refresh: String,
    pub start: String,
    pub stop: String,
    pub toggle: String,
    pub status_element: String,
    pub interval_element: String,
}

impl ClientNames {
    pub fn for_table(id: &str) -> Self {
        Self {
            table_id: id.to_string(),
            instance: format!("tabulator_{id}"),
            refresh: format!("refreshData_{id}"),
            start: format!("startAutoRefresh_{id}"),
            stop: format!("stopAutoRefresh_{id}"),
            toggle: format!("toggleAutoRefresh_{id}"),
            status_element: format!("{id}-auto-status"),
            interval_element: format!("{id}-interval"),
        }
    }

    /// JavaScript globals declared by the table's script
    pub fn globals(&self) -> [&str; 5] {
        [
            self.instance.as_str(),
            self.refresh.as_str(),
            self.start.as_str(),
            self.stop.as_str(),
            self.toggle.as_str(),
        ]
    }
}

#[derive(Template)]
#[template(path = "table/init.js", escape = "none")]
struct InitScript<'a> {
    names: &'a ClientNames,
    config_json: &'a str,
    data_url: &'a str,
    auto_refresh_ms: u64,
}

/// Container id plus the script that brings the widget to life
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub id: String,
    pub script: String,
}

/// Render the initialisation script for `table`
pub fn render_table(table: &Table) -> TableResult<RenderedTable> {
    let names = ClientNames::for_table(table.id());
    let config_json = table.config_json()?;
    let data_url = match table.data_url() {
        Some(url) => serde_json::to_string(url)?.replace("</", "<\\/"),
        None => "null".to_string(),
    };

    let script = InitScript {
        names: &names,
        config_json: &config_json,
        data_url: &data_url,
        auto_refresh_ms: table.auto_refresh().interval_ms().unwrap_or(0),
    }
    .render()?;

    Ok(RenderedTable {
        id: table.id().to_string(),
        script,
    })
}
