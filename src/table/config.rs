//! Table assembly
//!
//! [`TableBuilder`] merges the layout defaults with caller options into the
//! configuration object handed to `new Tabulator(...)`. The result is
//! validated once, when the page is rendered; afterwards every mutation
//! (sorting, paging, refreshing) happens in the browser.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use strum::{AsRefStr, Display, EnumString};

use super::column::ColumnDescriptor;
use super::refresh::AutoRefresh;
use super::validate_identifier;
use crate::config::defaults::{DEFAULT_PAGE_SIZE, DEFAULT_TABLE_HEIGHT};
use crate::errors::{TableError, TableResult};

const LAYOUT: &str = "fitDataStretch";
const LOCAL_PAGINATION: &str = "local";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Where the widget gets its rows from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Fetched (and re-fetched on refresh) from a URL
    Url(String),
    /// Embedded in the page
    Rows(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitialSort {
    pub column: String,
    pub dir: SortDirection,
}

/// Configuration object passed verbatim to the widget constructor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub layout: String,
    pub height: String,
    pub columns: Vec<ColumnDescriptor>,
    pub movable_columns: bool,
    #[serde(rename = "ajaxURL", skip_serializing_if = "Option::is_none")]
    pub ajax_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_sort: Option<Vec<InitialSort>>,
}

/// Builder for a [`Table`]
#[derive(Debug, Clone)]
pub struct TableBuilder {
    id: String,
    columns: Vec<ColumnDescriptor>,
    source: Option<DataSource>,
    height: String,
    pagination: bool,
    page_size: u32,
    sort: Option<(String, SortDirection)>,
    auto_refresh_ms: Option<u64>,
}

impl TableBuilder {
    pub fn new(id: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            id: id.into(),
            columns,
            source: None,
            height: DEFAULT_TABLE_HEIGHT.to_string(),
            pagination: true,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            auto_refresh_ms: None,
        }
    }

    #[must_use]
    pub fn ajax_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.source = (!url.is_empty()).then_some(DataSource::Url(url));
        self
    }

    #[must_use]
    pub fn data(mut self, rows: Vec<Value>) -> Self {
        self.source = (!rows.is_empty()).then_some(DataSource::Rows(rows));
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Initial sort column; direction defaults to descending
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, dir: SortDirection) -> Self {
        self.sort = Some((field.into(), dir));
        self
    }

    /// Poll the data source every `interval_ms`; `0` disables auto-refresh
    #[must_use]
    pub fn auto_refresh(mut self, interval_ms: u64) -> Self {
        self.auto_refresh_ms = (interval_ms > 0).then_some(interval_ms);
        self
    }

    pub fn build(self) -> TableResult<Table> {
        validate_identifier(&self.id)?;

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.field()) {
                return Err(TableError::duplicate_field(&self.id, column.field()));
            }
        }

        if let Some((field, _)) = &self.sort
            && !seen.contains(field.as_str())
        {
            return Err(TableError::unknown_sort_column(&self.id, field));
        }

        if self.pagination && self.page_size == 0 {
            return Err(TableError::invalid_value(
                "page_size",
                "must be greater than zero when pagination is enabled",
            ));
        }

        if self.auto_refresh_ms.is_some() && !matches!(self.source, Some(DataSource::Url(_))) {
            return Err(TableError::invalid_value(
                "auto_refresh",
                "requires a URL data source",
            ));
        }

        let (ajax_url, data) = match self.source {
            Some(DataSource::Url(url)) => (Some(url), None),
            Some(DataSource::Rows(rows)) => (None, Some(rows)),
            None => (None, None),
        };

        let config = TableConfig {
            layout: LAYOUT.to_string(),
            height: self.height,
            columns: self.columns,
            movable_columns: true,
            ajax_url,
            data,
            pagination: self.pagination.then(|| LOCAL_PAGINATION.to_string()),
            pagination_size: self.pagination.then_some(self.page_size),
            initial_sort: self
                .sort
                .map(|(column, dir)| vec![InitialSort { column, dir }]),
        };

        Ok(Table {
            id: self.id,
            config,
            auto_refresh: AutoRefresh::from_interval(self.auto_refresh_ms),
        })
    }
}

/// A validated table ready to be rendered into a page
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    id: String,
    config: TableConfig,
    auto_refresh: AutoRefresh,
}

impl Table {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Initial auto-refresh state applied once the widget is created
    pub fn auto_refresh(&self) -> AutoRefresh {
        self.auto_refresh
    }

    pub fn data_url(&self) -> Option<&str> {
        self.config.ajax_url.as_deref()
    }

    /// Configuration as JSON that is safe to inline in a `<script>` element
    pub fn config_json(&self) -> TableResult<String> {
        let json = serde_json::to_string(&self.config)?;
        Ok(json.replace("</", "<\\/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::Sorter;
    use rstest::rstest;
    use serde_json::json;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::titled("pid", "PID").width(80).sorter(Sorter::Number),
            ColumnDescriptor::titled("cpu", "CPU %").width(80).sorter(Sorter::Number),
        ]
    }

    #[test]
    fn test_defaults_merged_with_options() {
        let table = TableBuilder::new("procs", columns())
            .ajax_url("/api/processes")
            .sort_by("cpu", SortDirection::Desc)
            .auto_refresh(2000)
            .build()
            .unwrap();

        let config = serde_json::to_value(table.config()).unwrap();
        assert_eq!(
            config,
            json!({
                "layout": "fitDataStretch",
                "height": "500px",
                "columns": [
                    {"field": "pid", "title": "PID", "width": 80, "sorter": "number"},
                    {"field": "cpu", "title": "CPU %", "width": 80, "sorter": "number"}
                ],
                "movableColumns": true,
                "ajaxURL": "/api/processes",
                "pagination": "local",
                "paginationSize": 25,
                "initialSort": [{"column": "cpu", "dir": "desc"}]
            })
        );
        assert_eq!(table.auto_refresh(), AutoRefresh::Running { interval_ms: 2000 });
        assert_eq!(table.data_url(), Some("/api/processes"));
    }

    #[test]
    fn test_inline_rows_without_pagination() {
        let table = TableBuilder::new("inline", columns())
            .data(vec![json!({"pid": 1, "cpu": 0.5})])
            .pagination(false)
            .height("300px")
            .build()
            .unwrap();

        let config = serde_json::to_value(table.config()).unwrap();
        assert_eq!(config["data"], json!([{"pid": 1, "cpu": 0.5}]));
        assert_eq!(config["height"], "300px");
        assert!(config.get("ajaxURL").is_none());
        assert!(config.get("pagination").is_none());
        assert!(config.get("paginationSize").is_none());
        assert!(config.get("initialSort").is_none());
        assert_eq!(table.auto_refresh(), AutoRefresh::Stopped);
    }

    #[test]
    fn test_zero_auto_refresh_is_disabled() {
        let table = TableBuilder::new("procs", columns())
            .ajax_url("/api/processes")
            .auto_refresh(0)
            .build()
            .unwrap();
        assert!(!table.auto_refresh().is_running());
    }

    #[rstest]
    #[case("procs")]
    #[case("_hidden")]
    #[case("table_2")]
    fn test_valid_identifiers(#[case] id: &str) {
        assert!(TableBuilder::new(id, columns()).build().is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("2fast")]
    #[case("my-table")]
    #[case("a b")]
    #[case("x\");alert(1);//")]
    fn test_invalid_identifiers(#[case] id: &str) {
        assert_eq!(
            TableBuilder::new(id, columns()).build().unwrap_err(),
            TableError::invalid_identifier(id)
        );
    }

    #[test]
    fn test_duplicate_fields_rejected() {
        let mut cols = columns();
        cols.push(ColumnDescriptor::new("pid"));
        assert_eq!(
            TableBuilder::new("procs", cols).build().unwrap_err(),
            TableError::duplicate_field("procs", "pid")
        );
    }

    #[test]
    fn test_unknown_sort_column_rejected() {
        let err = TableBuilder::new("procs", columns())
            .sort_by("mem", SortDirection::Asc)
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::unknown_sort_column("procs", "mem"));
    }

    #[test]
    fn test_auto_refresh_needs_url() {
        let err = TableBuilder::new("procs", columns())
            .data(vec![json!({"pid": 1})])
            .auto_refresh(1000)
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidValue { ref option, .. } if option == "auto_refresh"));
    }

    #[test]
    fn test_zero_page_size_rejected_only_with_pagination() {
        assert!(TableBuilder::new("t", columns()).page_size(0).build().is_err());
        assert!(
            TableBuilder::new("t", columns())
                .pagination(false)
                .page_size(0)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_config_json_is_script_safe() {
        let table = TableBuilder::new("t", vec![ColumnDescriptor::titled("x", "</script><b>")])
            .build()
            .unwrap();
        let json = table.config_json().unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains(r#"<\/script><b>"#));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["columns"][0]["title"], "</script><b>");
    }
}
