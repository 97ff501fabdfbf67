//! Tabulator table components
//!
//! Pure builders: column descriptors and display options go in, a JSON
//! configuration object plus the HTML/JavaScript glue that drives it come
//! out. Nothing here performs I/O.
//!
//! ```rust
//! use proc_tabulator::table::{ColumnDescriptor, Sorter, SortDirection, TableBuilder};
//!
//! let table = TableBuilder::new(
//!     "procs",
//!     vec![ColumnDescriptor::titled("pid", "PID").width(80).sorter(Sorter::Number)],
//! )
//! .ajax_url("/api/processes")
//! .sort_by("pid", SortDirection::Asc)
//! .build()
//! .unwrap();
//! assert_eq!(table.id(), "procs");
//! ```

pub mod column;
pub mod config;
pub mod controls;
pub mod refresh;
pub mod script;

pub use column::{
    ColumnDescriptor, Editor, Formatter, Frozen, HeaderFilter, HorizontalAlign, Sorter, Tooltip,
    VerticalAlign, title_case,
};
pub use config::{DataSource, SortDirection, Table, TableBuilder, TableConfig};
pub use controls::TableControls;
pub use refresh::AutoRefresh;
pub use script::{ClientNames, RenderedTable, render_table};

use crate::errors::{TableError, TableResult};

/// Table ids namespace generated JavaScript, so they must be identifier fragments
pub(crate) fn validate_identifier(id: &str) -> TableResult<()> {
    let mut chars = id.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(TableError::invalid_identifier(id))
    }
}
