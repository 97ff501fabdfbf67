//! proc-tabulator
//!
//! A small web service that lists the host's processes in an interactive
//! Tabulator table with auto-refresh, plus a Markdown passthrough for
//! documentation pages. The [`table`] module is usable on its own to build
//! any number of independent tables on a page.

pub mod assets;
pub mod config;
pub mod errors;
pub mod markdown;
pub mod processes;
pub mod table;
pub mod web;
