//! Process listing
//!
//! A snapshot of the operating system's processes, produced by running
//! `ps` and parsing its text output into [`ProcessRecord`]s.

pub mod parser;
pub mod record;
pub mod service;

pub use parser::parse_process_listing;
pub use record::ProcessRecord;
pub use service::ProcessSnapshotService;
