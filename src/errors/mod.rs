//! Centralized error handling for proc-tabulator
//!
//! This module unifies the error types used across the application layers
//! and provides consistent error reporting.
//!
//! # Error Categories
//!
//! - **Table Errors**: invalid column descriptors or table options, rejected
//!   when the component is built rather than when the browser renders it
//! - **External Service Errors**: the process listing command failed
//! - **Configuration Errors**: settings rejected when the config is loaded
//!
//! # Usage
//!
//! ```rust
//! use proc_tabulator::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for table assembly Results
pub type TableResult<T> = Result<T, TableError>;
