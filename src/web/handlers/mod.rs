//! Web handlers module
//!
//! HTTP request handlers organized by page or endpoint. Handlers stay thin:
//! they delegate to the process service, the Markdown resolver or the page
//! builders and map the outcome to a response.

pub mod health;
pub mod index;
pub mod markdown;
pub mod processes;
pub mod static_assets;
