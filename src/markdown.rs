//! Markdown passthrough
//!
//! Files are read from a content root and handed to the page unrendered;
//! conversion to HTML happens in the browser.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::ContentConfig;
use crate::errors::AppResult;

/// Outcome of resolving a requested document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownDocument {
    Found { name: String, content: String },
    NotFound { requested: String },
}

/// Resolves request paths to Markdown files under a content root
#[derive(Debug, Clone)]
pub struct MarkdownResolver {
    root: PathBuf,
    default_extension: String,
}

impl MarkdownResolver {
    pub fn new(root: impl Into<PathBuf>, default_extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_extension: default_extension.into(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(&config.markdown_root, &config.default_extension)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up `requested` relative to the root
    ///
    /// The default extension is appended when the request has none. Paths
    /// that escape the root, and anything that is not a regular file, are
    /// reported as not found.
    pub async fn resolve(&self, requested: &str) -> AppResult<MarkdownDocument> {
        let not_found = || MarkdownDocument::NotFound {
            requested: requested.to_string(),
        };

        let Some(relative) = self.relative_path(requested) else {
            debug!(requested, "Rejected markdown path outside content root");
            return Ok(not_found());
        };
        let Some(path) = self.contained_file(&relative).await else {
            debug!(requested, "Markdown file not found");
            return Ok(not_found());
        };

        let content = tokio::fs::read_to_string(&path).await?;
        Ok(MarkdownDocument::Found {
            name: requested.to_string(),
            content,
        })
    }

    /// Canonical path of a regular file that stays under the root once
    /// symlinks are resolved
    async fn contained_file(&self, relative: &Path) -> Option<PathBuf> {
        let root = tokio::fs::canonicalize(&self.root).await.ok()?;
        let path = tokio::fs::canonicalize(root.join(relative)).await.ok()?;
        if !path.starts_with(&root) {
            debug!(path = %path.display(), "Markdown path resolves outside content root");
            return None;
        }
        let meta = tokio::fs::metadata(&path).await.ok()?;
        meta.is_file().then_some(path)
    }

    fn relative_path(&self, requested: &str) -> Option<PathBuf> {
        let mut relative = PathBuf::new();
        for component in Path::new(requested).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        if relative.as_os_str().is_empty() {
            return None;
        }
        if relative.extension().is_none() {
            relative.set_extension(&self.default_extension);
        }
        Some(relative)
    }
}
