//! Loading of survey content (question sets and recommendations).

use std::path::{Path, PathBuf};

use tracing::info;

use assessment_core::model::{Catalog, CatalogDraft, IndustryLevel};

use crate::error::ContentError;

const BUILTIN_CONTENT: &str = include_str!("../content/industry.json");

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// The manufacturing maturity survey shipped with the crate.
    #[default]
    Builtin,
    /// A JSON content file.
    File(PathBuf),
}

impl ContentSource {
    /// Read and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the file cannot be read, is not valid JSON,
    /// or fails catalog validation.
    pub fn load(&self) -> Result<Catalog, ContentError> {
        let catalog = match self {
            Self::Builtin => parse_catalog(BUILTIN_CONTENT)?,
            Self::File(path) => load_catalog(path)?,
        };
        info!(
            source = ?self,
            initial = catalog.initial().len(),
            industry2 = catalog.detailed(IndustryLevel::Two).len(),
            industry3 = catalog.detailed(IndustryLevel::Three).len(),
            industry4 = catalog.detailed(IndustryLevel::Four).len(),
            "survey content loaded"
        );
        Ok(catalog)
    }
}

/// Parse and validate catalog JSON.
///
/// # Errors
///
/// Returns `ContentError::Parse` or `ContentError::Catalog`.
pub fn parse_catalog(json: &str) -> Result<Catalog, ContentError> {
    let draft: CatalogDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

/// Read a JSON content file and validate it.
///
/// # Errors
///
/// Returns `ContentError::Io` when the file cannot be read, otherwise as
/// [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, ContentError> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

/// The built-in catalog.
///
/// # Errors
///
/// Only fails if the embedded content is malformed.
pub fn builtin_catalog() -> Result<Catalog, ContentError> {
    parse_catalog(BUILTIN_CONTENT)
}
