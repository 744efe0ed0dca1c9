//! Read access to a structured content tree.
//!
//! These are the lookups a site rendering the content performs: list the
//! versions, open one book, pick one chapter. Missing files are `None`
//! rather than errors; malformed files are errors.

use std::fs;

use crate::book::{Book, Chapter};
use crate::catalog::{Catalog, VersionEntry};
use crate::error::{Error, Result};
use crate::layout::ContentLayout;

impl ContentLayout {
    /// All versions in catalog order, or none if there is no catalog yet.
    pub fn versions(&self) -> Result<Vec<VersionEntry>> {
        Ok(Catalog::load(&self.catalog_path())?.into_versions())
    }

    pub fn version(&self, version_id: &str) -> Result<Option<VersionEntry>> {
        Ok(self
            .versions()?
            .into_iter()
            .find(|version| version.id == version_id))
    }

    pub fn book(&self, version_id: &str, slug: &str) -> Result<Option<Book>> {
        let path = self.book_path(version_id, slug);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(Error::io(&path))?;
        let book = serde_json::from_str(&contents)
            .map_err(|source| Error::Structural { path, source })?;
        Ok(Some(book))
    }

    /// Chapter `number` of a book, counting from 1.
    pub fn chapter(&self, version_id: &str, slug: &str, number: usize) -> Result<Option<Chapter>> {
        let Some(book) = self.book(version_id, slug)? else {
            return Ok(None);
        };
        let Some(index) = number.checked_sub(1) else {
            return Ok(None);
        };
        Ok(book.chapters.into_iter().nth(index))
    }
}
