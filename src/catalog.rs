//! The catalog of versions shared by every run.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::book::BookSummary;
use crate::error::{Error, Result};
use crate::json;

/// One translation listed in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    pub name: String,
    pub books: Vec<BookSummary>,
    /// Keys found in an existing catalog that this tool does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Whether [`Catalog::upsert`] added a version or replaced one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

/// The list of versions, in file order, keyed by [`VersionEntry::id`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    versions: Vec<VersionEntry>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Reads the catalog at `path`. A missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            debug!("No catalog at {}, starting empty", path.display());
            return Ok(Catalog::new());
        }
        let contents = fs::read_to_string(path).map_err(Error::io(path))?;
        serde_json::from_str(&contents).map_err(|source| Error::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces the file at `path` with this catalog.
    pub fn store(&self, path: &Path) -> Result<()> {
        json::write_pretty_atomic(path, self)
    }

    pub fn versions(&self) -> &[VersionEntry] {
        &self.versions
    }

    pub fn into_versions(self) -> Vec<VersionEntry> {
        self.versions
    }

    pub fn get(&self, id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|version| version.id == id)
    }

    /// Sets the name and books of version `id`.
    ///
    /// An existing entry keeps its position and any unknown keys. A new
    /// entry is appended at the end.
    pub fn upsert(&mut self, id: &str, name: &str, books: Vec<BookSummary>) -> Upsert {
        match self.versions.iter_mut().find(|version| version.id == id) {
            Some(version) => {
                version.name = name.to_string();
                version.books = books;
                Upsert::Updated
            }
            None => {
                self.versions.push(VersionEntry {
                    id: id.to_string(),
                    name: name.to_string(),
                    books,
                    extra: Map::new(),
                });
                Upsert::Inserted
            }
        }
    }
}

/// Loads the catalog at `catalog_path`, upserts the version and writes the
/// whole catalog back.
///
/// There is no locking: two runs upserting concurrently can lose one of
/// the updates.
pub fn upsert(
    catalog_path: &Path,
    version_id: &str,
    version_name: &str,
    books: Vec<BookSummary>,
) -> Result<()> {
    let mut catalog = Catalog::load(catalog_path)?;
    let outcome = catalog.upsert(version_id, version_name, books);
    info!("{outcome:?} version {version_id} in {}", catalog_path.display());

    if let Some(parent) = catalog_path.parent() {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    catalog.store(catalog_path)
}
