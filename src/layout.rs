use std::path::{Path, PathBuf};

/// Directory holding all versions, relative to the working directory.
pub const DEFAULT_ROOT: &str = "content/bible";

/// File name of the catalog inside the root.
pub const CATALOG_FILE: &str = "versions.json";

/// Where the per-book files and the catalog live.
///
/// ```text
/// <root>/versions.json
/// <root>/<version_id>/<slug>.json
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentLayout {
    root: PathBuf,
}

impl Default for ContentLayout {
    fn default() -> Self {
        ContentLayout::new(DEFAULT_ROOT)
    }
}

impl ContentLayout {
    pub fn new(root: impl Into<PathBuf>) -> ContentLayout {
        ContentLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    pub fn version_dir(&self, version_id: &str) -> PathBuf {
        self.root.join(version_id)
    }

    pub fn book_path(&self, version_id: &str, slug: &str) -> PathBuf {
        self.version_dir(version_id).join(format!("{slug}.json"))
    }
}
