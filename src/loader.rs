use std::fs;
use std::path::Path;

use log::debug;
use serde_json::error::Category;

use crate::book::Book;
use crate::error::{Error, Result};

/// Reads a whole translation: a JSON array of books.
///
/// Every book is checked for its `name`, `abbrev` and `chapters` before
/// this returns, so a malformed entry is reported before anything is
/// written. Unknown keys are ignored.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    let contents = fs::read_to_string(path).map_err(|err| Error::InputParse {
        path: path.to_path_buf(),
        source: serde_json::Error::io(err),
    })?;
    let books: Vec<Book> = serde_json::from_str(&contents).map_err(|source| {
        let path = path.to_path_buf();
        match source.classify() {
            Category::Data => Error::Structural { path, source },
            _ => Error::InputParse { path, source },
        }
    })?;
    debug!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}
