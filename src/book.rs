//! Books of a translation and the splitter writing one file per book.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::json;
use crate::slug::slugify;

/// The verses of one chapter, in order. Verses are copied through as
/// they appear in the source, whatever their JSON type.
pub type Chapter = Vec<Value>;

/// One book of a translation.
///
/// This is both an element of the source document and the content of the
/// per-book file, so the field order here is the order on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub abbrev: String,
    pub chapters: Vec<Chapter>,
}

/// The catalog's view of a book: its chapter count instead of its content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub name: String,
    pub slug: String,
    pub abbrev: String,
    pub chapters: usize,
    /// Keys found in an existing catalog that this tool does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookSummary {
    pub fn new(book: &Book, slug: String) -> BookSummary {
        BookSummary {
            name: book.name.clone(),
            slug,
            abbrev: book.abbrev.clone(),
            chapters: book.chapters.len(),
            extra: Map::new(),
        }
    }
}

/// Writes every book to `output_dir/<slug>.json` and returns their
/// summaries in input order.
///
/// The directory is created if needed and existing files are
/// overwritten. Two books with the same slug end up in the same file;
/// the later one wins.
pub fn split_books(books: &[Book], output_dir: &Path) -> Result<Vec<BookSummary>> {
    fs::create_dir_all(output_dir).map_err(Error::io(output_dir))?;
    debug!("Writing {} books to {}", books.len(), output_dir.display());

    let mut seen = HashSet::new();
    let mut summaries = Vec::with_capacity(books.len());
    for book in books {
        let slug = slugify(&book.name);
        if slug.is_empty() {
            warn!("Book {:?} has no ASCII characters, its slug is empty", book.name);
        }
        if !seen.insert(slug.clone()) {
            warn!("Book {:?} overwrites an earlier book with slug {slug:?}", book.name);
        }

        let path = output_dir.join(format!("{slug}.json"));
        json::write_pretty(&path, book)?;
        info!("Wrote {} ({} chapters)", path.display(), book.chapters.len());

        summaries.push(BookSummary::new(book, slug));
    }
    Ok(summaries)
}
