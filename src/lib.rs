// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers for publishing Bible translations as static JSON content.
//!
//! A translation arrives as one JSON file holding every book. The
//! functions here split it into one file per book, named by a slug of
//! the book name, and record the version with a summary of its books in
//! a catalog shared by all versions:
//!
//! ```text
//! content/bible/versions.json
//! content/bible/<version_id>/<slug>.json
//! ```
//!
//! The `structure-bible` binary runs [`structure_bible`] on the default
//! [`ContentLayout`].

use std::path::Path;

use log::info;

pub mod book;
pub mod catalog;
pub mod error;
pub mod layout;
pub mod loader;
pub mod reader;
pub mod slug;

mod json;

pub use book::{split_books, Book, BookSummary, Chapter};
pub use catalog::{upsert, Catalog, VersionEntry};
pub use error::{Error, Result};
pub use layout::ContentLayout;
pub use loader::load;
pub use slug::slugify;

/// Structures the translation in `input` as version `version_id`.
///
/// The input is loaded and checked in full first, so an unreadable or
/// malformed input leaves the content tree untouched. The book files are
/// then written and finally the catalog entry for the version is
/// inserted or replaced. Returns the summaries recorded in the catalog.
pub fn structure_bible(
    layout: &ContentLayout,
    input: &Path,
    version_id: &str,
    version_name: &str,
) -> Result<Vec<BookSummary>> {
    let books = load(input)?;
    let summaries = split_books(&books, &layout.version_dir(version_id))?;
    upsert(
        &layout.catalog_path(),
        version_id,
        version_name,
        summaries.clone(),
    )?;
    info!("Structured {} books of {version_name} ({version_id})", summaries.len());
    Ok(summaries)
}
