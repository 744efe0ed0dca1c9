//! Writing JSON files in the layout's format: two-space indentation,
//! non-ASCII text kept literally.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

pub(crate) fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents).map_err(Error::io(path))
}

/// Like [`write_pretty`], but the new contents only replace `path` once
/// they are fully written.
///
/// The data goes to a temporary file next to `path` which is then
/// renamed over it, so readers see either the old or the new file.
pub(crate) fn write_pretty_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(Error::io(dir))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(Error::io(file.path()))?;
    file.persist(path)
        .map_err(|err| Error::io(path)(err.error))?;
    Ok(())
}
