use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not parse {} as a JSON list of books: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed book entry in {}: {source}", path.display())]
    Structural {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not parse catalog {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO Error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serde error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Returns a closure wrapping an [`std::io::Error`] with the path it
    /// happened on, for use with `map_err`.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
        move |source| Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
