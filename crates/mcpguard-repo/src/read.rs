use camino::Utf8Path;
use std::io::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{path}: file not found")]
    NotFound { path: String },

    #[error("{path}: not valid UTF-8 text")]
    NotUtf8 { path: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read a whole document as UTF-8 text.
pub fn read_document(path: &Utf8Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DocumentError::NotFound {
            path: path.to_string(),
        },
        _ => DocumentError::Io {
            path: path.to_string(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8 {
        path: path.to_string(),
    })
}

/// Subject name for a document: its file name without the extension.
pub fn subject_name(path: &Utf8Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .unwrap_or(path.as_str())
        .to_string()
}
