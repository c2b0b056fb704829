/// Document sources — where training text comes from.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can hand over a document's full text.
pub trait DocumentSource {
    /// Human-readable name used in logs.
    fn describe(&self) -> String;

    fn read(&self) -> Result<String, SourceError>;
}

/// A document on disk, read whole.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory text.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for TextSource {
    fn describe(&self) -> String {
        format!("<inline text, {} bytes>", self.text.len())
    }

    fn read(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Command-line arguments naming a document end in `.txt`.
pub fn is_document_arg(arg: &str) -> bool {
    arg.ends_with(".txt")
}

/// Read every source in order and concatenate the texts.
///
/// No separator is inserted: if a document does not end with a newline its
/// last word runs into the next document's first word.
pub fn read_all(sources: &[Box<dyn DocumentSource>]) -> Result<String, SourceError> {
    let mut text = String::new();
    for source in sources {
        let contents = source.read()?;
        tracing::debug!(source = %source.describe(), bytes = contents.len(), "read document");
        text.push_str(&contents);
    }
    Ok(text)
}
