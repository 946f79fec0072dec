use crate::output::path::url_to_path;
use crate::MirrorError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes converted pages into the mirror directory
#[derive(Debug, Clone)]
pub struct PageWriter {
    root: String,
    out_dir: PathBuf,
}

impl PageWriter {
    pub fn new(root: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Creates the mirror directory if it does not exist yet
    pub fn prepare(&self) -> Result<(), MirrorError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| MirrorError::Write {
            path: self.out_dir.clone(),
            source,
        })
    }

    /// Writes `text` to the file mirroring `url`, replacing any previous
    /// content, and returns the path written
    pub fn write_page(&self, url: &str, text: &str) -> Result<PathBuf, MirrorError> {
        let path = url_to_path(url, &self.root, &self.out_dir)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| MirrorError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, text.as_bytes()).map_err(|source| MirrorError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Path relative to the mirror directory, for progress messages
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.out_dir).unwrap_or(path)
    }
}
