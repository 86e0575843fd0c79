use std::path::{Path, PathBuf};

use crate::ports::FileSystemPort;

/// Real file system rooted at a working directory. Relative paths are
/// resolved against the root before any check.
#[derive(Debug, Clone)]
pub struct HostFileSystem {
    root: PathBuf,
}

impl HostFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSystemPort for HostFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolve_absolute(path).is_file()
    }

    fn resolve_absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}
