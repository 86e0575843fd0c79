use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::FileSystemPort;

/// In-memory file-existence oracle: only paths registered with
/// `create_file` exist. Relative paths resolve under a fixed fake root.
#[derive(Default)]
pub struct FakeFileSystem {
    files: Mutex<HashSet<PathBuf>>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_file(&self, path: impl Into<PathBuf>) {
        self.files.lock().unwrap().insert(path.into());
    }
}

impl FileSystemPort for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains(path)
    }

    fn resolve_absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { Path::new("/work").join(path) }
    }
}
