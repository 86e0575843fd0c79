use std::path::{Path, PathBuf};

/// File-existence oracle consumed by the runner during validation.
pub trait FileSystemPort {
    /// Whether a file exists at the given path. Relative paths are
    /// resolved against the working directory.
    fn exists(&self, path: &Path) -> bool;

    /// Resolve a path to its absolute form, for error messages.
    fn resolve_absolute(&self, path: &Path) -> PathBuf;
}
