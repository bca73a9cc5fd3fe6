use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw pod file I/O.
///
/// All methods take `&self`; implementations that hold state use interior
/// mutability.
pub trait StorageBackend {
    /// Read a file's content.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_file(&self, pod_path: &str) -> Result<Option<String>>;

    /// Write a file, creating parent directories as needed.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_file(&self, pod_path: &str, content: &str) -> Result<()>;

    /// Delete a file. Deleting a missing file is not an error.
    fn delete_file(&self, pod_path: &str) -> Result<()>;

    fn file_exists(&self, pod_path: &str) -> Result<bool>;

    /// Pod paths of every file below the `prefix` directory, sorted.
    fn list_files(&self, prefix: &str) -> Result<Vec<String>>;

    /// Location of the file behind `pod_path`.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn file_path(&self, pod_path: &str) -> Result<PathBuf>;
}
