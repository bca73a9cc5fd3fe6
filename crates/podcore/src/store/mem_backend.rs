use super::backend::StorageBackend;
use crate::error::{PodError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Files are keyed by their pod path exactly as given, so `/content/a.md`
/// and `content/a.md` are different files here.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<BTreeMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with files.
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let backend = Self::new();
        backend.files.borrow_mut().extend(
            files
                .into_iter()
                .map(|(path, content)| (path.into(), content.into())),
        );
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read_file(&self, pod_path: &str) -> Result<Option<String>> {
        Ok(self.files.borrow().get(pod_path).cloned())
    }

    fn write_file(&self, pod_path: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PodError::Store("Simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(pod_path.to_string(), content.to_string());
        Ok(())
    }

    fn delete_file(&self, pod_path: &str) -> Result<()> {
        self.files.borrow_mut().remove(pod_path);
        Ok(())
    }

    fn file_exists(&self, pod_path: &str) -> Result<bool> {
        Ok(self.files.borrow().contains_key(pod_path))
    }

    fn list_files(&self, prefix: &str) -> Result<Vec<String>> {
        let dir = format!("{}/", prefix.trim_end_matches('/'));
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.starts_with(&dir))
            .cloned()
            .collect())
    }

    fn file_path(&self, pod_path: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{}", pod_path)))
    }
}
