use super::backend::StorageBackend;
use crate::error::{PodError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Pod files stored under a root directory on disk.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a pod path onto the filesystem. The leading `/` is optional.
    fn resolve(&self, pod_path: &str) -> Result<PathBuf> {
        let relative = Path::new(pod_path.trim_start_matches('/'));
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(PodError::InvalidPath(pod_path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PodError::Io)?;
        }
        Ok(())
    }

    fn to_pod_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let mut pod_path = String::new();
        for component in relative.components() {
            pod_path.push('/');
            pod_path.push_str(component.as_os_str().to_str()?);
        }
        Some(pod_path)
    }

    fn collect_files(&self, dir: &Path, out: &mut Vec<String>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(PodError::Io)?;

        for entry in entries {
            let entry = entry.map_err(PodError::Io)?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(PodError::Io)?;
            if file_type.is_symlink() && path.is_dir() {
                tracing::warn!(path = %path.display(), "skipping symlinked directory");
                continue;
            }
            if file_type.is_dir() {
                self.collect_files(&path, out)?;
                continue;
            }

            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping non UTF-8 file name");
                continue;
            };
            if is_tmp_artifact(name) {
                continue;
            }
            match self.to_pod_path(&path) {
                Some(pod_path) => out.push(pod_path),
                None => tracing::warn!(path = %path.display(), "skipping unmappable file"),
            }
        }
        Ok(())
    }
}

fn is_tmp_artifact(name: &str) -> bool {
    name.starts_with('.') && name.ends_with(".tmp")
}

impl StorageBackend for FsBackend {
    fn read_file(&self, pod_path: &str) -> Result<Option<String>> {
        let path = self.resolve(pod_path)?;
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(PodError::Io)?;
        tracing::debug!(pod_path, bytes = content.len(), "read file");
        Ok(Some(content))
    }

    fn write_file(&self, pod_path: &str, content: &str) -> Result<()> {
        let target_path = self.resolve(pod_path)?;
        let parent = target_path
            .parent()
            .ok_or_else(|| PodError::InvalidPath(pod_path.to_string()))?;
        self.ensure_dir(parent)?;

        // Atomic Write
        let tmp_path = parent.join(format!(".pod-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(PodError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PodError::Io(e));
        }

        tracing::debug!(pod_path, bytes = content.len(), "wrote file");
        Ok(())
    }

    fn delete_file(&self, pod_path: &str) -> Result<()> {
        let path = self.resolve(pod_path)?;
        if path.is_file() {
            fs::remove_file(path).map_err(PodError::Io)?;
        }
        Ok(())
    }

    fn file_exists(&self, pod_path: &str) -> Result<bool> {
        Ok(self.resolve(pod_path)?.is_file())
    }

    fn list_files(&self, prefix: &str) -> Result<Vec<String>> {
        let dir = self.resolve(prefix)?;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        self.collect_files(&dir, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn file_path(&self, pod_path: &str) -> Result<PathBuf> {
        self.resolve(pod_path)
    }
}
