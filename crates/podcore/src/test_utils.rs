use crate::config::PodConfig;
use crate::pod::Pod;
use crate::store::fs_backend::FsBackend;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A pod on disk in a temporary directory.
pub struct TestPod {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub pod: Pod<FsBackend>,
    pub root: PathBuf,
}

impl Default for TestPod {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPod {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let pod = Pod::new(FsBackend::new(root.clone()), PodConfig::default());
        Self {
            _temp_dir: temp_dir,
            pod,
            root,
        }
    }

    /// Write a file directly to disk, bypassing the backend.
    pub fn with_file(self, pod_path: &str, content: &str) -> Self {
        let path = self.root.join(pod_path.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        self
    }
}
