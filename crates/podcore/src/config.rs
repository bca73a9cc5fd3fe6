//! # Configuration
//!
//! Pod configuration is loaded with [`confique`], layering sources in
//! priority order:
//!
//! 1. **Environment variables**: `POD_CONTENT_DIR`.
//! 2. **Pod config file**: `<pod root>/pod.toml`.
//! 3. **Compiled defaults**: `#[config(default = ...)]` and the fallbacks below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `content_dir` | `/content` | Pod path of the content tree walked by document listing |
//! | `yaml_extensions` | `[".yaml", ".yml"]` | Extensions of documents that are YAML from top to bottom |

use crate::error::{PodError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "pod.toml";

fn default_yaml_extensions() -> Vec<String> {
    vec![".yaml".to_string(), ".yml".to_string()]
}

/// Configuration for a pod, stored in `pod.toml` at the pod root.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PodConfig {
    /// Pod path of the content tree (e.g. "/content").
    #[config(env = "POD_CONTENT_DIR", default = "/content")]
    pub content_dir: String,

    /// Extensions of whole-file YAML documents.
    /// When absent, defaults to [".yaml", ".yml"].
    pub yaml_extensions: Option<Vec<String>>,
}

impl Default for PodConfig {
    fn default() -> Self {
        Self {
            content_dir: "/content".to_string(),
            yaml_extensions: None,
        }
    }
}

impl PodConfig {
    /// Load the configuration for the pod rooted at `root`.
    /// A missing `pod.toml` falls back to defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let file = root.join(CONFIG_FILE_NAME);
        let mut builder = Self::builder().env();
        if file.exists() {
            builder = builder.file(&file);
        }
        let config = builder
            .load()
            .map_err(|e| PodError::Config(format!("{}: {}", file.display(), e)))?;
        tracing::debug!(root = %root.display(), content_dir = %config.content_dir, "loaded pod config");
        Ok(config)
    }

    /// YAML extensions, each normalized to start with a dot.
    pub fn yaml_extensions(&self) -> Vec<String> {
        self.yaml_extensions
            .clone()
            .unwrap_or_else(default_yaml_extensions)
            .into_iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect()
    }

    /// Whether `pod_path` names a whole-file YAML document.
    pub fn is_yaml(&self, pod_path: &str) -> bool {
        self.yaml_extensions()
            .iter()
            .any(|ext| pod_path.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = PodConfig::default();
        assert_eq!(config.content_dir, "/content");
        assert_eq!(config.yaml_extensions(), vec![".yaml", ".yml"]);
    }

    #[test]
    fn test_yaml_extensions_normalized() {
        let config = PodConfig {
            yaml_extensions: Some(vec!["yaml".to_string(), ".json".to_string()]),
            ..Default::default()
        };
        assert_eq!(config.yaml_extensions(), vec![".yaml", ".json"]);
    }

    #[test]
    fn test_is_yaml() {
        let config = PodConfig::default();
        assert!(config.is_yaml("/content/pages/home.yaml"));
        assert!(config.is_yaml("/content/pages/home.yml"));
        assert!(!config.is_yaml("/content/posts/hello.md"));
        assert!(!config.is_yaml("/content/pages/home.YAML"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PodConfig::load(dir.path()).unwrap();
        assert_eq!(config.yaml_extensions(), vec![".yaml", ".yml"]);
    }

    #[test]
    fn test_load_reads_pod_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "yaml_extensions = [\".yaml\"]\n",
        )
        .unwrap();
        let config = PodConfig::load(dir.path()).unwrap();
        assert_eq!(config.yaml_extensions(), vec![".yaml"]);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "content_dir = [").unwrap();
        let err = PodConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, PodError::Config(_)));
    }
}
