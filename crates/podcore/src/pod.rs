//! # Pods
//!
//! A [`Pod`] is a content tree: a [`StorageBackend`] plus the [`PodConfig`]
//! that says where content lives and how to read it. It is the collaborator
//! that turns a [`Document`]'s pod path into bytes, front matter and body.
//!
//! ## Document Formats
//!
//! - **YAML documents** (`.yaml`, `.yml` by default): the whole file is front
//!   matter and the body is empty.
//! - **Everything else**: front matter is the block between the two boundary
//!   lines, if present; the rest is the body. See [`crate::front_matter`].

use crate::config::PodConfig;
use crate::document::Document;
use crate::error::{PodError, Result};
use crate::front_matter::{split_front_matter, DocumentFrontMatter};
use crate::store::fs_backend::FsBackend;
use crate::store::StorageBackend;
use std::path::Path;

pub struct Pod<B: StorageBackend> {
    backend: B,
    config: PodConfig,
}

impl Pod<FsBackend> {
    /// Open the pod rooted at `root`, loading `pod.toml` if present.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let config = PodConfig::load(root)?;
        Ok(Self::new(FsBackend::new(root), config))
    }
}

impl<B: StorageBackend> Pod<B> {
    pub fn new(backend: B, config: PodConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &PodConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// A document handle for `pod_path`. Does not touch storage.
    pub fn get_doc(&self, pod_path: impl Into<String>) -> Document {
        Document::new(pod_path)
    }

    pub fn read_file(&self, pod_path: &str) -> Result<String> {
        self.backend
            .read_file(pod_path)?
            .ok_or_else(|| PodError::DocumentNotFound(pod_path.to_string()))
    }

    pub fn write_file(&self, pod_path: &str, content: &str) -> Result<()> {
        self.backend.write_file(pod_path, content)
    }

    pub fn file_exists(&self, pod_path: &str) -> Result<bool> {
        self.backend.file_exists(pod_path)
    }

    pub fn raw_content(&self, doc: &Document) -> Result<String> {
        self.read_file(doc.pod_path())
    }

    pub fn front_matter(&self, doc: &Document) -> Result<DocumentFrontMatter> {
        let content = self.raw_content(doc)?;
        if self.config.is_yaml(doc.pod_path()) {
            let raw = content.trim();
            let raw = (!raw.is_empty()).then(|| raw.to_string());
            return DocumentFrontMatter::from_raw(doc, raw);
        }
        DocumentFrontMatter::new(doc, &content)
    }

    /// Content after the front matter, trimmed. Always empty for YAML documents.
    pub fn body(&self, doc: &Document) -> Result<String> {
        let content = self.raw_content(doc)?;
        if self.config.is_yaml(doc.pod_path()) {
            return Ok(String::new());
        }
        let (_front_matter, body) = split_front_matter(&content);
        Ok(body)
    }

    /// Every document under the configured content directory, sorted by pod path.
    pub fn list_documents(&self) -> Result<Vec<Document>> {
        let files = self.backend.list_files(&self.config.content_dir)?;
        tracing::debug!(
            content_dir = %self.config.content_dir,
            count = files.len(),
            "listed documents"
        );
        Ok(files.into_iter().map(Document::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::TestPod;
    use serde_yaml::Value;

    fn pod() -> Pod<MemBackend> {
        let backend = MemBackend::with_files([
            ("/content/pages/home.yaml", "title: Home\norder: 1\n"),
            (
                "/content/posts/hello.md",
                "---\ntitle: Hello\n---\n\n# Hello\n\nFirst post.\n",
            ),
            ("/content/posts/plain.md", "Just text.\n"),
            ("/content/pages/broken.yaml", "title: [oops\n"),
            ("/views/base.html", "<html></html>"),
        ]);
        Pod::new(backend, PodConfig::default())
    }

    #[test]
    fn test_get_doc_keeps_path() {
        let pod = pod();
        let doc = pod.get_doc("/content//pages/home.yaml");
        assert_eq!(doc.pod_path(), "/content//pages/home.yaml");
    }

    #[test]
    fn test_raw_content() {
        let pod = pod();
        let doc = pod.get_doc("/content/posts/plain.md");
        assert_eq!(pod.raw_content(&doc).unwrap(), "Just text.\n");
    }

    #[test]
    fn test_missing_document() {
        let pod = pod();
        let doc = pod.get_doc("/content/pages/missing.yaml");
        let err = pod.raw_content(&doc).unwrap_err();
        assert!(matches!(err, PodError::DocumentNotFound(p) if p == "/content/pages/missing.yaml"));
    }

    #[test]
    fn test_yaml_document_is_all_front_matter() {
        let pod = pod();
        let doc = pod.get_doc("/content/pages/home.yaml");
        let fm = pod.front_matter(&doc).unwrap();
        assert_eq!(fm.get("title"), Some(&Value::String("Home".to_string())));
        assert_eq!(fm.export(), Some("title: Home\norder: 1"));
        assert_eq!(pod.body(&doc).unwrap(), "");
    }

    #[test]
    fn test_markdown_document_front_matter_and_body() {
        let pod = pod();
        let doc = pod.get_doc("/content/posts/hello.md");
        let fm = pod.front_matter(&doc).unwrap();
        assert_eq!(fm.get("title"), Some(&Value::String("Hello".to_string())));
        assert_eq!(pod.body(&doc).unwrap(), "# Hello\n\nFirst post.");
    }

    #[test]
    fn test_document_without_front_matter() {
        let pod = pod();
        let doc = pod.get_doc("/content/posts/plain.md");
        assert!(pod.front_matter(&doc).unwrap().is_empty());
        assert_eq!(pod.body(&doc).unwrap(), "Just text.");
    }

    #[test]
    fn test_broken_yaml_is_bad_format() {
        let pod = pod();
        let doc = pod.get_doc("/content/pages/broken.yaml");
        let err = pod.front_matter(&doc).unwrap_err();
        assert!(err.to_string().starts_with("Error parsing /content/pages/broken.yaml"));
    }

    #[test]
    fn test_list_documents_only_under_content_dir() {
        let pod = pod();
        let docs: Vec<String> = pod
            .list_documents()
            .unwrap()
            .into_iter()
            .map(Document::into_pod_path)
            .collect();
        assert_eq!(
            docs,
            vec![
                "/content/pages/broken.yaml",
                "/content/pages/home.yaml",
                "/content/posts/hello.md",
                "/content/posts/plain.md",
            ]
        );
    }

    #[test]
    fn test_fs_pod_reads_front_matter_from_disk() {
        let env = TestPod::new()
            .with_file("/content/posts/hello.md", "---\ntitle: Hello\n---\nBody")
            .with_file("/content/pages/home.yaml", "title: Home");

        let docs = env.pod.list_documents().unwrap();
        assert_eq!(
            docs,
            vec![
                Document::new("/content/pages/home.yaml"),
                Document::new("/content/posts/hello.md"),
            ]
        );

        let fm = env.pod.front_matter(&docs[1]).unwrap();
        assert_eq!(fm.get("title"), Some(&Value::String("Hello".to_string())));
        assert_eq!(env.pod.body(&docs[1]).unwrap(), "Body");
    }

    #[test]
    fn test_open_uses_pod_toml() {
        let env = TestPod::new()
            .with_file("/pod.toml", "yaml_extensions = [\".data\"]\n")
            .with_file("/content/settings.data", "theme: dark");

        let pod = Pod::open(&env.root).unwrap();
        assert_eq!(pod.backend().root(), env.root.as_path());
        assert_eq!(pod.config().yaml_extensions(), vec![".data"]);
        let doc = pod.get_doc("/content/settings.data");
        let fm = pod.front_matter(&doc).unwrap();
        assert_eq!(fm.get("theme"), Some(&Value::String("dark".to_string())));
    }

    #[test]
    fn test_write_then_read() {
        let pod = pod();
        pod.write_file("/content/pages/new.yaml", "title: New").unwrap();
        assert!(pod.file_exists("/content/pages/new.yaml").unwrap());
        assert_eq!(pod.read_file("/content/pages/new.yaml").unwrap(), "title: New");
    }
}
