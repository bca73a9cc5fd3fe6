//! # Documents
//!
//! A [`Document`] names a content resource by its *pod path*: the location of
//! the resource inside a pod's content tree, e.g. `/content/pages/home.yaml`.
//!
//! The document is a plain value. It does not validate, normalize or resolve
//! its path, and it never touches storage. Whatever string goes in comes back
//! out byte for byte:
//!
//! ```
//! use podcore::Document;
//!
//! let doc = Document::new("/content/pages/home.yaml");
//! assert_eq!(doc.pod_path(), "/content/pages/home.yaml");
//! ```
//!
//! Loading the referenced file, splitting front matter and listing the content
//! tree are the job of [`crate::pod::Pod`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A content resource identified by its pod path.
///
/// Immutable after construction: there is no setter, and the path is owned,
/// so two documents never share storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pod_path: String,
}

impl Document {
    /// Create a document for `pod_path`. Any string is accepted.
    pub fn new(pod_path: impl Into<String>) -> Self {
        Self {
            pod_path: pod_path.into(),
        }
    }

    /// The pod path exactly as supplied at construction.
    pub fn pod_path(&self) -> &str {
        &self.pod_path
    }

    pub fn into_pod_path(self) -> String {
        self.pod_path
    }
}

impl From<&str> for Document {
    fn from(pod_path: &str) -> Self {
        Self::new(pod_path)
    }
}

impl From<String> for Document {
    fn from(pod_path: String) -> Self {
        Self::new(pod_path)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.pod_path
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pod_path)
    }
}
