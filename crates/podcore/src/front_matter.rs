//! # Front Matter
//!
//! Content files may open with a YAML block fenced by boundary lines:
//!
//! ```text
//! ---
//! title: Home
//! tags: [landing]
//! ---
//! Body text starts here.
//! ```
//!
//! A boundary is any line made only of three or more `-` characters. Content
//! with exactly two boundaries splits into `(front matter, body)`; anything
//! else is treated as all body.
//!
//! The raw block is kept next to the parsed value so it can be exported and
//! cached verbatim, then re-parsed with [`DocumentFrontMatter::from_raw`].
//! Parsing stays generic (`serde_yaml::Value`): no field is interpreted here.

use crate::document::Document;
use crate::error::{PodError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^-{3,}$").expect("boundary pattern is valid"));

/// Split raw content into `(front matter, body)`, both trimmed.
///
/// Returns `None` for the front matter unless the content contains exactly
/// two boundary lines.
pub fn split_front_matter(content: &str) -> (Option<String>, String) {
    let parts: Vec<&str> = BOUNDARY.split(content).collect();
    if parts.len() == 3 {
        return (Some(parts[1].trim().to_string()), parts[2].trim().to_string());
    }
    (None, content.trim().to_string())
}

/// Parsed front matter of a single document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFrontMatter {
    pod_path: String,
    raw: Option<String>,
    data: Value,
}

impl DocumentFrontMatter {
    /// Split `raw_content` and parse whatever front matter it carries.
    pub fn new(doc: &Document, raw_content: &str) -> Result<Self> {
        let (raw, _body) = split_front_matter(raw_content);
        Self::from_raw(doc, raw)
    }

    /// Parse an already separated front matter block, e.g. one previously
    /// obtained from [`export`](Self::export).
    pub fn from_raw(doc: &Document, raw: Option<String>) -> Result<Self> {
        let data = match raw.as_deref() {
            Some(text) if !text.is_empty() => parse_yaml(doc, text)?,
            _ => Value::Mapping(Mapping::new()),
        };
        Ok(Self {
            pod_path: doc.pod_path().to_string(),
            raw,
            data,
        })
    }

    /// The raw, unparsed front matter.
    ///
    /// Exporting the raw text rather than the parsed value keeps cache entries
    /// small and lets the YAML be re-read later with the same loader.
    pub fn export(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Top-level field lookup. `None` when absent or when the front matter is
    /// not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Mapping(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    pub fn pod_path(&self) -> &str {
        &self.pod_path
    }
}

fn parse_yaml(doc: &Document, text: &str) -> Result<Value> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        PodError::BadFormat(format!("Error parsing {}: {}", doc.pod_path(), e))
    })?;
    // A block of only comments or whitespace loads as null.
    if value.is_null() {
        return Ok(Value::Mapping(Mapping::new()));
    }
    Ok(value)
}
