//! # Pod Content Core
//!
//! A pod is a content tree. Every resource in it is addressed by a *pod path*,
//! an absolute path inside the pod such as `/content/pages/home.yaml`.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document (document.rs)                                     │
//! │  - Immutable pod path value, never interpreted              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pod (pod.rs) + Front Matter (front_matter.rs)              │
//! │  - Reads the file behind a pod path                         │
//! │  - Splits and parses YAML front matter                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait keyed by pod path          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Value Types
//!
//! [`Document`] holds its path and nothing else: constructing one cannot fail
//! and never touches storage. Missing files, malformed YAML and bad paths are
//! all reported by the [`pod`] and [`store`] layers as [`error::PodError`].
//!
//! ## Module Overview
//!
//! - [`document`]: The `Document` value type
//! - [`pod`]: Content tree access over a storage backend
//! - [`front_matter`]: Front matter splitting and parsing
//! - [`store`]: Storage abstraction and implementations
//! - [`hooks`]: Preprocess hook trigger rules
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod document;
pub mod error;
pub mod front_matter;
pub mod hooks;
pub mod pod;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use document::Document;
pub use error::{PodError, Result};
pub use pod::Pod;
