//! # Storage Layer
//!
//! Pods read and write their files through the [`StorageBackend`] trait, which
//! is keyed by pod path rather than by filesystem path. This keeps
//! [`crate::pod::Pod`] agnostic of where content actually lives.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: files under a pod root directory on disk.
//! - [`mem_backend::MemBackend`]: an in-memory map, for tests and tooling.
//!
//! ## Path Mapping
//!
//! A pod path is absolute within the pod: `/content/pages/home.yaml` lives at
//! `<root>/content/pages/home.yaml`. The on-disk backend refuses paths that
//! would climb out of the root (`..`); the [`crate::document::Document`] type
//! itself never rejects anything.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//! ├── pod.toml              # Optional pod configuration
//! └── content/
//!     ├── pages/
//!     │   └── home.yaml     # Whole-file YAML document
//!     └── posts/
//!         └── hello.md      # Front matter + body
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
