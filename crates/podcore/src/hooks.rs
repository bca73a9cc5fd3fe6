//! # Preprocess Hooks
//!
//! Preprocessors run before a build to fetch or generate content. Each one is
//! declared in configuration with a `kind`, an optional `name` and `tags`,
//! and an `autorun` flag. A [`PreprocessHook`] implementation handles one
//! kind and decides per declaration whether it should fire.
//!
//! ## Trigger Rules
//!
//! For a declaration and a [`TriggerRequest`]:
//!
//! 1. A declaration of another kind never triggers.
//! 2. A requested name that matches the declaration's name triggers.
//! 3. A requested tag shared with the declaration's tags triggers.
//! 4. Otherwise it triggers when `autorun` is set or the request is `run_all`.
//!
//! Note that naming other preprocessors does not suppress autorun ones.

use crate::error::Result;
use serde::{Deserialize, Serialize};

fn default_autorun() -> bool {
    true
}

/// A preprocessor declaration as written in pod configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_autorun")]
    pub autorun: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            name: None,
            kind: None,
            tags: Vec::new(),
            autorun: default_autorun(),
        }
    }
}

/// Parse a YAML list of preprocessor declarations.
pub fn parse_preprocessors(yaml: &str) -> Result<Vec<PreprocessConfig>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Which preprocessors the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerRequest {
    pub names: Vec<String>,
    pub tags: Vec<String>,
    pub run_all: bool,
}

pub trait PreprocessHook {
    type Output;

    /// The declaration kind this hook handles. `None` matches declarations
    /// without a kind.
    fn kind(&self) -> Option<&str>;

    fn name(&self) -> &str {
        "Preprocess"
    }

    fn should_trigger(&self, config: &PreprocessConfig, request: &TriggerRequest) -> bool {
        if config.kind.as_deref() != self.kind() {
            return false;
        }

        if let Some(name) = &config.name {
            if request.names.contains(name) {
                return true;
            }
        }
        if request.tags.iter().any(|tag| config.tags.contains(tag)) {
            return true;
        }
        config.autorun || request.run_all
    }

    /// Run the hook. The default passes the previous hook's result through.
    fn trigger(
        &self,
        previous: Option<Self::Output>,
        _config: &PreprocessConfig,
        _request: &TriggerRequest,
    ) -> Option<Self::Output> {
        previous
    }
}

/// An ordered set of hooks sharing one output type.
pub struct PreprocessHooks<T> {
    hooks: Vec<Box<dyn PreprocessHook<Output = T>>>,
}

impl<T> Default for PreprocessHooks<T> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<T> PreprocessHooks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn PreprocessHook<Output = T>>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook that should trigger, threading each result into the next.
    pub fn trigger_all(&self, config: &PreprocessConfig, request: &TriggerRequest) -> Option<T> {
        let mut result = None;
        for hook in &self.hooks {
            if !hook.should_trigger(config, request) {
                continue;
            }
            tracing::debug!(hook = hook.name(), name = ?config.name, "triggering preprocessor");
            result = hook.trigger(result, config, request);
        }
        result
    }
}
