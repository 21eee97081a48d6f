// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Plugin registry mapping names to factories.

use crate::constants::USERNS_SUPPORTED;
use crate::error::{FilterError, Result};
use crate::framework::{FilterPlugin, Handle};
use crate::plugins::UserNsSupported;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds a plugin from its (optional) decoded args and the framework handle
pub type PluginFactory = fn(Option<&serde_json::Value>, Arc<Handle>) -> Result<Box<dyn FilterPlugin>>;

#[derive(Default)]
pub struct Registry {
    factories: BTreeMap<String, PluginFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing every plugin shipped with this crate
    pub fn with_in_tree_plugins() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(USERNS_SUPPORTED.to_string(), UserNsSupported::new);
        registry
    }

    pub fn register(&mut self, name: &str, factory: PluginFactory) -> Result<()> {
        if self.factories.contains_key(name) {
            return Err(FilterError::DuplicatePlugin(name.to_string()));
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<PluginFactory> {
        self.factories.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
