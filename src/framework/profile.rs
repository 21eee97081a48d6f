// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Scheduling profile: which filter plugins run and with which args.

use crate::constants::{DEFAULT_SCHEDULER_NAME, USERNS_SUPPORTED};
use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub scheduler_name: String,
    /// Filter plugins in invocation order
    #[serde(default)]
    pub filter_plugins: Vec<String>,
    #[serde(default)]
    pub plugin_config: Vec<PluginConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub name: String,
    pub args: serde_json::Value,
}

impl Profile {
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let profile: Profile =
            serde_yaml::from_str(raw).map_err(|e| FilterError::InvalidProfile(e.to_string()))?;

        for (i, name) in profile.filter_plugins.iter().enumerate() {
            if profile.filter_plugins[..i].contains(name) {
                return Err(FilterError::InvalidProfile(format!(
                    "filter plugin {} enabled more than once",
                    name
                )));
            }
        }

        for (i, config) in profile.plugin_config.iter().enumerate() {
            if profile.plugin_config[..i].iter().any(|c| c.name == config.name) {
                return Err(FilterError::InvalidProfile(format!(
                    "plugin {} configured more than once",
                    config.name
                )));
            }
        }

        Ok(profile)
    }

    /// Args configured for a plugin, if any
    pub fn args_for(&self, plugin: &str) -> Option<&serde_json::Value> {
        self.plugin_config
            .iter()
            .find(|c| c.name == plugin)
            .map(|c| &c.args)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            scheduler_name: DEFAULT_SCHEDULER_NAME.to_string(),
            filter_plugins: vec![USERNS_SUPPORTED.to_string()],
            plugin_config: Vec::new(),
        }
    }
}
