// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Runs the filter plugins of a profile against candidate nodes.

use crate::error::{FilterError, Result};
use crate::framework::{CycleState, FilterPlugin, Handle, Profile, Registry, Status};
use crate::types::{NodeInfo, Workload};
use std::sync::Arc;
use tracing::{debug, info};

/// Verdict for a single candidate node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeVerdict {
    /// `None` when the snapshot did not contain a node
    pub node: Option<String>,
    pub status: Status,
}

/// Result of filtering all candidate nodes for one workload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub verdicts: Vec<NodeVerdict>,
}

impl FilterOutcome {
    /// Names of nodes every filter plugin accepted
    pub fn feasible_nodes(&self) -> Vec<&str> {
        self.verdicts
            .iter()
            .filter(|v| v.status.is_success())
            .filter_map(|v| v.node.as_deref())
            .collect()
    }

    pub fn errors(&self) -> impl Iterator<Item = &NodeVerdict> {
        self.verdicts.iter().filter(|v| v.status.is_error())
    }
}

pub struct Framework {
    profile_name: String,
    filter_plugins: Vec<Box<dyn FilterPlugin>>,
}

impl Framework {
    /// Instantiate the filter plugins enabled in `profile`
    pub fn new(registry: &Registry, profile: &Profile, handle: Arc<Handle>) -> Result<Self> {
        let mut filter_plugins = Vec::with_capacity(profile.filter_plugins.len());

        for name in &profile.filter_plugins {
            let factory = registry
                .get(name)
                .ok_or_else(|| FilterError::UnknownPlugin(name.clone()))?;
            let plugin = factory(profile.args_for(name), handle.clone())?;
            debug!("Initialized filter plugin {}", plugin.name());
            filter_plugins.push(plugin);
        }

        info!(
            "Framework for profile {} initialized with {} filter plugins",
            profile.scheduler_name,
            filter_plugins.len()
        );

        Ok(Self {
            profile_name: profile.scheduler_name.clone(),
            filter_plugins,
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn filter_plugin_names(&self) -> Vec<&str> {
        self.filter_plugins.iter().map(|p| p.name()).collect()
    }

    /// Run every filter plugin against one node; the first non-success wins
    pub fn run_filter_plugins(
        &self,
        state: &CycleState,
        workload: &Workload,
        node_info: &NodeInfo,
    ) -> Status {
        for plugin in &self.filter_plugins {
            let status = plugin.filter(state, workload, node_info);
            if !status.is_success() {
                debug!(
                    "Attempt {}: plugin {} rejected node {:?} for pod {}/{}: {}",
                    state.attempt(),
                    plugin.name(),
                    node_info.node_name(),
                    workload.namespace,
                    workload.name,
                    status
                );
                return status.with_plugin(plugin.name());
            }
        }
        Status::success()
    }

    pub fn find_feasible_nodes(
        &self,
        state: &CycleState,
        workload: &Workload,
        nodes: &[NodeInfo],
    ) -> FilterOutcome {
        let verdicts = nodes
            .iter()
            .map(|node_info| NodeVerdict {
                node: node_info.node_name().map(str::to_string),
                status: self.run_filter_plugins(state, workload, node_info),
            })
            .collect();

        FilterOutcome { verdicts }
    }
}
