// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Filter that only admits nodes with a runtime handler supporting user
//! namespaces.

use crate::constants::{reasons, USERNS_SUPPORTED};
use crate::error::{FilterError, Result};
use crate::framework::{CycleState, FilterPlugin, Handle, Plugin, Status};
use crate::types::{NodeCapabilities, NodeInfo, RuntimeHandler, Workload};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// When the filter applies to a workload
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
pub enum RequirementPolicy {
    /// Check every workload; the framework decides when the plugin runs
    #[default]
    Always,
    /// Pass workloads that do not request a user namespace
    WhenRequested,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserNsSupportedArgs {
    #[serde(default)]
    pub requirement: RequirementPolicy,
}

pub struct UserNsSupported {
    requirement: RequirementPolicy,
}

impl UserNsSupported {
    /// Build the plugin from its profile args
    pub fn new(
        args: Option<&serde_json::Value>,
        _handle: Arc<Handle>,
    ) -> Result<Box<dyn FilterPlugin>> {
        let args = match args {
            Some(raw) => UserNsSupportedArgs::deserialize(raw).map_err(|e| {
                FilterError::InvalidPluginArgs {
                    plugin: USERNS_SUPPORTED.to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => UserNsSupportedArgs::default(),
        };

        Ok(Box::new(UserNsSupported {
            requirement: args.requirement,
        }))
    }
}

impl Plugin for UserNsSupported {
    fn name(&self) -> &str {
        USERNS_SUPPORTED
    }
}

impl FilterPlugin for UserNsSupported {
    fn filter(&self, _state: &CycleState, workload: &Workload, node_info: &NodeInfo) -> Status {
        let (node, handlers) = match declared_runtime_handlers(node_info.node()) {
            Ok(declared) => declared,
            Err(status) => return status,
        };

        if self.requirement == RequirementPolicy::WhenRequested && !workload.requests_user_namespace
        {
            return Status::success();
        }
        check_handlers(workload, node, handlers)
    }
}

/// Decide whether `node` can run `workload` in a user namespace.
///
/// A node is capable when any of its runtime handlers reports support.
/// Missing node data is an error rather than a rejection.
pub fn evaluate(workload: &Workload, node: Option<&NodeCapabilities>) -> Status {
    match declared_runtime_handlers(node) {
        Ok((node, handlers)) => check_handlers(workload, node, handlers),
        Err(status) => status,
    }
}

/// The node and its declared handlers, or the error status for missing data
fn declared_runtime_handlers(
    node: Option<&NodeCapabilities>,
) -> std::result::Result<(&NodeCapabilities, &[RuntimeHandler]), Status> {
    let Some(node) = node else {
        return Err(Status::error(reasons::NODE_NOT_FOUND));
    };

    let Some(handlers) = node.runtime_handlers.as_deref() else {
        return Err(Status::error(reasons::RUNTIME_HANDLERS_NOT_DECLARED));
    };

    Ok((node, handlers))
}

fn check_handlers(workload: &Workload, node: &NodeCapabilities, handlers: &[RuntimeHandler]) -> Status {
    if handlers.iter().any(|rh| rh.supports_user_namespaces()) {
        return Status::success();
    }

    Status::unschedulable(format!(
        "Pod {} requested a user namespace, but node {} does not support them",
        workload.name, node.name
    ))
}
