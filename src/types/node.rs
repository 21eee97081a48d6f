// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node capability records as seen by filter plugins.

use k8s_openapi::api::core::v1::{Node, NodeRuntimeHandler};
use kube::ResourceExt;

/// Whether a runtime handler supports an optional feature.
///
/// `Unknown` is what a handler reports when it leaves the flag unset; it
/// never counts as support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureSupport {
    #[default]
    Unknown,
    Unsupported,
    Supported,
}

impl FeatureSupport {
    pub fn is_supported(self) -> bool {
        self == FeatureSupport::Supported
    }
}

impl From<Option<bool>> for FeatureSupport {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => FeatureSupport::Unknown,
            Some(false) => FeatureSupport::Unsupported,
            Some(true) => FeatureSupport::Supported,
        }
    }
}

/// Optional features declared by a runtime handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub user_namespaces: FeatureSupport,
}

/// A container runtime handler available on a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeHandler {
    pub name: String,
    pub features: Option<FeatureSet>,
}

impl RuntimeHandler {
    pub fn supports_user_namespaces(&self) -> bool {
        self.features
            .as_ref()
            .is_some_and(|f| f.user_namespaces.is_supported())
    }
}

impl From<&NodeRuntimeHandler> for RuntimeHandler {
    fn from(rh: &NodeRuntimeHandler) -> Self {
        RuntimeHandler {
            name: rh.name.clone().unwrap_or_default(),
            features: rh.features.as_ref().map(|f| FeatureSet {
                user_namespaces: f.user_namespaces.into(),
            }),
        }
    }
}

/// Capabilities a node published in its status.
///
/// `runtime_handlers` is `None` when the node never declared its handlers,
/// which is different from declaring an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCapabilities {
    pub name: String,
    pub runtime_handlers: Option<Vec<RuntimeHandler>>,
}

impl From<&Node> for NodeCapabilities {
    fn from(node: &Node) -> Self {
        let runtime_handlers = node
            .status
            .as_ref()
            .and_then(|s| s.runtime_handlers.as_ref())
            .map(|rhs| rhs.iter().map(RuntimeHandler::from).collect());

        NodeCapabilities {
            name: node.name_any(),
            runtime_handlers,
        }
    }
}

/// Per-node snapshot handed to filter plugins. The node may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInfo {
    node: Option<NodeCapabilities>,
}

impl NodeInfo {
    pub fn new(node: NodeCapabilities) -> Self {
        Self { node: Some(node) }
    }

    pub fn node(&self) -> Option<&NodeCapabilities> {
        self.node.as_ref()
    }

    pub fn node_name(&self) -> Option<&str> {
        self.node.as_ref().map(|n| n.name.as_str())
    }
}

impl From<&Node> for NodeInfo {
    fn from(node: &Node) -> Self {
        NodeInfo::new(node.into())
    }
}
