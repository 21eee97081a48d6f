// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Extension points implemented by scheduling plugins.

use crate::framework::Status;
use crate::types::{NodeInfo, Workload};
use kube::Client;

/// Common behavior of every plugin
pub trait Plugin {
    /// Stable name used in the registry and in profiles
    fn name(&self) -> &str;
}

/// Decides whether a node may host a workload.
///
/// Invoked once per candidate node per scheduling attempt, possibly from
/// several threads at once.
pub trait FilterPlugin: Plugin + Send + Sync {
    fn filter(&self, state: &CycleState, workload: &Workload, node_info: &NodeInfo) -> Status;
}

/// State of a single scheduling attempt. Opaque to plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleState {
    attempt: u64,
}

impl CycleState {
    pub fn new(attempt: u64) -> Self {
        Self { attempt }
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// Framework services handed to plugins when they are constructed.
///
/// In-tree plugins ignore it; plugins added with `Registry::register` may use it.
#[derive(Clone, Default)]
pub struct Handle {
    profile_name: String,
    client: Option<Client>,
}

impl Handle {
    pub fn new(profile_name: &str, client: Option<Client>) -> Self {
        Self {
            profile_name: profile_name.to_string(),
            client,
        }
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("profile_name", &self.profile_name)
            .field("client", &self.client.is_some())
            .finish()
    }
}
