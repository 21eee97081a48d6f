// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;

/// The schedulable unit being placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub name: String,
    pub namespace: String,
    /// Set when the pod opts out of the host user namespace (`hostUsers: false`)
    pub requests_user_namespace: bool,
}

impl Workload {
    pub fn new(name: &str, namespace: &str, requests_user_namespace: bool) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            requests_user_namespace,
        }
    }
}

impl From<&Pod> for Workload {
    fn from(pod: &Pod) -> Self {
        // hostUsers defaults to true when unset
        let requests_user_namespace = pod
            .spec
            .as_ref()
            .and_then(|s| s.host_users)
            .is_some_and(|host_users| !host_users);

        Workload {
            name: pod.name_any(),
            namespace: pod.namespace().unwrap_or_default(),
            requests_user_namespace,
        }
    }
}
