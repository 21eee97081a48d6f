// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Snapshot of the pod to place and the candidate nodes

use crate::error::Result;
use crate::types::{NodeInfo, Workload};
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::{api::ListParams, Api, Client};
use tracing::{debug, info, instrument};

/// Workload and candidate nodes for one scheduling attempt
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub workload: Workload,
    pub nodes: Vec<NodeInfo>,
}

/// Fetch the pod and list all nodes from the cluster
#[instrument(skip(client))]
pub async fn take_snapshot(client: &Client, namespace: &str, pod_name: &str) -> Result<Snapshot> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let nodes: Api<Node> = Api::all(client.clone());
    let lp = ListParams::default();

    let (pod, node_list) = futures::try_join!(pods.get(pod_name), nodes.list(&lp))?;

    let workload = Workload::from(&pod);
    debug!(
        "Pod {}/{} requests user namespace: {}",
        workload.namespace, workload.name, workload.requests_user_namespace
    );

    let nodes: Vec<NodeInfo> = node_list.items.iter().map(NodeInfo::from).collect();
    info!("Snapshot contains {} candidate nodes", nodes.len());

    Ok(Snapshot { workload, nodes })
}
