// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use userns_filter::config::Config;
use userns_filter::framework::{CycleState, Framework, Handle, Registry};
use userns_filter::kubernetes::take_snapshot;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting user namespace filter dry run");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: pod={}/{}, profile={}",
        config.pod_namespace, config.pod_name, config.profile.scheduler_name
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let handle = Arc::new(Handle::new(
        &config.profile.scheduler_name,
        Some(client.clone()),
    ));
    let framework = Framework::new(&Registry::with_in_tree_plugins(), &config.profile, handle)?;

    let snapshot = take_snapshot(&client, &config.pod_namespace, &config.pod_name).await?;
    let outcome =
        framework.find_feasible_nodes(&CycleState::default(), &snapshot.workload, &snapshot.nodes);

    for verdict in &outcome.verdicts {
        let node = verdict.node.as_deref().unwrap_or("<unknown>");
        if verdict.status.is_error() {
            warn!("Node {}: {}", node, verdict.status);
        } else {
            info!("Node {}: {}", node, verdict.status);
        }
    }

    let feasible = outcome.feasible_nodes();
    if feasible.is_empty() {
        warn!(
            "No feasible nodes for pod {}/{} in profile {}",
            snapshot.workload.namespace,
            snapshot.workload.name,
            framework.profile_name()
        );
    } else {
        info!(
            "{} of {} nodes feasible: {}",
            feasible.len(),
            outcome.verdicts.len(),
            feasible.join(", ")
        );
    }

    Ok(())
}
