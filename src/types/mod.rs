// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only inputs to filter plugins: node capabilities and workloads.

pub mod node;
pub mod workload;

pub use node::{FeatureSet, FeatureSupport, NodeCapabilities, NodeInfo, RuntimeHandler};
pub use workload::Workload;
