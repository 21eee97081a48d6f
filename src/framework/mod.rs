// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Minimal scheduling framework: plugin contract, registry, profiles and
//! the filter runner that aggregates plugin verdicts per node.

pub mod interface;
pub mod profile;
pub mod registry;
pub mod runtime;
pub mod status;

pub use interface::{CycleState, FilterPlugin, Handle, Plugin};
pub use profile::{PluginConfig, Profile};
pub use registry::{PluginFactory, Registry};
pub use runtime::{FilterOutcome, Framework, NodeVerdict};
pub use status::{Code, Status};
