// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API access for building scheduling snapshots.

pub mod snapshot;

pub use snapshot::{take_snapshot, Snapshot};
