// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-tree filter plugins.

pub mod userns_supported;

pub use userns_supported::{RequirementPolicy, UserNsSupported, UserNsSupportedArgs};
