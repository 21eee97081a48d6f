// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the user namespace filter in the plugin registry and profiles
pub const USERNS_SUPPORTED: &str = "UserNSSupported";

/// Scheduler name used when no profile is configured
pub const DEFAULT_SCHEDULER_NAME: &str = "default-scheduler";

/// Environment variables read by the dry-run binary
pub mod env {
    /// Name of the pod to place (required)
    pub const POD_NAME: &str = "POD_NAME";
    /// Namespace of the pod to place
    pub const POD_NAMESPACE: &str = "POD_NAMESPACE";
    /// Path to a YAML scheduler profile (optional)
    pub const SCHEDULER_PROFILE: &str = "SCHEDULER_PROFILE";
}

/// Status reasons reported by the user namespace filter
pub mod reasons {
    pub const NODE_NOT_FOUND: &str = "node not found";
    pub const RUNTIME_HANDLERS_NOT_DECLARED: &str = "node.Status.RuntimeHandlers not declared";
}
