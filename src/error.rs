// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid plugin args for {plugin}: {reason}")]
    InvalidPluginArgs { plugin: String, reason: String },

    #[error("Plugin {0} is not registered")]
    UnknownPlugin(String),

    #[error("Plugin {0} is already registered")]
    DuplicatePlugin(String),

    #[error("Invalid scheduler profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
