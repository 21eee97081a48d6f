// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use crate::framework::Profile;
use anyhow::{Context, Result};
use std::env::{self, VarError};
use std::fs;

/// Dry-run configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Pod whose placement is evaluated
    pub pod_name: String,
    pub pod_namespace: String,
    pub profile: Profile,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let pod_name = env::var(vars::POD_NAME)
            .with_context(|| format!("{} environment variable not set", vars::POD_NAME))?;
        let pod_namespace =
            env::var(vars::POD_NAMESPACE).unwrap_or_else(|_| "default".to_string());

        let profile = profile_from(env::var(vars::SCHEDULER_PROFILE))?;

        Ok(Config {
            pod_name,
            pod_namespace,
            profile,
        })
    }
}

fn profile_from(path: std::result::Result<String, VarError>) -> Result<Profile> {
    match path {
        Ok(path) => load_profile(&path),
        Err(VarError::NotPresent) => Ok(Profile::default()),
        Err(e) => Err(e).with_context(|| format!("Invalid {} value", vars::SCHEDULER_PROFILE)),
    }
}

fn load_profile(path: &str) -> Result<Profile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scheduler profile {}", path))?;
    Profile::from_yaml(&raw).with_context(|| format!("Failed to parse scheduler profile {}", path))
}
