// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::constants::{env as vars, DEFAULT_NAMESPACE};
use crate::export::OutputFormat;
use crate::types::Whitelist;

/// Exporter configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace whose objects are exported
    pub namespace: String,
    /// Resource kinds (plural names) allowed into the document
    pub whitelist: Whitelist,
    pub output: OutputFormat,
    /// Send `export=true` on per-object fetches
    pub strip: bool,
    /// Explicit kubeconfig path, otherwise the client config is inferred
    pub kubeconfig: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup(vars::NAMESPACE)
            .filter(|ns| !ns.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let whitelist = match lookup(vars::RESOURCES) {
            Some(raw) => {
                let whitelist = Whitelist::parse(&raw);
                if whitelist.is_empty() {
                    bail!("{} is set but names no resources", vars::RESOURCES);
                }
                whitelist
            }
            None => Whitelist::default(),
        };

        let output = match lookup(vars::OUTPUT) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid {} value", vars::OUTPUT))?,
            None => OutputFormat::default(),
        };

        let strip = lookup(vars::STRIP)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(true);

        let kubeconfig = lookup(vars::KUBECONFIG)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            namespace,
            whitelist,
            output,
            strip,
            kubeconfig,
        })
    }
}
