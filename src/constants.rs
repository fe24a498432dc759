// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Resource kinds exported when no whitelist is configured
pub const DEFAULT_RESOURCES: &[&str] = &["pods", "deployments", "replicasets"];

pub const DEFAULT_NAMESPACE: &str = "default";

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const NAMESPACE: &str = "EXPORT_NAMESPACE";
    /// Comma-separated list of plural resource names
    pub const RESOURCES: &str = "EXPORT_RESOURCES";
    /// `yaml` or `json`
    pub const OUTPUT: &str = "EXPORT_OUTPUT";
    /// Whether per-object fetches ask the server for the stripped export form
    pub const STRIP: &str = "EXPORT_STRIP";
    pub const KUBECONFIG: &str = "KUBECONFIG";
}

/// Request path building blocks
pub mod api {
    /// Prefix for the legacy core group (`/api/v1/...`)
    pub const CORE_PREFIX: &str = "api";
    /// Prefix for named API groups (`/apis/apps/v1/...`)
    pub const GROUP_PREFIX: &str = "apis";
    /// Query parameter asking the server to strip cluster-specific fields
    pub const EXPORT_PARAM: &str = "export";
}
