// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from an explicit kubeconfig or the inferred environment

use crate::config::Config;
use crate::error::{ExportError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, instrument};

/// Create a Kubernetes client for the configured cluster
#[instrument(skip(config), fields(kubeconfig = ?config.kubeconfig))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = match &config.kubeconfig {
        Some(path) => load_kubeconfig(path).await?,
        None => KConfig::infer().await.map_err(|e| {
            ExportError::Connectivity(format!("Failed to infer config: {}", e))
        })?,
    };

    debug!("Using cluster URL {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| ExportError::Connectivity(format!("Failed to create client: {}", e)))
}

/// Load client configuration from a kubeconfig file, using its current context
async fn load_kubeconfig(path: &Path) -> Result<KConfig> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        ExportError::Connectivity(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| ExportError::Connectivity(format!("Failed to create config: {}", e)))
}
