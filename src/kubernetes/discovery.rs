// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Catalog of namespaced resource kinds served by the cluster

use crate::error::{ExportError, Result};
use crate::types::ResourceDescriptor;
use kube::discovery::{Discovery, Scope};
use kube::Client;
use tracing::{debug, info, instrument};

/// List every namespaced resource kind the server prefers, core group first.
///
/// Only the recommended version of each group is returned. Cluster-scoped
/// kinds and subresources never make it into the catalog.
#[instrument(skip(client))]
pub async fn resolve_catalog(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let discovery = Discovery::new(client.clone())
        .run()
        .await
        .map_err(|e| ExportError::Connectivity(format!("Discovery failed: {}", e)))?;

    let mut catalog = Vec::new();
    for group in discovery.groups_alphabetical() {
        for (ar, caps) in group.recommended_resources() {
            if caps.scope != Scope::Namespaced {
                continue;
            }
            debug!("Discovered {} ({})", ar.plural, ar.api_version);
            catalog.push(ResourceDescriptor::from(&ar));
        }
    }

    info!("Discovered {} namespaced resource kinds", catalog.len());
    Ok(catalog)
}
