// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace export: catalog filtering, object fetching and document output.

pub mod document;
pub mod exporter;

pub use document::{ExportedObject, OutputDocument, OutputFormat, UnknownFormat};
pub use exporter::NamespaceExporter;

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::resolve_catalog;
use kube::Client;
use tracing::{info, instrument};

/// Snapshot the configured namespace and render it in the configured format
#[instrument(skip(client, config), fields(namespace = %config.namespace))]
pub async fn export_namespace(client: &Client, config: &Config) -> Result<String> {
    let catalog = resolve_catalog(client).await?;

    let document = NamespaceExporter::new(client.clone())
        .with_strip(config.strip)
        .export(&config.namespace, &catalog, &config.whitelist)
        .await?;

    info!("Exported {} resource kinds", document.len());
    document.render(config.output)
}
