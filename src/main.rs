// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nsexport::config::Config;
use nsexport::export::export_namespace;
use nsexport::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, resources={:?}",
        config.namespace,
        config.whitelist.iter().collect::<Vec<_>>()
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let document = export_namespace(&client, &config).await?;
    println!("{}", document);

    Ok(())
}
