// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot reach Kubernetes API: {0}")]
    Connectivity(String),

    #[error("Request to {path} failed: {source}")]
    Fetch {
        path: String,
        #[source]
        source: kube::Error,
    },

    /// A listed item had no string `metadata.name`, or a fetched object was not a mapping
    #[error("Malformed object returned from {path}")]
    MalformedItem { path: String },

    #[error("Failed to serialize export document: {0}")]
    Serialization(String),
}

impl ExportError {
    /// True for every failure raised while listing or fetching objects
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::MalformedItem { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
