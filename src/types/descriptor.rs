// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource descriptors and request path resolution.

use kube::discovery::ApiResource;

use crate::constants::api::{CORE_PREFIX, GROUP_PREFIX};

/// A namespaced resource kind served by the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Plural name, e.g. `deployments`
    pub name: String,
    /// Display kind, e.g. `Deployment`
    pub kind: String,
    /// API group, empty for the core group
    pub group: String,
    pub version: String,
    /// Group/version as reported by discovery, e.g. `v1` or `apps/v1`
    pub group_version: String,
}

impl ResourceDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        group: impl Into<String>,
        version: impl Into<String>,
        group_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            group: group.into(),
            version: version.into(),
            group_version: group_version.into(),
        }
    }

    /// Work out where this resource lives on the API server.
    ///
    /// An explicit group and version win over the discovery group/version.
    /// Anything with a `/` in its group/version belongs to a named group under
    /// `/apis`; the rest is the legacy core group under `/api`.
    pub fn resolve_path(&self) -> ResourcePath {
        let group_version = if !self.group.is_empty() && !self.version.is_empty() {
            format!("{}/{}", self.group, self.version)
        } else {
            self.group_version.clone()
        };

        let (prefix, version) = match group_version.split_once('/') {
            Some((_, version)) => (GROUP_PREFIX, version.to_string()),
            None => (CORE_PREFIX, group_version.clone()),
        };

        ResourcePath {
            prefix,
            group_version,
            version,
            plural: self.name.clone(),
        }
    }
}

impl From<&ApiResource> for ResourceDescriptor {
    fn from(ar: &ApiResource) -> Self {
        Self {
            name: ar.plural.clone(),
            kind: ar.kind.clone(),
            group: ar.group.clone(),
            version: ar.version.clone(),
            group_version: ar.api_version.clone(),
        }
    }
}

/// Resolved location of a resource kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    /// `api` or `apis`
    pub prefix: &'static str,
    pub group_version: String,
    /// Version stamped onto exported objects as their `apiVersion`
    pub version: String,
    pub plural: String,
}

impl ResourcePath {
    /// Collection URL for listing every object in a namespace
    pub fn collection_url(&self, namespace: &str) -> String {
        format!(
            "/{}/{}/namespaces/{}/{}",
            self.prefix, self.group_version, namespace, self.plural
        )
    }

    /// URL of a single named object
    pub fn object_url(&self, namespace: &str, name: &str) -> String {
        format!("{}/{}", self.collection_url(namespace), name)
    }
}
