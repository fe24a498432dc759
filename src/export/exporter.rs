// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetches the objects of whitelisted resource kinds from one namespace

use crate::constants::api::EXPORT_PARAM;
use crate::error::{ExportError, Result};
use crate::export::document::{ExportedObject, OutputDocument};
use crate::types::{ResourceDescriptor, ResourcePath, Whitelist};
use kube::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Items of a list response, kept as untyped objects
#[derive(Deserialize)]
struct ItemList {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

/// Exports objects one request at a time; the first failed request aborts the run.
pub struct NamespaceExporter {
    client: Client,
    strip: bool,
}

impl NamespaceExporter {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            strip: true,
        }
    }

    /// Whether per-object fetches ask for the export form (`export=true`)
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Export every whitelisted kind in `catalog` order.
    ///
    /// Only the first descriptor for a given plural name is queried, even if
    /// it turns out to have no objects.
    #[instrument(skip(self, catalog, whitelist))]
    pub async fn export(
        &self,
        namespace: &str,
        catalog: &[ResourceDescriptor],
        whitelist: &Whitelist,
    ) -> Result<OutputDocument> {
        let mut document = OutputDocument::default();
        let mut seen = HashSet::new();

        for descriptor in catalog {
            if !whitelist.contains(&descriptor.name) {
                continue;
            }
            if !seen.insert(descriptor.name.as_str()) {
                debug!(
                    "Skipping duplicate {} from group '{}'",
                    descriptor.name, descriptor.group
                );
                continue;
            }

            let objects = self.export_kind(namespace, descriptor).await?;
            document.insert(descriptor.name.clone(), objects);
        }

        Ok(document)
    }

    /// List one kind, then re-fetch each listed object individually
    async fn export_kind(
        &self,
        namespace: &str,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<ExportedObject>> {
        let path = descriptor.resolve_path();
        let list_url = path.collection_url(namespace);

        let list: ItemList = self.get(&list_url).await?;
        let items = list.items.unwrap_or_default();
        info!("Found {} {} in {}", items.len(), descriptor.name, namespace);

        let mut objects = Vec::with_capacity(items.len());
        for item in &items {
            let name = item_name(item).ok_or_else(|| ExportError::MalformedItem {
                path: list_url.clone(),
            })?;
            objects.push(self.fetch_object(namespace, name, descriptor, &path).await?);
        }

        Ok(objects)
    }

    async fn fetch_object(
        &self,
        namespace: &str,
        name: &str,
        descriptor: &ResourceDescriptor,
        path: &ResourcePath,
    ) -> Result<ExportedObject> {
        let mut url = path.object_url(namespace, name);
        if self.strip {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair(EXPORT_PARAM, "true")
                .finish();
            url = format!("{}?{}", url, query);
        }

        let Value::Object(mut object) = self.get::<Value>(&url).await? else {
            return Err(ExportError::MalformedItem { path: url });
        };

        // List and get responses do not reliably carry these
        object.insert("kind".to_string(), Value::String(descriptor.kind.clone()));
        object.insert("apiVersion".to_string(), Value::String(path.version.clone()));

        Ok(object)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = http::Request::get(url)
            .body(Vec::new())
            .map_err(|e| ExportError::Fetch {
                path: url.to_string(),
                source: kube::Error::HttpError(e),
            })?;

        self.client
            .request::<T>(request)
            .await
            .map_err(|source| ExportError::Fetch {
                path: url.to_string(),
                source,
            })
    }
}

fn item_name(item: &Value) -> Option<&str> {
    item.get("metadata")?.get("name")?.as_str()
}
