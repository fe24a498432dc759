// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{ExportError, Result};

/// One object as returned by the API server, stamped with kind and apiVersion
pub type ExportedObject = Map<String, Value>;

/// Exported objects keyed by plural resource name.
/// Kinds without objects are never present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputDocument(BTreeMap<String, Vec<ExportedObject>>);

impl OutputDocument {
    /// Store the objects of a resource kind. Returns false, storing nothing, when empty.
    pub fn insert(&mut self, name: impl Into<String>, objects: Vec<ExportedObject>) -> bool {
        if objects.is_empty() {
            return false;
        }
        self.0.insert(name.into(), objects);
        true
    }

    pub fn get(&self, name: &str) -> Option<&[ExportedObject]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of resource kinds in the document
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| ExportError::Serialization(e.to_string())),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ExportError::Serialization(e.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Error, Debug)]
#[error("unknown output format '{0}', expected yaml or json")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
