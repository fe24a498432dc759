// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

#[derive(Clone)]
enum Reply {
    Status(u16, String),
    TransportError,
}

/// A mock HTTP service answering GET requests by exact path, recording every call.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Status(status, body.to_string()));
        self
    }

    /// Fail GET requests on this path at the transport level
    pub fn on_error(self, path: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::TransportError);
        self
    }

    /// Every request seen so far as `path` or `path?query`, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service, sharing the request log
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        let logged = match req.uri().query() {
            Some(query) => format!("{}?{}", path, query),
            None => path.clone(),
        };
        self.requests.lock().unwrap().push(logged);

        let reply = self.responses.lock().unwrap().get(&path).cloned();

        Box::pin(async move {
            match reply {
                Some(Reply::Status(status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                Some(Reply::TransportError) => Err(tower::BoxError::from(format!(
                    "connection reset on {}",
                    path
                ))),
                None => {
                    // Default 404 for unmatched requests
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(not_found_json(&path).into_bytes()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create a 404 not found response
pub fn not_found_json(path: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} not found", path),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a mock object JSON response with the given name
pub fn object_json(api_version: &str, kind: &str, name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "name": name,
            "namespace": namespace,
        },
        "spec": {}
    })
    .to_string()
}

/// Create a mock list response whose items carry the given names
pub fn list_json(kind: &str, names: &[&str]) -> String {
    let items: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "metadata": {
                    "name": name,
                    "uid": format!("uid-{}", name),
                    "resourceVersion": "1"
                }
            })
        })
        .collect();

    serde_json::json!({
        "kind": format!("{}List", kind),
        "apiVersion": "v1",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a mock `/api` versions response
pub fn core_versions_json(versions: &[&str]) -> String {
    serde_json::json!({
        "kind": "APIVersions",
        "versions": versions,
        "serverAddressByClientCIDRs": [
            { "clientCIDR": "0.0.0.0/0", "serverAddress": "10.0.0.1:6443" }
        ]
    })
    .to_string()
}

/// Create a mock `/apis` group list with one version per group
pub fn api_group_list_json(groups: &[(&str, &str)]) -> String {
    let groups: Vec<_> = groups
        .iter()
        .map(|(name, version)| {
            let gv = serde_json::json!({
                "groupVersion": format!("{}/{}", name, version),
                "version": version
            });
            serde_json::json!({
                "name": name,
                "versions": [gv.clone()],
                "preferredVersion": gv
            })
        })
        .collect();

    serde_json::json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": groups
    })
    .to_string()
}

/// Create a mock resource list for one group/version: `(plural, kind, namespaced)`
pub fn api_resource_list_json(group_version: &str, resources: &[(&str, &str, bool)]) -> String {
    let resources: Vec<_> = resources
        .iter()
        .map(|(name, kind, namespaced)| {
            serde_json::json!({
                "name": name,
                "singularName": "",
                "namespaced": namespaced,
                "kind": kind,
                "verbs": ["get", "list"]
            })
        })
        .collect();

    serde_json::json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": group_version,
        "resources": resources
    })
    .to_string()
}
