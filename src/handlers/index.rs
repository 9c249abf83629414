//! Endpoint map and OpenAPI document, both generated from the route annotations.

use crate::openapi::ApiDoc;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use utoipa::{OpenApi, ToSchema};

const METHODS: &[&str] = &["get", "post", "put", "patch", "delete"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
}

#[derive(Serialize, ToSchema)]
pub struct EndpointMap {
    pub endpoints: Vec<Endpoint>,
}

/// Every documented route, sorted by path then method.
pub fn endpoints() -> Vec<Endpoint> {
    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap_or(Value::Null);
    let mut out = Vec::new();
    if let Some(paths) = doc.get("paths").and_then(Value::as_object) {
        for (path, item) in paths {
            for method in METHODS {
                if item.get(*method).is_some() {
                    out.push(Endpoint {
                        method: method.to_uppercase(),
                        path: path.clone(),
                    });
                }
            }
        }
    }
    out.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
    out
}

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Map of every endpoint", body = EndpointMap))
)]
pub async fn sitemap() -> Json<EndpointMap> {
    Json(EndpointMap { endpoints: endpoints() })
}

#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "meta",
    responses((status = 200, description = "OpenAPI document"))
)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
