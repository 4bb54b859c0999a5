//! # Pessoa HTTP Server Module
//!
//! Axum server exposing CRUD over the in-memory person store.
//!
//! # Endpoints
//!
//! - `GET /pessoa/{id}` - Fetch one person (404 when absent)
//! - `GET /pessoas` - List with exact-match filters `id`, `nome`, `idade`
//! - `POST /pessoas` - Create, assigning an id when the body has none
//! - `PUT /pessoas/{id}` - Replace every person with that id
//! - `DELETE /pessoas/{id}` - Remove every person with that id
//! - `GET /health` - Health check
//! - `GET /apidoc/openapi.json` - OpenAPI document

pub mod config;
pub mod errors;
pub mod extract;
pub mod observability_routes;
pub mod openapi;
pub mod pessoa_routes;
pub mod response;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse, NOT_FOUND_MESSAGE};
pub use openapi::{openapi_document, OPENAPI_PATH};
pub use server::{app_router, HttpServer};
