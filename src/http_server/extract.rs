//! Validating extractors
//!
//! Every extractor here rejects with `ApiError`, so schema violations in the
//! path, query string or body all render the same structured 400 body.

use std::collections::HashMap;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde_json::Value;

use crate::model::{PersonBody, PersonFilter};
use crate::schema::{Schema, SchemaError, SchemaValidator};

use super::errors::ApiError;

/// Integer `{id}` path segment.
///
/// Only unsigned digits select a route: a signed segment such as `-1` is
/// answered like an unknown path, anything else that is not an integer is a
/// validation error.
#[derive(Debug, Clone, Copy)]
pub struct PessoaId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PessoaId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

        match raw.parse::<i64>() {
            Ok(_) if raw.starts_with(['-', '+']) => Err(ApiError::UnknownRoute),
            Ok(id) => Ok(PessoaId(id)),
            Err(_) => Err(SchemaError::invalid_path_param("id", "integer", &raw).into()),
        }
    }
}

/// List filter parsed from `?id=&nome=&idade=`
#[derive(Debug, Clone)]
pub struct PessoaQuery(pub PersonFilter);

#[async_trait]
impl<S> FromRequestParts<S> for PessoaQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

        let schema = Schema::pessoa_query();
        let typed = SchemaValidator::new(&schema).validate_params(&params)?;

        let filter = serde_json::from_value(Value::Object(typed))
            .map_err(|e| ApiError::Internal(format!("query decode: {}", e)))?;
        Ok(PessoaQuery(filter))
    }
}

/// JSON body validated against the `Pessoa` schema
#[derive(Debug, Clone)]
pub struct PessoaPayload(pub PersonBody);

#[async_trait]
impl<S> FromRequest<S> for PessoaPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

        let document: Value = serde_json::from_slice(&bytes).map_err(SchemaError::malformed_json)?;

        let schema = Schema::pessoa();
        SchemaValidator::new(&schema).validate_document(&document)?;

        let body = serde_json::from_value(document)
            .map_err(|e| ApiError::Internal(format!("body decode: {}", e)))?;
        Ok(PessoaPayload(body))
    }
}
