//! Pessoa HTTP Routes
//!
//! CRUD endpoints over the shared `PersonStore`.
//!
//! A missing id is only an error for `GET /pessoa/{id}`. Replace and delete
//! treat it as a no-op, and replace still answers 201 with the body it was
//! given.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::model::Person;
use crate::store::PersonStore;

use super::errors::{ApiError, ApiResult};
use super::extract::{PessoaId, PessoaPayload, PessoaQuery};
use super::response::PessoasResponse;

/// Create pessoa routes
pub fn pessoa_routes(store: Arc<PersonStore>) -> Router {
    Router::new()
        .route("/pessoa/:id", get(get_pessoa_handler))
        .route("/pessoas", get(list_pessoas_handler).post(create_pessoa_handler))
        .route("/pessoas/:id", put(update_pessoa_handler).delete(delete_pessoa_handler))
        .with_state(store)
}

/// GET /pessoa/{id}
async fn get_pessoa_handler(
    State(store): State<Arc<PersonStore>>,
    PessoaId(id): PessoaId,
) -> ApiResult<Json<Person>> {
    let person = store.get(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(person))
}

/// GET /pessoas
async fn list_pessoas_handler(
    State(store): State<Arc<PersonStore>>,
    PessoaQuery(filter): PessoaQuery,
) -> ApiResult<Json<PessoasResponse>> {
    let pessoas = store.list(&filter)?;
    Ok(Json(PessoasResponse::new(pessoas)))
}

/// POST /pessoas
async fn create_pessoa_handler(
    State(store): State<Arc<PersonStore>>,
    PessoaPayload(body): PessoaPayload,
) -> ApiResult<(StatusCode, Json<Person>)> {
    let person = store.insert(body)?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /pessoas/{id}
async fn update_pessoa_handler(
    State(store): State<Arc<PersonStore>>,
    PessoaId(id): PessoaId,
    PessoaPayload(body): PessoaPayload,
) -> ApiResult<(StatusCode, Json<Person>)> {
    let (submitted, _touched) = store.replace(id, body)?;
    Ok((StatusCode::CREATED, Json(submitted)))
}

/// DELETE /pessoas/{id}
async fn delete_pessoa_handler(
    State(store): State<Arc<PersonStore>>,
    PessoaId(id): PessoaId,
) -> ApiResult<StatusCode> {
    store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
