//! OpenAPI document
//!
//! Describes the pessoa endpoints as OpenAPI 3.0. Component schemas are
//! rendered from the same `Schema` definitions the validator enforces, so the
//! document cannot drift from what requests are checked against.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::schema::Schema;

/// Path the document is served at
pub const OPENAPI_PATH: &str = "/apidoc/openapi.json";

/// Title of the API document
pub const API_TITLE: &str = "Live de Python";

pub fn openapi_routes() -> Router {
    Router::new().route(OPENAPI_PATH, get(openapi_handler))
}

async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

fn schema_ref(name: &str) -> Value {
    json!({"$ref": format!("#/components/schemas/{}", name)})
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": schema}},
    })
}

fn id_param() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": {"type": "integer", "format": "int64"},
    })
}

/// Build the full document
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths(),
        "components": {"schemas": component_schemas()},
    })
}

fn paths() -> Value {
    let query = Schema::pessoa_query();
    let query_schema = query.to_json_schema();
    let query_params: Vec<Value> = query
        .fields
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "in": "query",
                "required": false,
                "schema": query_schema["properties"][field.name].clone(),
            })
        })
        .collect();

    let validation_error = json_response("Validation error", schema_ref("ValidationError"));
    let pessoa_body = json!({
        "required": true,
        "content": {"application/json": {"schema": schema_ref("Pessoa")}},
    });

    let get_one = json!({
        "summary": "Retorna uma Pessoa da base de dados.",
        "parameters": [id_param()],
        "responses": {
            "200": json_response("Pessoa", schema_ref("Pessoa")),
            "400": validation_error,
            "404": json_response("Pessoa not found", schema_ref("Message")),
        },
    });
    let list = json!({
        "summary": "Retorna todas as Pessoas da base de dados.",
        "parameters": query_params,
        "responses": {
            "200": json_response("Pessoas", schema_ref("Pessoas")),
            "400": validation_error,
        },
    });
    let create = json!({
        "summary": "Insere uma Pessoa no banco de dados",
        "requestBody": pessoa_body,
        "responses": {
            "201": json_response("Pessoa created", schema_ref("Pessoa")),
            "400": validation_error,
        },
    });
    let replace = json!({
        "summary": "Altera uma Pessoa no banco de dados",
        "parameters": [id_param()],
        "requestBody": pessoa_body,
        "responses": {
            "201": json_response("Submitted Pessoa", schema_ref("Pessoa")),
            "400": validation_error,
        },
    });
    let delete = json!({
        "summary": "Deleta uma Pessoa do banco de dados.",
        "parameters": [id_param()],
        "responses": {
            "204": {"description": "No content"},
            "400": validation_error,
        },
    });

    json!({
        "/pessoa/{id}": {"get": get_one},
        "/pessoas": {"get": list, "post": create},
        "/pessoas/{id}": {"put": replace, "delete": delete},
    })
}

fn component_schemas() -> Value {
    let validation_detail = json!({
        "type": "object",
        "properties": {
            "field": {"type": "string"},
            "expected": {"type": "string"},
            "actual": {"type": "string"},
        },
    });

    json!({
        "Pessoa": Schema::pessoa().to_json_schema(),
        "QueryPessoa": Schema::pessoa_query().to_json_schema(),
        "Pessoas": {
            "title": "Pessoas",
            "type": "object",
            "properties": {
                "pessoas": {"type": "array", "items": schema_ref("Pessoa")},
                "count": {"type": "integer"},
            },
            "required": ["pessoas", "count"],
        },
        "Message": {
            "type": "object",
            "properties": {"message": {"type": "string"}},
            "required": ["message"],
        },
        "ValidationError": {
            "type": "object",
            "properties": {
                "error": {"type": "string"},
                "code": {"type": "integer"},
                "details": {"type": "array", "items": validation_detail},
            },
        },
    })
}
