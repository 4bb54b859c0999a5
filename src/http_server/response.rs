//! # Response Formatting
//!
//! Response bodies shared by the route modules.

use serde::Serialize;

use crate::model::Person;

/// Body of `GET /pessoas`
#[derive(Debug, Clone, Serialize)]
pub struct PessoasResponse {
    pub pessoas: Vec<Person>,
    pub count: usize,
}

impl PessoasResponse {
    pub fn new(pessoas: Vec<Person>) -> Self {
        let count = pessoas.len();
        Self { pessoas, count }
    }
}

/// Single-message body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
