//! Request schema validation
//!
//! Payloads are checked against a declared `Schema` before anything reaches
//! the store.
//!
//! # Design Principles
//!
//! - Validation before mutation
//! - No implicit type coercion in bodies
//! - Every violation reported, not just the first
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, ValidationDetails};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::SchemaValidator;
