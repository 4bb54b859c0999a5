//! pessoa-api - CRUD over an in-memory person collection
//!
//! The store is an explicitly owned value handed to the router, so each
//! server (or test) gets its own collection and id counter.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod schema;
pub mod store;
