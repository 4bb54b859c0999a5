//! Domain model

mod person;

pub use person::{Person, PersonBody, PersonFilter};
