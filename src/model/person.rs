//! Person record and its partial forms
//!
//! A `Person` is the only entity the service stores. `PersonBody` is the
//! validated request payload (id optional) and `PersonFilter` is the
//! exact-match predicate used by list queries.

use serde::{Deserialize, Serialize};

/// Stored person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub nome: String,
    pub idade: i64,
}

impl Person {
    pub fn new(id: i64, nome: impl Into<String>, idade: i64) -> Self {
        Self {
            id,
            nome: nome.into(),
            idade,
        }
    }
}

/// Request body for create and replace operations.
///
/// Only constructed after the body has passed schema validation, so `nome`
/// and `idade` are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBody {
    #[serde(default)]
    pub id: Option<i64>,
    pub nome: String,
    pub idade: i64,
}

impl PersonBody {
    pub fn new(nome: impl Into<String>, idade: i64) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            idade,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Materialize into a record, using `id` when the body carries none
    pub fn into_person(self, id: i64) -> Person {
        Person {
            id: self.id.unwrap_or(id),
            nome: self.nome,
            idade: self.idade,
        }
    }
}

/// Partial person used as an exact-match predicate.
///
/// Absent fields impose no constraint; present fields must be equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<i64>,
}

impl PersonFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }

    pub fn idade(mut self, idade: i64) -> Self {
        self.idade = Some(idade);
        self
    }

    /// Check whether a record satisfies every supplied field
    pub fn matches(&self, person: &Person) -> bool {
        self.id.map_or(true, |id| person.id == id)
            && self.nome.as_deref().map_or(true, |nome| person.nome == nome)
            && self.idade.map_or(true, |idade| person.idade == idade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_serializes_in_field_order() {
        let person = Person::new(0, "Ana", 30);
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, r#"{"id":0,"nome":"Ana","idade":30}"#);
    }

    #[test]
    fn test_body_without_id_takes_assigned_id() {
        let body: PersonBody = serde_json::from_value(json!({"nome": "Ana", "idade": 30})).unwrap();
        assert_eq!(body.id, None);
        assert_eq!(body.into_person(7), Person::new(7, "Ana", 30));
    }

    #[test]
    fn test_body_with_id_keeps_it() {
        let body = PersonBody::new("Bia", 41).with_id(99);
        assert_eq!(body.into_person(7).id, 99);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PersonFilter::new();
        assert!(filter.matches(&Person::new(1, "Ana", 30)));
    }

    #[test]
    fn test_filter_requires_all_fields() {
        let filter = PersonFilter::new().nome("Ana").idade(30);

        assert!(filter.matches(&Person::new(1, "Ana", 30)));
        assert!(!filter.matches(&Person::new(2, "Ana", 31)));
        assert!(!filter.matches(&Person::new(3, "Bia", 30)));
    }

    #[test]
    fn test_filter_is_exact_not_substring() {
        let filter = PersonFilter::new().nome("An");
        assert!(!filter.matches(&Person::new(1, "Ana", 30)));
    }
}
