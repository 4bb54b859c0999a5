//! In-memory person collection
//!
//! Records are kept in insertion order in a plain `Vec`. Every lookup is a
//! linear scan with exact field comparison; there is no index and no
//! uniqueness constraint on `id`.

use crate::model::{Person, PersonFilter};

#[derive(Debug, Default)]
pub struct PersonCollection {
    records: Vec<Person>,
}

impl PersonCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicate ids are accepted.
    pub fn insert(&mut self, person: Person) {
        self.records.push(person);
    }

    /// First record carrying `id`
    pub fn find_by_id(&self, id: i64) -> Option<Person> {
        self.records.iter().find(|p| p.id == id).cloned()
    }

    /// Every record matching all fields present in `filter`
    pub fn find_by_filter(&self, filter: &PersonFilter) -> Vec<Person> {
        self.records
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Overwrite every record carrying `id` with `replacement`.
    ///
    /// Returns the number of records touched; zero is not an error.
    pub fn update_by_id(&mut self, id: i64, replacement: &Person) -> usize {
        let mut touched = 0;
        for record in self.records.iter_mut().filter(|p| p.id == id) {
            *record = replacement.clone();
            touched += 1;
        }
        touched
    }

    /// Remove every record carrying `id`, returning how many were removed
    pub fn delete_by_id(&mut self, id: i64) -> usize {
        let before = self.records.len();
        self.records.retain(|p| p.id != id);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PersonCollection {
        let mut c = PersonCollection::new();
        c.insert(Person::new(0, "Ana", 30));
        c.insert(Person::new(1, "Bia", 30));
        c.insert(Person::new(2, "Ana", 41));
        c
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let mut c = seeded();
        c.insert(Person::new(1, "Duplicate", 99));

        assert_eq!(c.find_by_id(1), Some(Person::new(1, "Bia", 30)));
        assert_eq!(c.find_by_id(42), None);
    }

    #[test]
    fn test_find_by_filter_and_semantics() {
        let c = seeded();

        let both = c.find_by_filter(&PersonFilter::new().nome("Ana").idade(30));
        assert_eq!(both, vec![Person::new(0, "Ana", 30)]);

        let by_name = c.find_by_filter(&PersonFilter::new().nome("Ana"));
        assert_eq!(by_name.len(), 2);

        assert_eq!(c.find_by_filter(&PersonFilter::new()).len(), 3);
        assert!(c.find_by_filter(&PersonFilter::new().idade(7)).is_empty());
    }

    #[test]
    fn test_update_replaces_all_fields_including_id() {
        let mut c = seeded();

        let touched = c.update_by_id(1, &Person::new(10, "Carla", 25));
        assert_eq!(touched, 1);
        assert_eq!(c.find_by_id(1), None);
        assert_eq!(c.find_by_id(10), Some(Person::new(10, "Carla", 25)));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_update_miss_is_noop() {
        let mut c = seeded();
        assert_eq!(c.update_by_id(99, &Person::new(99, "X", 1)), 0);
        assert_eq!(c.find_by_filter(&PersonFilter::new()), seeded().find_by_filter(&PersonFilter::new()));
    }

    #[test]
    fn test_delete_removes_every_match() {
        let mut c = seeded();
        c.insert(Person::new(0, "Again", 1));

        assert_eq!(c.delete_by_id(0), 2);
        assert_eq!(c.len(), 2);
        assert_eq!(c.delete_by_id(0), 0);
    }
}
