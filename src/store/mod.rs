//! # Person Store
//!
//! Owns the person collection and the id counter as one unit. The HTTP layer
//! receives an `Arc<PersonStore>` at startup; tests create a fresh store each.
//!
//! Both pieces sit behind a single `RwLock` so that id assignment and insert,
//! or a filter followed by an overwrite, never interleave with another
//! request's mutation.

mod collection;
mod errors;
mod id_gen;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::model::{Person, PersonBody, PersonFilter};

pub use collection::PersonCollection;
pub use errors::{StoreError, StoreResult};
pub use id_gen::IdGenerator;

#[derive(Debug, Default)]
struct StoreState {
    people: PersonCollection,
    ids: IdGenerator,
}

/// Shared in-memory person store
#[derive(Debug, Default)]
pub struct PersonStore {
    state: RwLock<StoreState>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Insert a person, drawing an id from the counter only when the body has none
    pub fn insert(&self, body: PersonBody) -> StoreResult<Person> {
        let mut state = self.write()?;
        let id = match body.id {
            Some(id) => id,
            None => state.ids.next_id(),
        };
        let person = body.into_person(id);
        state.people.insert(person.clone());
        debug!(id = person.id, "inserted pessoa");
        Ok(person)
    }

    /// First person with `id`, if any
    pub fn get(&self, id: i64) -> StoreResult<Option<Person>> {
        Ok(self.read()?.people.find_by_id(id))
    }

    /// Every person matching `filter`, in insertion order
    pub fn list(&self, filter: &PersonFilter) -> StoreResult<Vec<Person>> {
        Ok(self.read()?.people.find_by_filter(filter))
    }

    /// Overwrite every person with `id` using `body`.
    ///
    /// A body without its own id keeps `id`. Returns the replacement record
    /// together with how many stored records it was written into.
    pub fn replace(&self, id: i64, body: PersonBody) -> StoreResult<(Person, usize)> {
        let replacement = body.into_person(id);
        let touched = self.write()?.people.update_by_id(id, &replacement);
        debug!(id, new_id = replacement.id, touched, "replaced pessoa");
        Ok((replacement, touched))
    }

    /// Remove every person with `id`, returning how many were removed
    pub fn delete(&self, id: i64) -> StoreResult<usize> {
        let removed = self.write()?.people.delete_by_id(id);
        debug!(id, removed, "deleted pessoa");
        Ok(removed)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.people.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.people.is_empty())
    }

    /// The id the next id-less insert will receive
    pub fn next_id(&self) -> StoreResult<i64> {
        Ok(self.read()?.ids.peek())
    }
}
