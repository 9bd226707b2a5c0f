//! In-memory backing storage.
//!
//! Everything lives in plain maps behind one reader/writer lock and is gone when the process
//! exits. Swap this out for a real database before going anywhere near production.

use std::collections::HashMap;

use async_graphql::ID;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::entity::{Course, Lesson, Subject, Submission, Unit};
use crate::model::id::IdGenerator;

pub const SEED_SUBJECT_ID: &str = "1";
pub const SEED_SUBJECT_NAME: &str = "Math";

/// Rows of one entity kind keyed by id.
///
/// Iteration follows insertion order. Rows are never removed, so the order list never needs
/// pruning.
#[derive(Debug)]
pub struct Table<T> {
    rows: HashMap<ID, T>,
    order: Vec<ID>,
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn insert(&mut self, id: ID, row: T) {
        if self.rows.insert(id.clone(), row).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: &ID) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn get_mut(&mut self, id: &ID) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        let id = self.order.first()?;
        self.rows.get_mut(id)
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct Tables {
    pub subjects: Table<Subject>,
    pub courses: Table<Course>,
    pub units: Table<Unit>,
    pub lessons: Table<Lesson>,
    pub submissions: Table<Submission>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    ids: IdGenerator,
}

impl MemoryStore {
    /// Empty store, no subjects at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the single fixed subject every fresh process starts with.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        let subject = Subject {
            id: ID::from(SEED_SUBJECT_ID),
            name: String::from(SEED_SUBJECT_NAME),
        };
        tables.subjects.insert(subject.id.clone(), subject);

        tracing::debug!("store seeded with subject `{}`", SEED_SUBJECT_NAME);
        Self {
            tables: RwLock::new(tables),
            ids: IdGenerator::new(),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    pub fn next_id(&self) -> ID {
        self.ids.next()
    }
}
