use std::sync::Arc;

use async_graphql::ID;

pub mod entity;

mod error;
pub use error::{ModelError, ModelResult};

mod id;
pub use id::IdGenerator;

mod repo;
pub use repo::{CrudRepository, ResourceType, ResourceTyped};

mod store;
pub use store::{MemoryStore, SEED_SUBJECT_ID, SEED_SUBJECT_NAME, Table, Tables};

/// Handle every resolver goes through to reach the store.
#[derive(Debug, Clone)]
pub struct ModelManager {
    store: Arc<MemoryStore>, // cloning is cheap, handles share one store
}

impl ModelManager {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn seeded() -> Self {
        Self::new(MemoryStore::seeded())
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn next_id(&self) -> ID {
        self.store.next_id()
    }
}
