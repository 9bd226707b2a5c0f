use async_graphql::{ID, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::impl_resource_typed_for;
use crate::model::ModelManager;

/// Top level curriculum category. Only ever created by seeding.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct Subject {
    pub id: ID,
    pub name: String,
}

impl_resource_typed_for!(Subject, Subject);

impl Subject {
    #[tracing::instrument(skip(mm))]
    pub async fn list(mm: &ModelManager) -> Vec<Self> {
        let tables = mm.store().read().await;
        tables.subjects.iter().cloned().collect()
    }

    #[tracing::instrument(skip(mm))]
    pub async fn find_by_id(mm: &ModelManager, id: &ID) -> Option<Self> {
        let tables = mm.store().read().await;
        tables.subjects.get(id).cloned()
    }
}
