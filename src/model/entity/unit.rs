use async_graphql::{ID, InputObject, SimpleObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::impl_resource_typed_for;
use crate::model::entity::Course;
use crate::model::{CrudRepository, ModelError, ModelManager, ModelResult, ResourceTyped};

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: ID,
    pub course: Course,
    pub title: String,
    /// Ordering is not implemented yet, always 0.
    pub order: i32,
}

impl_resource_typed_for!(Unit, Unit);

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "CreateUnitInput")]
pub struct UnitCreate {
    pub course_id: ID,
    pub title: String,
}

#[async_trait]
impl CrudRepository<Unit, UnitCreate> for Unit {
    #[tracing::instrument(skip(mm))]
    async fn create(mm: &ModelManager, data: UnitCreate) -> ModelResult<Self> {
        let mut tables = mm.store().write().await;
        let id = mm.next_id();

        let course = tables
            .courses
            .get(&data.course_id)
            .cloned()
            .ok_or_else(|| ModelError::not_found(Course::get_resource_type()))?;

        let unit = Unit {
            id: id.clone(),
            course,
            title: data.title,
            order: 0,
        };
        tables.units.insert(id, unit.clone());

        tracing::debug!("unit {} created", unit.id.as_str());
        Ok(unit)
    }

    #[tracing::instrument(skip(mm))]
    async fn find_by_id(mm: &ModelManager, id: &ID) -> Option<Self> {
        let tables = mm.store().read().await;
        tables.units.get(id).cloned()
    }

    async fn count(mm: &ModelManager) -> usize {
        mm.store().read().await.units.len()
    }
}

impl Unit {
    #[tracing::instrument(skip(mm))]
    pub async fn all_by_course(mm: &ModelManager, course_id: &ID) -> Vec<Self> {
        let tables = mm.store().read().await;
        tables
            .units
            .iter()
            .filter(|u| &u.course.id == course_id)
            .cloned()
            .collect()
    }
}
