use async_graphql::{ID, InputObject, SimpleObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::impl_resource_typed_for;
use crate::model::entity::Unit;
use crate::model::{CrudRepository, ModelError, ModelManager, ModelResult, ResourceTyped};

pub const LESSON_STATUS_PUBLISHED: &str = "PUBLISHED";

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: ID,
    pub unit: Unit,
    pub title: String,
    pub order: i32,
    pub version: i32,
    /// `None` until the lesson gets published.
    pub status: Option<String>,
}

impl_resource_typed_for!(Lesson, Lesson);

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "CreateLessonInput")]
pub struct LessonCreate {
    pub unit_id: ID,
    pub title: String,
}

#[async_trait]
impl CrudRepository<Lesson, LessonCreate> for Lesson {
    #[tracing::instrument(skip(mm))]
    async fn create(mm: &ModelManager, data: LessonCreate) -> ModelResult<Self> {
        let mut tables = mm.store().write().await;
        let id = mm.next_id();

        let unit = tables
            .units
            .get(&data.unit_id)
            .cloned()
            .ok_or_else(|| ModelError::not_found(Unit::get_resource_type()))?;

        let lesson = Lesson {
            id: id.clone(),
            unit,
            title: data.title,
            order: 0,
            version: 1,
            status: None,
        };
        tables.lessons.insert(id, lesson.clone());

        tracing::debug!("lesson {} created", lesson.id.as_str());
        Ok(lesson)
    }

    #[tracing::instrument(skip(mm))]
    async fn find_by_id(mm: &ModelManager, id: &ID) -> Option<Self> {
        let tables = mm.store().read().await;
        tables.lessons.get(id).cloned()
    }

    async fn count(mm: &ModelManager) -> usize {
        mm.store().read().await.lessons.len()
    }
}

impl Lesson {
    #[tracing::instrument(skip(mm))]
    pub async fn all_by_unit(mm: &ModelManager, unit_id: &ID) -> Vec<Self> {
        let tables = mm.store().read().await;
        tables
            .lessons
            .iter()
            .filter(|l| &l.unit.id == unit_id)
            .cloned()
            .collect()
    }

    #[tracing::instrument(skip(mm))]
    pub async fn publish(mm: &ModelManager, lesson_id: &ID) -> ModelResult<Self> {
        let mut tables = mm.store().write().await;
        let lesson = tables
            .lessons
            .get_mut(lesson_id)
            .ok_or_else(|| ModelError::not_found(Self::get_resource_type()))?;

        lesson.status = Some(String::from(LESSON_STATUS_PUBLISHED));

        tracing::debug!("lesson {} published", lesson.id.as_str());
        Ok(lesson.clone())
    }

    /// Recommendations are not implemented, nothing is ever recommended.
    pub async fn recommended(_mm: &ModelManager, _grade: i32) -> Vec<Self> {
        Vec::new()
    }

    /// Search is not implemented, nothing is ever found.
    pub async fn search(_mm: &ModelManager, _query: &str, _grade: Option<i32>) -> Vec<Self> {
        Vec::new()
    }

    /// Lessons are not owned by anyone yet, so no viewer has drafts.
    pub async fn drafts_for_viewer(_mm: &ModelManager) -> Vec<Self> {
        Vec::new()
    }
}
