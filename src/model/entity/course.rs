use async_graphql::{ID, InputObject, SimpleObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::impl_resource_typed_for;
use crate::model::entity::Subject;
use crate::model::{CrudRepository, ModelError, ModelManager, ModelResult, ResourceTyped};

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: ID,
    pub subject: Subject,
    pub grade: i32,
    pub title: String,
}

impl_resource_typed_for!(Course, Course);

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "CreateCourseInput")]
pub struct CourseCreate {
    pub subject_id: ID,
    pub grade: i32,
    pub title: String,
}

#[async_trait]
impl CrudRepository<Course, CourseCreate> for Course {
    #[tracing::instrument(skip(mm))]
    async fn create(mm: &ModelManager, data: CourseCreate) -> ModelResult<Self> {
        let mut tables = mm.store().write().await;
        let id = mm.next_id();

        let subject = tables
            .subjects
            .get(&data.subject_id)
            .cloned()
            .ok_or_else(|| ModelError::not_found(Subject::get_resource_type()))?;

        let course = Course {
            id: id.clone(),
            subject,
            grade: data.grade,
            title: data.title,
        };
        tables.courses.insert(id, course.clone());

        tracing::debug!("course {} created", course.id.as_str());
        Ok(course)
    }

    #[tracing::instrument(skip(mm))]
    async fn find_by_id(mm: &ModelManager, id: &ID) -> Option<Self> {
        let tables = mm.store().read().await;
        tables.courses.get(id).cloned()
    }

    async fn count(mm: &ModelManager) -> usize {
        mm.store().read().await.courses.len()
    }
}

impl Course {
    /// Courses matching every filter that is present. An absent filter matches everything.
    #[tracing::instrument(skip(mm))]
    pub async fn list(mm: &ModelManager, grade: Option<i32>, subject_id: Option<&ID>) -> Vec<Self> {
        let tables = mm.store().read().await;
        tables
            .courses
            .iter()
            .filter(|c| grade.is_none_or(|g| c.grade == g))
            .filter(|c| subject_id.is_none_or(|s| &c.subject.id == s))
            .cloned()
            .collect()
    }
}
