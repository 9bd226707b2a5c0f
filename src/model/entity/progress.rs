//! Learner progress. Nothing here is stored: every call mints a fresh record and reads never
//! see earlier writes.

use async_graphql::{ID, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::model::ModelManager;

pub const PLACEHOLDER_PROGRESS_ID: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct Progress {
    pub id: ID,
}

impl Progress {
    #[tracing::instrument(skip(mm))]
    pub async fn start(mm: &ModelManager, _lesson_id: &ID) -> Self {
        Self { id: mm.next_id() }
    }

    #[tracing::instrument(skip(mm))]
    pub async fn complete(mm: &ModelManager, _lesson_id: &ID, _score: Option<i32>) -> Self {
        Self { id: mm.next_id() }
    }

    pub async fn find_by_lesson(_mm: &ModelManager, _lesson_id: &ID) -> Self {
        Self {
            id: ID::from(PLACEHOLDER_PROGRESS_ID),
        }
    }

    pub async fn list_for_viewer(_mm: &ModelManager, _course_id: Option<&ID>) -> Vec<Self> {
        Vec::new()
    }
}
