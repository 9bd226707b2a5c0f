use async_graphql::{ID, SimpleObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::impl_resource_typed_for;
use crate::model::{CrudRepository, ModelError, ModelManager, ModelResult, ResourceTyped};

pub const SUBMISSION_STATE_SUBMITTED: &str = "SUBMITTED";
pub const SUBMISSION_STATE_APPROVED: &str = "APPROVED";

/// Review workflow record. Not linked to the lesson it was submitted for.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct Submission {
    pub id: ID,
    pub state: String,
}

impl_resource_typed_for!(Submission, Submission);

#[async_trait]
impl CrudRepository<Submission, ID> for Submission {
    /// Always a brand new submission, even when the lesson was already submitted or does not
    /// exist.
    #[tracing::instrument(skip(mm))]
    async fn create(mm: &ModelManager, _lesson_id: ID) -> ModelResult<Self> {
        let mut tables = mm.store().write().await;
        let submission = Submission {
            id: mm.next_id(),
            state: String::from(SUBMISSION_STATE_SUBMITTED),
        };
        tables
            .submissions
            .insert(submission.id.clone(), submission.clone());

        tracing::debug!("submission {} created", submission.id.as_str());
        Ok(submission)
    }

    #[tracing::instrument(skip(mm))]
    async fn find_by_id(mm: &ModelManager, id: &ID) -> Option<Self> {
        let tables = mm.store().read().await;
        tables.submissions.get(id).cloned()
    }

    async fn count(mm: &ModelManager) -> usize {
        mm.store().read().await.submissions.len()
    }
}

impl Submission {
    /// Approves the oldest stored submission.
    ///
    /// `lesson_id` does not take part in picking the submission. This mirrors how the review
    /// flow behaves today and must not be "fixed" without a decision on what approval targets.
    #[tracing::instrument(skip(mm))]
    pub async fn approve(mm: &ModelManager, lesson_id: &ID) -> ModelResult<Self> {
        let mut tables = mm.store().write().await;
        let submission = tables
            .submissions
            .first_mut()
            .ok_or_else(|| ModelError::not_found(Self::get_resource_type()))?;

        submission.state = String::from(SUBMISSION_STATE_APPROVED);

        tracing::debug!("submission {} approved", submission.id.as_str());
        Ok(submission.clone())
    }

    /// Every stored submission. `state` is accepted for API compatibility and ignored.
    #[tracing::instrument(skip(mm))]
    pub async fn list(mm: &ModelManager, _state: Option<&str>) -> Vec<Self> {
        let tables = mm.store().read().await;
        tables.submissions.iter().cloned().collect()
    }
}
