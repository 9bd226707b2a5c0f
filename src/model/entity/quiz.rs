use async_graphql::{ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::model::ModelManager;

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: ID,
    pub lesson_id: ID,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub prompt: String,
    #[graphql(default)]
    #[serde(default)]
    pub choices: Vec<String>,
    pub correct_index: Option<i32>,
}

/// A learner's answers to one quiz.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct Attempt {
    pub id: ID,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizInput {
    pub quiz_id: ID,
    /// Chosen option index per question, in question order.
    #[graphql(default)]
    #[serde(default)]
    pub answers: Vec<i32>,
}

impl Quiz {
    /// Questions are accepted and dropped, the quiz is not stored.
    #[tracing::instrument(skip(mm, questions), fields(question_count = questions.len()))]
    pub async fn create(mm: &ModelManager, lesson_id: &ID, questions: Vec<QuestionInput>) -> Self {
        Self {
            id: mm.next_id(),
            lesson_id: lesson_id.clone(),
        }
    }
}

impl Attempt {
    /// Answers are not graded or stored.
    #[tracing::instrument(skip(mm))]
    pub async fn submit(mm: &ModelManager, _data: SubmitQuizInput) -> Self {
        Self { id: mm.next_id() }
    }
}
