//! Lesson content blocks.
//!
//! Blocks are echoed back to the caller with a fresh id and are not stored. Nothing checks the
//! lesson exists and a later read of the lesson will not list them.

use async_graphql::{ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::model::ModelManager;

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct TextBlock {
    pub id: ID,
    pub text: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct ImageBlock {
    pub id: ID,
    pub url: String,
    pub alt: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct AudioBlock {
    pub id: ID,
    pub url: String,
    pub duration_sec: Option<i32>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    pub id: ID,
    pub url: String,
    pub duration_sec: Option<i32>,
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
pub struct TextBlockInput {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
pub struct ImageBlockInput {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct AudioBlockInput {
    pub url: String,
    pub duration_sec: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlockInput {
    pub url: String,
    pub duration_sec: Option<i32>,
}

impl TextBlock {
    #[tracing::instrument(skip(mm))]
    pub async fn create(mm: &ModelManager, _lesson_id: &ID, data: TextBlockInput) -> Self {
        Self {
            id: mm.next_id(),
            text: data.text,
            order: 0,
        }
    }
}

impl ImageBlock {
    #[tracing::instrument(skip(mm))]
    pub async fn create(mm: &ModelManager, _lesson_id: &ID, data: ImageBlockInput) -> Self {
        Self {
            id: mm.next_id(),
            url: data.url,
            alt: data.alt,
            order: 0,
        }
    }
}

impl AudioBlock {
    #[tracing::instrument(skip(mm))]
    pub async fn create(mm: &ModelManager, _lesson_id: &ID, data: AudioBlockInput) -> Self {
        Self {
            id: mm.next_id(),
            url: data.url,
            duration_sec: data.duration_sec,
            order: 0,
        }
    }
}

impl VideoBlock {
    #[tracing::instrument(skip(mm))]
    pub async fn create(mm: &ModelManager, _lesson_id: &ID, data: VideoBlockInput) -> Self {
        Self {
            id: mm.next_id(),
            url: data.url,
            duration_sec: data.duration_sec,
            order: 0,
        }
    }
}
