//! Accounts and learner profiles.
//!
//! Authentication is a placeholder: sign-up mints an unsaved user, sign-in hands out a static
//! token and there is never a current viewer.

use async_graphql::{Enum, ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::model::ModelManager;

pub const DEV_TOKEN: &str = "dev-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Parent,
    Teacher,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Parent => write!(f, "parent"),
            Self::Teacher => write!(f, "teacher"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct User {
    pub id: ID,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[graphql(name = "SignUpInput")]
pub struct UserCreate {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
pub struct StudentProfile {
    pub id: ID,
    pub grade: i32,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[graphql(name = "CreateStudentProfileInput")]
pub struct StudentProfileCreate {
    pub grade: i32,
    pub age: Option<i32>,
}

/// Credentials accepted by sign-in. All of them are optional and none are checked.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub otp: Option<String>,
    pub password: Option<String>,
}

impl User {
    #[tracing::instrument(skip(mm, data), fields(role = %data.role))]
    pub async fn sign_up(mm: &ModelManager, data: UserCreate) -> Self {
        Self {
            id: mm.next_id(),
            role: data.role,
        }
    }

    pub async fn sign_in(_mm: &ModelManager, _credentials: Credentials) -> Option<String> {
        Some(String::from(DEV_TOKEN))
    }

    pub async fn viewer(_mm: &ModelManager) -> Option<Self> {
        None
    }
}

impl StudentProfile {
    #[tracing::instrument(skip(mm))]
    pub async fn create(mm: &ModelManager, data: StudentProfileCreate) -> Self {
        Self {
            id: mm.next_id(),
            grade: data.grade,
            age: data.age,
        }
    }
}
