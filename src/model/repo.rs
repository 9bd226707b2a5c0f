use async_graphql::ID;

use crate::model::{ModelManager, error::ModelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Subject,
    Course,
    Unit,
    Lesson,
    Submission,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subject => write!(f, "subject"),
            Self::Course => write!(f, "course"),
            Self::Unit => write!(f, "unit"),
            Self::Lesson => write!(f, "lesson"),
            Self::Submission => write!(f, "submission"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Operations shared by every kind the store keeps.
///
/// Nothing is ever updated through this trait and nothing is ever deleted.
#[async_trait::async_trait]
pub trait CrudRepository<T, Create>
where
    T: ResourceTyped,
{
    async fn create(mm: &ModelManager, data: Create) -> ModelResult<T>;

    async fn find_by_id(mm: &ModelManager, id: &ID) -> Option<T>;

    async fn count(mm: &ModelManager) -> usize;
}

#[macro_export]
macro_rules! impl_resource_typed_for {
    ($ent:ident, $kind:ident) => {
        impl $crate::model::ResourceTyped for $ent {
            fn get_resource_type() -> $crate::model::ResourceType {
                $crate::model::ResourceType::$kind
            }
        }
    };
}
