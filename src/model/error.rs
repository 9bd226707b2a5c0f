use thiserror::Error;

use crate::model::ResourceType;

pub type ModelResult<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{}", not_found_message(.resource_type))]
    ReferenceNotFound { resource_type: ResourceType },
}

impl ModelError {
    pub fn not_found(resource_type: ResourceType) -> Self {
        Self::ReferenceNotFound { resource_type }
    }

    pub fn resource_type(&self) -> &ResourceType {
        match self {
            Self::ReferenceNotFound { resource_type } => resource_type,
        }
    }
}

fn not_found_message(resource_type: &ResourceType) -> String {
    match resource_type {
        ResourceType::Submission => String::from("no submission"),
        other => format!("{other} not found"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            ModelError::not_found(ResourceType::Subject).to_string(),
            "subject not found"
        );
        assert_eq!(
            ModelError::not_found(ResourceType::Unit).to_string(),
            "unit not found"
        );
        assert_eq!(
            ModelError::not_found(ResourceType::Submission).to_string(),
            "no submission"
        );
    }
}
