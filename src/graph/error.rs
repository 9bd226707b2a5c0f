use async_graphql::{Error, ErrorExtensions};

use crate::error::log_error;
use crate::model::ModelError;

impl ModelError {
    /// Machine readable code sent to clients in `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
        }
    }
}

impl ErrorExtensions for ModelError {
    fn extend(&self) -> Error {
        log_error(self);

        let code = self.code();
        let resource = self.resource_type().to_string();
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            e.set("resource", resource);
        })
    }
}
