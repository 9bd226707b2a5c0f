use crate::graph::{AppSchema, build_schema};
use crate::model::ModelManager;

#[derive(Clone)]
pub struct AppState {
    mm: ModelManager,
    schema: AppSchema,
}

impl AppState {
    pub fn new(mm: ModelManager) -> Self {
        let schema = build_schema(mm.clone());
        Self { mm, schema }
    }

    pub fn model(&self) -> &ModelManager {
        &self.mm
    }

    pub fn schema(&self) -> &AppSchema {
        &self.schema
    }
}
