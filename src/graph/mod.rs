//! GraphQL surface. Every field maps onto exactly one store call.

use async_graphql::{Context, EmptySubscription, Result, Schema, extensions::Tracing};

use crate::model::ModelManager;

mod error;

mod mutation;
pub use mutation::{CreateUploadUrlInput, MutationRoot};

mod query;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(mm: ModelManager) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(mm)
        .extension(Tracing)
        .finish()
}

pub(crate) fn model_manager<'a>(ctx: &Context<'a>) -> Result<&'a ModelManager> {
    ctx.data::<ModelManager>()
}
