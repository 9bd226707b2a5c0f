use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{Config, web::AppState};

pub const QUERY_PATH: &str = "/query";
pub const HEALTH_PATH: &str = "/health";
pub const PLAYGROUND_PATH: &str = "/";

pub fn build_app(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route_service(QUERY_PATH, GraphQL::new(state.schema().clone()));

    if config.app().playground() {
        router = router.route(PLAYGROUND_PATH, get(playground_handler));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn playground_handler() -> Html<String> {
    Html(playground_source(
        GraphQLPlaygroundConfig::new(QUERY_PATH).title("GraphQL playground"),
    ))
}
