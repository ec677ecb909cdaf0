// Composition root for the attendance service.
//
// - Read config from the environment.
// - Instantiate the in-memory store and directory.
// - Wire them into the use case handlers.
// - Expose the REST routes, the GraphQL endpoint and request tracing.

pub mod config;
pub mod graphql;
pub mod http;
pub mod identity;
pub mod state;

use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shell::state::AppState;

pub const DEFAULT_LOG_FILTER: &str = "study_attendance=info,tower_http=info";

pub fn app(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    http::router(state)
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
