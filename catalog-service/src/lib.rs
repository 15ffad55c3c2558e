pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use service_core::middleware::{
    request_id_middleware, request_metrics_middleware, REQUEST_ID_HEADER,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::readiness_gate;
use crate::startup::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "catalog-service",
        description = "Read-only HTTP query service over the song catalog"
    ),
    servers((url = "http://localhost:8080", description = "Local development")),
    paths(
        handlers::songs::list_songs,
        handlers::songs::list_songs_by_artist,
        handlers::songs::get_song_by_id,
        handlers::users::list_users,
        handlers::users::get_user_by_name,
    ),
    components(schemas(
        models::Song,
        models::User,
        dtos::SongResponse,
        dtos::SongListResponse,
        dtos::FailureResponse,
        dtos::FailureBody,
    )),
    tags(
        (name = "Songs", description = "Song catalog queries"),
        (name = "Users", description = "User collection queries"),
    )
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_index))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/songs", get(handlers::songs::list_songs))
        .route(
            "/songs/artist/:artist_name",
            get(handlers::songs::list_songs_by_artist),
        )
        .route("/songs/id/:id", get(handlers::songs::get_song_by_id))
        .route("/userchild", get(handlers::users::list_users))
        .route("/:name", get(handlers::users::get_user_by_name))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(from_fn_with_state(
            state.db.connection_status(),
            readiness_gate,
        ))
        .layer(from_fn(request_metrics_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
