pub mod api;
pub mod comparativa;
pub mod personas;

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::persona::{PersonaService, SeaOrmPersonaRepository};

use crate::openapi::ApiDoc;
use crate::views::Views;

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub personas: PersonaService<SeaOrmPersonaRepository>,
    pub views: Arc<Views>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Result<Self, minijinja::Error> {
        let repo = Arc::new(SeaOrmPersonaRepository::new(db));
        Ok(Self {
            personas: PersonaService::new(repo),
            views: Arc::new(Views::new()?),
        })
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Build the full application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(personas::index))
        .route("/api", get(api::help))
        .route("/api/openapi.json", get(openapi_json))
        .route("/reset", get(personas::reset))
        .route("/personas", get(personas::list))
        .route("/registro", get(personas::register_form).post(personas::register))
        .route("/comparativa/:nacionalidad/", get(comparativa::age_chart))
        .route("/comparativa/:nacionalidad", get(comparativa::age_chart))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                // 每个请求一个 INFO 级 span，记录方法与路径
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应完成时记录状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx 以 ERROR 级别输出
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
