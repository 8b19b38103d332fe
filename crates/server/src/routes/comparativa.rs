use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use service::chart;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// PNG line chart of ages by person id for one nationality
#[utoipa::path(
    get, path = "/comparativa/{nacionalidad}/", tag = "personas",
    params(("nacionalidad" = String, Path, description = "Nationality, matched exactly")),
    responses(
        (status = 200, description = "Chart", content_type = "image/png"),
        (status = 404, description = "No people with that nationality"),
        (status = 500, description = "Render Failed")
    )
)]
pub async fn age_chart(
    State(state): State<ServerState>,
    Path(nacionalidad): Path<String>,
) -> Result<impl IntoResponse, JsonApiError> {
    let png = chart::age_comparison_png(&state.personas, &nacionalidad).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
