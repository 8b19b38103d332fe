use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    response::{Html, Response},
    Form,
};
use minijinja::context;
use tracing::{info, warn};

use crate::errors::JsonApiError;
use crate::params::{PageQuery, RegistroForm};
use crate::routes::{found, ServerState};
use crate::views::{REGISTER_TEMPLATE, TABLE_TEMPLATE};

/// Create the schema when the store is empty, then go to the list
#[utoipa::path(get, path = "/", tag = "personas", responses((status = 302, description = "Redirect to /personas"), (status = 500, description = "Storage Error")))]
pub async fn index(State(state): State<ServerState>) -> Result<Response, JsonApiError> {
    if state.personas.ensure_schema().await? {
        info!(event = "schema_bootstrap", "created person table on first visit");
    }
    Ok(found("/personas"))
}

/// Drop and recreate the person table
#[utoipa::path(get, path = "/reset", tag = "personas", responses((status = 200, description = "Schema recreated", body = String, content_type = "text/html"), (status = 500, description = "Storage Error")))]
pub async fn reset(State(state): State<ServerState>) -> Result<Html<&'static str>, JsonApiError> {
    state.personas.create_schema().await?;
    Ok(Html("<h3>Database re-created!</h3>"))
}

/// HTML table of registered people
#[utoipa::path(get, path = "/personas", tag = "personas", params(PageQuery), responses((status = 200, description = "HTML table", body = String, content_type = "text/html"), (status = 500, description = "Storage Error")))]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Html<String>, JsonApiError> {
    // unreadable query strings list everything
    let q = match query {
        Ok(Query(pairs)) => PageQuery::from_pairs(pairs),
        Err(e) => {
            warn!(err = %e, "ignoring unreadable query string");
            PageQuery::default()
        }
    };
    let page = q.page();
    let data = state.personas.report(page).await?;
    let total = state.personas.count().await?;
    info!(
        count = data.len(),
        total,
        limit = ?page.limit(),
        offset = ?page.offset(),
        "list personas"
    );
    let html = state.views.render(TABLE_TEMPLATE, context! { data => data, total => total })?;
    Ok(Html(html))
}

/// Registration form
#[utoipa::path(get, path = "/registro", tag = "personas", responses((status = 200, description = "HTML form", body = String, content_type = "text/html")))]
pub async fn register_form(State(state): State<ServerState>) -> Result<Html<String>, JsonApiError> {
    Ok(Html(state.views.render(REGISTER_TEMPLATE, context! {})?))
}

/// Register a person from the form, then go to the list
#[utoipa::path(
    post, path = "/registro", tag = "personas",
    request_body(content = RegistroForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Registered, redirect to /personas"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    form: Result<Form<RegistroForm>, FormRejection>,
) -> Result<Response, JsonApiError> {
    let Form(form) = form?;
    let input = form.into_new_persona()?;
    state.personas.register(&input).await?;
    Ok(found("/personas"))
}
