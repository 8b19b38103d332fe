use axum::response::Html;

const HELP: &str = concat!(
    "<h1>Welcome!</h1>",
    "<h2>Available endpoints:</h2>",
    "<h3>[GET] / --> create the database if missing and go to /personas</h3>",
    "<h3>[GET] /reset --> drop and recreate the database</h3>",
    "<h3>[GET] /personas?limit=&amp;offset= --> table of registered people</h3>",
    "<h3>[GET] /registro --> registration form</h3>",
    "<h3>[POST] /registro --> register a person (form fields name, age, nationality)</h3>",
    "<h3>[GET] /comparativa/&lt;nacionalidad&gt;/ --> PNG chart of ages by id for one nationality</h3>",
    "<h3>[GET] /api/openapi.json --> OpenAPI description of these endpoints</h3>",
);

/// Static list of the endpoints served by this application
#[utoipa::path(get, path = "/api", tag = "personas", responses((status = 200, description = "HTML endpoint list", body = String, content_type = "text/html")))]
pub async fn help() -> Html<&'static str> {
    Html(HELP)
}
