use utoipa::OpenApi;

use crate::params::RegistroForm;

#[derive(OpenApi)]
#[openapi(
    info(title = "Personas", description = "Person registry with an age comparison chart"),
    paths(
        crate::routes::health,
        crate::routes::api::help,
        crate::routes::personas::index,
        crate::routes::personas::reset,
        crate::routes::personas::list,
        crate::routes::personas::register_form,
        crate::routes::personas::register,
        crate::routes::comparativa::age_chart,
    ),
    components(
        schemas(RegistroForm)
    ),
    tags(
        (name = "health"),
        (name = "personas")
    )
)]
pub struct ApiDoc;
