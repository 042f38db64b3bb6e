//! API documentation: the OpenAPI document plus Swagger UI and ReDoc pages
//! that render it. All three are compiled into the binary.

use axum::{http::header, response::Html, response::IntoResponse};

const OPENAPI_YAML: &str = include_str!("../../doc/openapi.yaml");
const SWAGGER_HTML: &str = include_str!("../../doc/swagger.html");
const REDOC_HTML: &str = include_str!("../../doc/redoc.html");

/// GET /openapi.yaml
pub async fn openapi_spec() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/yaml")], OPENAPI_YAML)
}

/// GET /docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

/// GET /redoc
pub async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}
