use axum::response::Redirect;

/// Interactive documentation served by Swagger UI.
pub const DOCS_PATH: &str = "/docs";

pub async fn docs_redirect() -> Redirect {
    Redirect::temporary(DOCS_PATH)
}
