//! Interactive API documentation.
//!
//! Both UIs are thin HTML shells that pull their bundles from a CDN and load
//! the generated document from [`OPENAPI_PATH`].

use axum::Json;
use axum::response::IntoResponse;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use utoipa::OpenApi;

use crate::{APP_TITLE, ApiDoc};

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";

const SWAGGER_UI_CSS: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css";
const SWAGGER_UI_JS: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js";
const REDOC_JS: &str = "https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js";

/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Swagger UI page.
pub async fn swagger_ui() -> Markup {
    let init = format!(
        "SwaggerUIBundle({{url: '{OPENAPI_PATH}', dom_id: '#swagger-ui', \
         presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset], \
         layout: 'BaseLayout', deepLinking: true}});"
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (APP_TITLE) " - Swagger UI" }
                link rel="stylesheet" type="text/css" href=(SWAGGER_UI_CSS);
            }
            body {
                div id="swagger-ui" {}
                script src=(SWAGGER_UI_JS) {}
                script { (PreEscaped(init)) }
            }
        }
    }
}

/// ReDoc page.
pub async fn redoc() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (APP_TITLE) " - ReDoc" }
                style { (PreEscaped("body { margin: 0; padding: 0; }")) }
            }
            body {
                redoc spec-url=(OPENAPI_PATH) {}
                script src=(REDOC_JS) {}
            }
        }
    }
}
