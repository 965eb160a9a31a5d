//! OpenAPI document for the service, generated with utoipa.

use utoipa::OpenApi;

use crate::routes::{health, info, root};

#[derive(OpenApi)]
#[openapi(
    info(
        title = crate::APP_TITLE,
        description = "Professional Demo Application for Agrarian CI/CD Testing",
        version = crate::VERSION
    ),
    paths(root::root, health::health_check, info::info),
    components(schemas(root::RootResponse, health::HealthResponse, info::InfoResponse)),
    tags((name = "app", description = "Pipeline smoke-test endpoints"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_matches_service() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Demo Agrarian Application");
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[test]
    fn openapi_documents_json_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/", "/health", "/info"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "{expected} not documented"
            );
        }
    }
}
