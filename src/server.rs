mod contact;
mod error;

pub use error::ApiError;

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use http::{header, HeaderName, HeaderValue};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::mail::MailGateway;
use crate::sitemap;

/// Shared by every API request. The gateway only builds mailers; each request connects its own.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<SiteConfig>,
    pub gateway: Arc<dyn MailGateway>,
}

impl ApiState {
    pub fn new(config: SiteConfig, gateway: impl MailGateway + 'static) -> Self {
        Self {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
        }
    }
}

/// Routes served outside of Leptos: the contact endpoint and the sitemap.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route(
            "/api/send-email",
            post(contact::send_email).fallback(contact::method_not_allowed),
        )
        .route("/api/sitemap.xml", get(sitemap_xml))
        .route("/sitemap.xml", get(sitemap_xml))
        .with_state(state)
}

const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::REFERRER_POLICY, "origin-when-cross-origin"),
];

/// Request tracing plus the security headers every response carries.
pub fn with_http_layers(router: Router) -> Router {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
        .layer(TraceLayer::new_for_http())
}

async fn sitemap_xml(State(state): State<ApiState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/xml")],
        sitemap::generate(&state.config.site.base_url, Utc::now()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::{MailCredentials, MailError, Mailer};
    use axum::body::Body;
    use http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct NoMail;

    impl MailGateway for NoMail {
        fn connect(&self, _: &MailCredentials) -> Result<Box<dyn Mailer>, MailError> {
            Err(MailError::Rejected("no mail in this test".to_string()))
        }
    }

    #[tokio::test]
    async fn test_sitemap_routes() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://julievillegas.dev".to_string();
        let app = router(ApiState::new(config, NoMail));

        for uri in ["/api/sitemap.xml", "/sitemap.xml"] {
            let res = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(res.headers()[header::CONTENT_TYPE], "text/xml");
            let body = res.into_body().collect().await.unwrap().to_bytes();
            let xml = String::from_utf8(body.to_vec()).unwrap();
            assert!(xml.contains("<loc>https://julievillegas.dev/en</loc>"));
        }
    }

    #[tokio::test]
    async fn test_security_headers() {
        let app = with_http_layers(router(ApiState::new(SiteConfig::default(), NoMail)));
        let res = app
            .oneshot(Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.headers()[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(res.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(res.headers()[header::REFERRER_POLICY], "origin-when-cross-origin");
    }

    #[tokio::test]
    async fn test_sitemap_is_get_only() {
        let app = router(ApiState::new(SiteConfig::default(), NoMail));
        let res = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/sitemap.xml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
