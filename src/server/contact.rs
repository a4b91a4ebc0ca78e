use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::{ApiError, ApiState};
use crate::contact::{ContactMessage, ValidationError};
use crate::mail::{compose_confirmation, compose_notification, MailError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub message: &'static str,
    pub notification_id: String,
    pub confirmation_id: String,
}

pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn delivery_failed(source: MailError, expose: bool) -> ApiError {
    error!(error = %source, "Failed to send contact emails");
    ApiError::Delivery { source, expose }
}

/// `POST /api/send-email`: notify the site owner and confirm to the sender.
pub(super) async fn send_email(
    State(state): State<ApiState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    let Json(msg) = payload.map_err(|rejection| {
        debug!(%rejection, "Unreadable contact payload");
        ApiError::Validation(ValidationError::MissingFields)
    })?;

    if let Err(reason) = msg.validate() {
        info!(%reason, "Contact submission rejected");
        return Err(reason.into());
    }

    let Some(credentials) = state.config.mail.credentials() else {
        error!("EMAIL_USER or EMAIL_PASS is not configured");
        return Err(ApiError::MissingCredentials);
    };

    let expose = !state.config.is_production();
    let mailer = state
        .gateway
        .connect(&credentials)
        .map_err(|e| delivery_failed(e, expose))?;

    if !state.config.is_production() {
        mailer.verify().await.map_err(|e| delivery_failed(e, expose))?;
    }

    let sent_at = Utc::now();
    let notification = compose_notification(&msg, &credentials.user, sent_at);
    let confirmation = compose_confirmation(
        &msg,
        &credentials.user,
        &state.config.site.identity(),
        sent_at,
    );

    // both or nothing: a failed confirmation fails the request even if the owner was notified
    let (notification_id, confirmation_id) =
        futures::try_join!(mailer.send(notification), mailer.send(confirmation)).map_err(|e| {
            warn!(from = %msg.email, "Contact submission may have been partially delivered");
            delivery_failed(e, expose)
        })?;

    info!(
        notification_id = %notification_id,
        confirmation_id = %confirmation_id,
        "Contact emails sent"
    );

    Ok(Json(SendEmailResponse {
        message: "Emails enviados correctamente",
        notification_id,
        confirmation_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MailSection, RunMode, SiteConfig};
    use crate::mail::{MailCredentials, MailGateway, Mailer, OutgoingEmail};
    use crate::server::router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::Router;
    use http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct Recorder {
        connects: Arc<AtomicUsize>,
        sent: Arc<Mutex<Vec<OutgoingEmail>>>,
        fail_to: Option<String>,
        fail_verify: bool,
    }

    impl Recorder {
        fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl MailGateway for Recorder {
        fn connect(&self, _: &MailCredentials) -> Result<Box<dyn Mailer>, MailError> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(self.clone()))
        }
    }

    #[async_trait]
    impl Mailer for Recorder {
        async fn send(&self, email: OutgoingEmail) -> Result<String, MailError> {
            if self.fail_to.as_deref() == Some(email.to.as_str()) {
                return Err(MailError::Rejected(format!("mailbox {} unavailable", email.to)));
            }
            let mut sent = self.sent.lock().unwrap();
            sent.push(email);
            Ok(format!("<{}@example.com>", sent.len()))
        }

        async fn verify(&self) -> Result<(), MailError> {
            if self.fail_verify {
                Err(MailError::Rejected("bad credentials".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn configured(environment: RunMode) -> SiteConfig {
        SiteConfig {
            environment,
            mail: MailSection {
                user: Some("owner@example.com".to_string()),
                pass: Some("app-password".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn app(config: SiteConfig, recorder: &Recorder) -> Router {
        router(ApiState::new(config, recorder.clone()))
    }

    async fn call(app: Router, method: Method, body: &str) -> (StatusCode, Value) {
        let res = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/send-email")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ana() -> String {
        json!({
            "name": "Ana",
            "email": "ana@example.com",
            "subject": "Hi",
            "message": "Hello there"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_well_formed_submission_sends_both_emails() {
        let recorder = Recorder::default();
        let (status, body) = call(
            app(configured(RunMode::Development), &recorder),
            Method::POST,
            &ana(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Emails enviados correctamente");
        let notification_id = body["notificationId"].as_str().unwrap();
        let confirmation_id = body["confirmationId"].as_str().unwrap();
        assert_ne!(notification_id, confirmation_id);

        assert_eq!(recorder.connects.load(Ordering::SeqCst), 1);
        let mut recipients = recorder
            .sent()
            .into_iter()
            .map(|e| e.to)
            .collect::<Vec<_>>();
        recipients.sort();
        assert_eq!(recipients, vec!["ana@example.com", "owner@example.com"]);
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let recorder = Recorder::default();
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let (status, body) =
                call(app(configured(RunMode::Development), &recorder), method, "").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body, json!({ "message": "Method not allowed" }));
        }
        assert!(recorder.sent().is_empty());
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected_before_sending() {
        let recorder = Recorder::default();
        let cases = [
            json!({"name": "", "email": "x@x.com", "subject": "s", "message": "m"}),
            json!({"name": "n", "email": "x@x.com", "subject": "   ", "message": "m"}),
            json!({"name": "n", "email": "x@x.com", "subject": "s", "message": "\n\t"}),
            json!({"name": "n", "email": "x@x.com", "subject": "s"}),
            json!({}),
        ];
        for case in cases {
            let (status, body) = call(
                app(configured(RunMode::Development), &recorder),
                Method::POST,
                &case.to_string(),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
            assert_eq!(body, json!({ "message": "Todos los campos son requeridos" }));
        }
        assert_eq!(recorder.connects.load(Ordering::SeqCst), 0);
        assert!(recorder.sent().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_body_is_a_bad_request() {
        let recorder = Recorder::default();
        for body in ["not json", "[1, 2]", ""] {
            let (status, _) = call(
                app(configured(RunMode::Development), &recorder),
                Method::POST,
                body,
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
        }
        assert!(recorder.sent().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let recorder = Recorder::default();
        for email in ["ana", "ana@example", "ana@ example.com", "@example.com"] {
            let payload =
                json!({"name": "Ana", "email": email, "subject": "Hi", "message": "Hello"});
            let (status, body) = call(
                app(configured(RunMode::Development), &recorder),
                Method::POST,
                &payload.to_string(),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{email}");
            assert_eq!(body, json!({ "message": "Formato de email inválido" }));
        }
        assert!(recorder.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_sends_nothing() {
        let recorder = Recorder::default();
        let mut config = configured(RunMode::Development);
        config.mail.pass = None;

        let (status, body) = call(app(config, &recorder), Method::POST, &ana()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "message": "Configuración del servidor incompleta" })
        );
        assert_eq!(recorder.connects.load(Ordering::SeqCst), 0);
        assert!(recorder.sent().is_empty());
    }

    #[tokio::test]
    async fn test_failed_confirmation_fails_whole_request() {
        let recorder = Recorder {
            fail_to: Some("ana@example.com".to_string()),
            ..Default::default()
        };
        let (status, body) = call(
            app(configured(RunMode::Development), &recorder),
            Method::POST,
            &ana(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error enviando el email");
        assert_eq!(
            body["error"],
            "mail gateway rejected the message: mailbox ana@example.com unavailable"
        );
    }

    #[tokio::test]
    async fn test_production_hides_delivery_detail() {
        let recorder = Recorder {
            fail_to: Some("owner@example.com".to_string()),
            ..Default::default()
        };
        let (status, body) = call(
            app(configured(RunMode::Production), &recorder),
            Method::POST,
            &ana(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "message": "Error enviando el email", "error": "Error interno del servidor" })
        );
    }

    #[tokio::test]
    async fn test_development_verifies_connection_first() {
        let recorder = Recorder {
            fail_verify: true,
            ..Default::default()
        };
        let (status, body) = call(
            app(configured(RunMode::Development), &recorder),
            Method::POST,
            &ana(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "mail gateway rejected the message: bad credentials");
        assert!(recorder.sent().is_empty());

        // production skips the check
        let (status, _) = call(
            app(configured(RunMode::Production), &recorder),
            Method::POST,
            &ana(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(recorder.sent().len(), 2);
    }
}
