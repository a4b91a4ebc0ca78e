use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};
use uuid::Uuid;

use super::{MailCredentials, MailError, MailGateway, Mailer, OutgoingEmail};

/// Authenticated SMTP relay over implicit TLS.
#[derive(Debug, Clone)]
pub struct SmtpGateway {
    host: String,
    port: u16,
}

impl SmtpGateway {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl MailGateway for SmtpGateway {
    fn connect(&self, credentials: &MailCredentials) -> Result<Box<dyn Mailer>, MailError> {
        let creds = Credentials::new(credentials.user.clone(), credentials.pass.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
            .port(self.port)
            .credentials(creds)
            .build();
        debug!(smtp_host = %self.host, smtp_port = self.port, "SMTP transport created");
        Ok(Box::new(SmtpMailer { transport }))
    }
}

struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

/// `<uuid@domain>`, using the sender's domain.
fn new_message_id(from: &Mailbox) -> String {
    format!("<{}@{}>", Uuid::new_v4(), from.email.domain())
}

fn build_message(email: OutgoingEmail, message_id: &str) -> Result<Message, MailError> {
    let from = mailbox(&email.from)?;
    let mut builder = Message::builder()
        .message_id(Some(message_id.to_string()))
        .from(from)
        .to(mailbox(&email.to)?)
        .subject(email.subject)
        .header(ContentType::TEXT_HTML);
    if let Some(reply_to) = email.reply_to.as_deref() {
        builder = builder.reply_to(mailbox(reply_to)?);
    }
    Ok(builder.body(email.html)?)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailError> {
        let message_id = new_message_id(&mailbox(&email.from)?);
        let message = build_message(email, &message_id)?;
        let response = self.transport.send(message).await?;
        info!(
            message_id = %message_id,
            code = %response.code(),
            "Email accepted by SMTP relay"
        );
        Ok(message_id)
    }

    async fn verify(&self) -> Result<(), MailError> {
        if self.transport.test_connection().await? {
            info!("SMTP connection verified");
            Ok(())
        } else {
            Err(MailError::Rejected(
                "SMTP server did not accept the connection test".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "\"Portfolio Contact\" <owner@example.com>".to_string(),
            to: "owner@example.com".to_string(),
            reply_to: Some("ana@example.com".to_string()),
            subject: "📧 Nuevo mensaje del portfolio: Hi".to_string(),
            html: "<p>Hello</p>".to_string(),
        }
    }

    #[test]
    fn test_message_id_uses_sender_domain() {
        let from = mailbox("\"Portfolio Contact\" <owner@example.com>").unwrap();
        let a = new_message_id(&from);
        let b = new_message_id(&from);
        assert!(a.starts_with('<'));
        assert!(a.ends_with("@example.com>"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_build_message_headers() {
        let message = build_message(email(), "<abc@example.com>").unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Message-ID: <abc@example.com>"));
        assert!(formatted.contains("Reply-To: ana@example.com"));
        assert!(formatted.contains("To: owner@example.com"));
        assert!(formatted.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_bad_address_is_reported() {
        let mut bad = email();
        bad.to = "not an address".to_string();
        match build_message(bad, "<abc@example.com>") {
            Err(MailError::Address { address, .. }) => assert_eq!(address, "not an address"),
            other => panic!("expected address error, got {other:?}"),
        }
    }
}
