mod smtp;

pub use smtp::SmtpGateway;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::contact::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// The site owner, as presented in outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub owner_name: String,
    pub linkedin_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub user: String,
    pub pass: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("invalid address {address}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("couldn't build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("mail gateway rejected the message: {0}")]
    Rejected(String),
}

/// A connected mail client. Returns the provider's message id for each message sent.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailError>;

    async fn verify(&self) -> Result<(), MailError> {
        Ok(())
    }
}

/// Builds a fresh [`Mailer`] for each request.
pub trait MailGateway: Send + Sync {
    fn connect(&self, credentials: &MailCredentials) -> Result<Box<dyn Mailer>, MailError>;
}

fn format_sent_at(sent_at: DateTime<Utc>) -> String {
    sent_at.format("%d/%m/%Y, %H:%M:%S UTC").to_string()
}

/// Message body as HTML. Only newlines are converted.
fn message_html(message: &str) -> String {
    message.replace('\n', "<br>")
}

pub fn compose_notification(
    msg: &ContactMessage,
    operator: &str,
    sent_at: DateTime<Utc>,
) -> OutgoingEmail {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Nuevo mensaje del portfolio</title>
</head>
<body style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px 10px 0 0;">
        <h2 style="margin: 0;">💼 Nuevo mensaje desde tu portfolio</h2>
    </div>
    <div style="background: #f8f9fa; padding: 20px; border-radius: 0 0 10px 10px; border: 1px solid #e9ecef;">
        <table style="width: 100%; border-collapse: collapse;">
            <tr>
                <td style="padding: 10px; border-bottom: 1px solid #e9ecef; font-weight: bold; width: 100px;">Nombre:</td>
                <td style="padding: 10px; border-bottom: 1px solid #e9ecef;">{name}</td>
            </tr>
            <tr>
                <td style="padding: 10px; border-bottom: 1px solid #e9ecef; font-weight: bold;">Email:</td>
                <td style="padding: 10px; border-bottom: 1px solid #e9ecef;"><a href="mailto:{email}">{email}</a></td>
            </tr>
            <tr>
                <td style="padding: 10px; border-bottom: 1px solid #e9ecef; font-weight: bold;">Asunto:</td>
                <td style="padding: 10px; border-bottom: 1px solid #e9ecef;">{subject}</td>
            </tr>
        </table>
        <div style="margin-top: 20px;">
            <h4 style="color: #495057; margin-bottom: 10px;">Mensaje:</h4>
            <div style="background: white; padding: 15px; border-radius: 5px; border-left: 4px solid #667eea;">
                {message}
            </div>
        </div>
        <hr style="margin: 20px 0; border: none; border-top: 1px solid #e9ecef;">
        <p style="font-size: 12px; color: #6c757d; margin: 0;">
            📅 Enviado el {sent_at} desde tu portfolio web
        </p>
    </div>
</body>
</html>"#,
        name = msg.name,
        email = msg.email,
        subject = msg.subject,
        message = message_html(&msg.message),
        sent_at = format_sent_at(sent_at),
    );

    OutgoingEmail {
        from: format!("\"Portfolio Contact\" <{operator}>"),
        to: operator.to_string(),
        reply_to: Some(msg.email.clone()),
        subject: format!("📧 Nuevo mensaje del portfolio: {}", msg.subject),
        html,
    }
}

pub fn compose_confirmation(
    msg: &ContactMessage,
    operator: &str,
    identity: &SiteIdentity,
    sent_at: DateTime<Utc>,
) -> OutgoingEmail {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Confirmación de mensaje</title>
</head>
<body style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #28a745 0%, #20c997 100%); color: white; padding: 20px; border-radius: 10px 10px 0 0;">
        <h2 style="margin: 0;">✅ ¡Mensaje recibido correctamente!</h2>
    </div>
    <div style="background: #f8f9fa; padding: 20px; border-radius: 0 0 10px 10px; border: 1px solid #e9ecef;">
        <p style="font-size: 16px; color: #495057; margin-top: 0;">Hola <strong>{name}</strong>,</p>
        <p style="color: #495057;">Gracias por contactarme a través de mi portfolio. He recibido tu mensaje correctamente:</p>
        <div style="background: white; padding: 15px; border-radius: 5px; border-left: 4px solid #28a745; margin: 20px 0;">
            <p style="margin: 0; color: #495057;"><strong>Asunto:</strong> {subject}</p>
        </div>
        <p style="color: #495057;">Te responderé lo antes posible, generalmente en un plazo de 24-48 horas.</p>
        <div style="background: #e3f2fd; padding: 15px; border-radius: 5px; margin: 20px 0;">
            <p style="margin: 0; color: #1976d2; font-size: 14px;">
                <strong>💡 Mientras tanto:</strong><br>
                • Puedes ver más de mi trabajo en mi portfolio<br>
                • Conecta conmigo en <a href="{linkedin}" style="color: #1976d2;">LinkedIn</a><br>
                • Revisa mis proyectos en <a href="{github}" style="color: #1976d2;">GitHub</a>
            </p>
        </div>
        <hr style="margin: 20px 0; border: none; border-top: 1px solid #e9ecef;">
        <p style="color: #495057;">¡Saludos!</p>
        <p style="color: #495057; font-weight: bold;">{owner}</p>
        <p style="font-size: 12px; color: #6c757d; margin: 0;">
            📅 {sent_at}
        </p>
    </div>
</body>
</html>"#,
        name = msg.name,
        subject = msg.subject,
        linkedin = identity.linkedin_url,
        github = identity.github_url,
        owner = identity.owner_name,
        sent_at = format_sent_at(sent_at),
    );

    OutgoingEmail {
        from: format!("\"{} Portfolio\" <{operator}>", identity.owner_name),
        to: msg.email.clone(),
        reply_to: None,
        subject: format!("✅ Mensaje recibido - Portfolio {}", identity.owner_name),
        html,
    }
}
