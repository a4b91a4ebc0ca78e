//! Checks the configured SMTP account: verifies the connection, then sends one
//! test notification and one test confirmation to the operator's own mailbox.

use chrono::Utc;
use portfolio_site::config::SiteConfig;
use portfolio_site::mail::{MailGateway, OutgoingEmail, SmtpGateway};
use portfolio_site::observability::init_tracing;
use std::process::ExitCode;

fn test_email(from: String, to: &str, subject: &str, kind: &str) -> OutgoingEmail {
    let html = format!(
        r#"<h2>✅ {subject}</h2>
<p><strong>Fecha:</strong> {date}</p>
<p><strong>Tipo:</strong> {kind}</p>
<hr>
<p><small>Email de prueba para verificar la funcionalidad.</small></p>"#,
        date = Utc::now().format("%d/%m/%Y, %H:%M:%S UTC"),
    );
    OutgoingEmail {
        from,
        to: to.to_string(),
        reply_to: None,
        subject: format!("🧪 Test - {subject}"),
        html,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_tracing(false) {
        eprintln!("couldn't initialise tracing: {e}");
        return ExitCode::FAILURE;
    }

    let Some(credentials) = config.mail.credentials() else {
        eprintln!("❌ EMAIL_USER or EMAIL_PASS is not set");
        return ExitCode::FAILURE;
    };
    println!("EMAIL_USER: {}", credentials.user);
    println!("EMAIL_PASS: {}", "*".repeat(credentials.pass.chars().count()));

    let gateway = SmtpGateway::new(config.mail.smtp_host.clone(), config.mail.smtp_port);
    let mailer = match gateway.connect(&credentials) {
        Ok(mailer) => mailer,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "🔌 Verifying connection to {}:{}...",
        config.mail.smtp_host, config.mail.smtp_port
    );
    if let Err(e) = mailer.verify().await {
        eprintln!("❌ {e}");
        eprintln!("   Check that the account uses an app password and that SMTP access is enabled.");
        return ExitCode::FAILURE;
    }
    println!("✅ Connection OK");

    let owner = &config.site.owner_name;
    let notification = test_email(
        format!("\"Portfolio Test\" <{}>", credentials.user),
        &credentials.user,
        "Notificación de mensaje",
        "Email de notificación",
    );
    let confirmation = test_email(
        format!("\"{owner} Portfolio\" <{}>", credentials.user),
        &credentials.user,
        "Confirmación para remitente",
        "Email de confirmación",
    );

    match futures::try_join!(mailer.send(notification), mailer.send(confirmation)) {
        Ok((notification_id, confirmation_id)) => {
            println!("✅ Test emails sent to {}", credentials.user);
            println!("   Notification id: {notification_id}");
            println!("   Confirmation id: {confirmation_id}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
