#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use portfolio_site::config::SiteConfig;
    use portfolio_site::observability::init_tracing;
    use std::process::ExitCode;

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_tracing(config.is_production()) {
        eprintln!("couldn't initialise tracing: {e}");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server stopped");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "ssr")]
async fn serve(
    config: portfolio_site::config::SiteConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::mail::SmtpGateway;
    use portfolio_site::server::{self, ApiState};

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    if config.mail.credentials().is_none() {
        tracing::warn!("EMAIL_USER or EMAIL_PASS is not set, the contact form will fail");
    }
    let gateway = SmtpGateway::new(config.mail.smtp_host.clone(), config.mail.smtp_port);
    let api = server::router(ApiState::new(config, gateway));

    let site = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = server::with_http_layers(api.merge(site));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
