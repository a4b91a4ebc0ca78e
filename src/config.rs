use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::mail::{MailCredentials, SiteIdentity};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub environment: RunMode,
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub mail: MailSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_linkedin_url")]
    pub linkedin_url: String,
    #[serde(default = "default_github_url")]
    pub github_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            owner_name: default_owner_name(),
            linkedin_url: default_linkedin_url(),
            github_url: default_github_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_owner_name() -> String {
    "Julie Villegas".to_string()
}

fn default_linkedin_url() -> String {
    "https://linkedin.com/in/julievillegas77".to_string()
}

fn default_github_url() -> String {
    "https://github.com/julsluks".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailSection {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Account the site sends from and receives notifications at (`EMAIL_USER`).
    #[serde(default)]
    pub user: Option<String>,
    /// App password for that account (`EMAIL_PASS`).
    #[serde(default)]
    pub pass: Option<String>,
}

impl Default for MailSection {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            user: None,
            pass: None,
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

impl MailSection {
    /// Both credentials, or `None` if either is missing or blank.
    pub fn credentials(&self) -> Option<MailCredentials> {
        let user = self.user.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let pass = self.pass.as_deref().filter(|s| !s.trim().is_empty())?;
        Some(MailCredentials {
            user: user.to_string(),
            pass: pass.to_string(),
        })
    }
}

impl SiteSection {
    pub fn identity(&self) -> SiteIdentity {
        SiteIdentity {
            owner_name: self.owner_name.clone(),
            linkedin_url: self.linkedin_url.clone(),
            github_url: self.github_url.clone(),
        }
    }
}

impl SiteConfig {
    /// Layers, lowest first: `portfolio.toml` (or `$PORTFOLIO_CONFIG`), `PORTFOLIO__*`
    /// variables, then `EMAIL_USER`, `EMAIL_PASS` and `ENVIRONMENT`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("PORTFOLIO_CONFIG").unwrap_or_else(|_| "portfolio".to_string());
        let builder = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("PORTFOLIO").separator("__"))
            .set_override_option("mail.user", env::var("EMAIL_USER").ok())?
            .set_override_option("mail.pass", env::var("EMAIL_PASS").ok())?
            .set_override_option("environment", env::var("ENVIRONMENT").ok())?;
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn is_production(&self) -> bool {
        self.environment == RunMode::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_without_sources() {
        let cfg = SiteConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(cfg.environment, RunMode::Development);
        assert_eq!(cfg.site.base_url, "http://localhost:3000");
        assert_eq!(cfg.mail.smtp_host, "smtp.gmail.com");
        assert_eq!(cfg.mail.smtp_port, 465);
        assert!(cfg.mail.credentials().is_none());
        assert!(!cfg.is_production());
    }

    #[test]
    fn test_file_and_overrides() {
        let toml = r#"
            environment = "production"

            [site]
            base_url = "https://julievillegas.dev"

            [mail]
            smtp_port = 587
            user = "owner@example.com"
        "#;
        let builder = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .set_override_option("mail.pass", Some("app-password"))
            .unwrap();
        let cfg = SiteConfig::from_builder(builder).unwrap();

        assert!(cfg.is_production());
        assert_eq!(cfg.site.base_url, "https://julievillegas.dev");
        assert_eq!(cfg.site.owner_name, "Julie Villegas");
        assert_eq!(cfg.mail.smtp_port, 587);
        assert_eq!(
            cfg.mail.credentials(),
            Some(MailCredentials {
                user: "owner@example.com".to_string(),
                pass: "app-password".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_credentials_count_as_missing() {
        let mail = MailSection {
            user: Some("owner@example.com".to_string()),
            pass: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(mail.credentials().is_none());

        let mail = MailSection {
            user: Some(String::new()),
            pass: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(mail.credentials().is_none());
    }
}
