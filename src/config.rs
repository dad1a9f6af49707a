use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Owner details shown on the page. Empty links are not rendered.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub resume_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            role: default_role(),
            experience: default_experience(),
            contact_email: String::new(),
            phone: String::new(),
            location: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            resume_url: String::new(),
        }
    }
}

fn default_owner_name() -> String {
    "Jonathan".to_string()
}

fn default_role() -> String {
    "Full Stack Developer".to_string()
}

fn default_experience() -> String {
    "2 years".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `APP_EMAIL` / `APP_PASSWORD`
    /// 2. Environment variables (PORTFOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // A single mailbox both sends and receives the notifications
        if let Ok(app_email) = env::var("APP_EMAIL") {
            builder = builder
                .set_override("email.smtp_username", app_email.as_str())?
                .set_override("email.from_address", app_email.as_str())?
                .set_override("email.contact_address", app_email)?;
        }
        if let Ok(app_password) = env::var("APP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", app_password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !portfolio_contact::is_valid_email(&self.email.from_address) {
            return Err(format!(
                "Email from_address is not a valid address: '{}'",
                self.email.from_address
            ));
        }
        if !portfolio_contact::is_valid_email(&self.email.contact_address) {
            return Err(format!(
                "Email contact_address is not a valid address: '{}'",
                self.email.contact_address
            ));
        }
        Ok(())
    }
}
