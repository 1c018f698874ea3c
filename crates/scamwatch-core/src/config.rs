//! Environment-driven application configuration.
//!
//! Credentials are optional at load time because each CLI subcommand needs a
//! different subset; the accessor methods (`collector_credentials`,
//! `table_auth`, ...) turn a missing variable into a [`ConfigError`] only
//! when the value is actually required.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Login credentials for the social-media site.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Connection details for the hosted table.
#[derive(Clone)]
pub struct TableAuth {
    pub url: String,
    pub key: String,
}

impl std::fmt::Debug for TableAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableAuth")
            .field("url", &self.url)
            .field("key", &"[redacted]")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub email: Option<String>,
    pub site_username: Option<String>,
    pub site_password: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub speech_api_url: Option<String>,
    /// HTTP request timeout applied to all hosted-service clients.
    pub request_timeout_secs: u64,
    /// How long the collector sleeps after a scroll before re-scanning.
    pub scroll_settle_ms: u64,
    /// Bounded wait for an expected page element to appear.
    pub element_wait_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("email", &self.email)
            .field("site_username", &self.site_username)
            .field("site_password", &self.site_password.as_ref().map(|_| "[redacted]"))
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &self.supabase_key.as_ref().map(|_| "[redacted]"))
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "[redacted]"))
            .field("speech_api_url", &self.speech_api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("scroll_settle_ms", &self.scroll_settle_ms)
            .field("element_wait_secs", &self.element_wait_secs)
            .finish()
    }
}

impl AppConfig {
    /// Credentials for the collector's login flow.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first of `EMAIL`,
    /// `USER`, `PASS` that is not set.
    pub fn collector_credentials(&self) -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            email: require(&self.email, "EMAIL")?,
            username: require(&self.site_username, "USER")?,
            password: require(&self.site_password, "PASS")?,
        })
    }

    /// Connection URL and access key for the hosted table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `SUPABASE_URL` or
    /// `SUPABASE_KEY` is not set.
    pub fn table_auth(&self) -> Result<TableAuth, ConfigError> {
        Ok(TableAuth {
            url: require(&self.supabase_url, "SUPABASE_URL")?,
            key: require(&self.supabase_key, "SUPABASE_KEY")?,
        })
    }

    /// API key for the hosted LLM endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `GROQ_API_KEY` is not set.
    pub fn groq_api_key(&self) -> Result<String, ConfigError> {
        require(&self.groq_api_key, "GROQ_API_KEY")
    }

    /// Base URL of the hosted speech-recognition service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `SCAMWATCH_SPEECH_API_URL`
    /// is not set.
    pub fn speech_api_url(&self) -> Result<String, ConfigError> {
        require(&self.speech_api_url, "SCAMWATCH_SPEECH_API_URL")
    }
}

fn require(value: &Option<String>, var: &str) -> Result<String, ConfigError> {
    value
        .clone()
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a tunable has an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> { lookup(var).ok() };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    Ok(AppConfig {
        email: optional("EMAIL"),
        site_username: optional("USER"),
        site_password: optional("PASS"),
        supabase_url: optional("SUPABASE_URL"),
        supabase_key: optional("SUPABASE_KEY"),
        groq_api_key: optional("GROQ_API_KEY"),
        speech_api_url: optional("SCAMWATCH_SPEECH_API_URL"),
        request_timeout_secs: parse_u64("SCAMWATCH_REQUEST_TIMEOUT_SECS", 30)?,
        scroll_settle_ms: parse_u64("SCAMWATCH_SCROLL_SETTLE_MS", 2000)?,
        element_wait_secs: parse_u64("SCAMWATCH_ELEMENT_WAIT_SECS", 10)?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
