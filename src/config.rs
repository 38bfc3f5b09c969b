use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: Option<String>,
    pub run_migrations: bool,
    /// Lower-cased; the first entry receives contact messages.
    pub admin_emails: Vec<String>,
    pub firebase_project_id: String,
    pub firebase_service_account_json: Option<String>,
    pub storage_bucket: String,
    pub cors_allowed_origins: Vec<String>,
    pub version_file: PathBuf,
    pub exchange_rate_api_url: String,
    pub geolocation_api_url: String,
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => 5000,
        };

        let run_migrations = match get("RUN_MIGRATIONS").as_deref().map(str::trim) {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RUN_MIGRATIONS",
                    reason: format!("expected true or false, got '{other}'"),
                })
            }
        };

        let admin_emails: Vec<String> = split_list(&require("ADMIN_EMAILS")?)
            .into_iter()
            .map(|e| e.to_lowercase())
            .collect();
        if admin_emails.is_empty() {
            return Err(ConfigError::Missing("ADMIN_EMAILS"));
        }

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(|| vec!["http://localhost:5173".to_string()]);

        let smtp = match (
            get("SMTP_SERVER"),
            get("SMTP_USERNAME"),
            get("SMTP_PASSWORD"),
            get("EMAIL_FROM"),
        ) {
            (Some(server), Some(username), Some(password), Some(from)) => Some(SmtpConfig {
                server,
                username,
                password,
                from,
            }),
            (None, None, None, _) => None,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "SMTP_SERVER",
                    reason: "SMTP_SERVER, SMTP_USERNAME, SMTP_PASSWORD and EMAIL_FROM must be set together"
                        .to_string(),
                })
            }
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: require("DATABASE_URL")?,
            redis_url: get("REDIS_URL"),
            run_migrations,
            admin_emails,
            firebase_project_id: require("FIREBASE_PROJECT_ID")?,
            firebase_service_account_json: get("FIREBASE_SERVICE_ACCOUNT_JSON"),
            storage_bucket: require("STORAGE_BUCKET")?,
            cors_allowed_origins,
            version_file: PathBuf::from(
                get("VERSION_FILE").unwrap_or_else(|| "version.json".to_string()),
            ),
            exchange_rate_api_url: get("EXCHANGE_RATE_API_URL").unwrap_or_else(|| {
                "https://api.exchangerate-api.com/v4/latest/USD".to_string()
            }),
            geolocation_api_url: get("GEOLOCATION_API_URL")
                .unwrap_or_else(|| "https://ipapi.co".to_string()),
            smtp,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn primary_admin_email(&self) -> &str {
        // from_lookup rejects an empty list
        &self.admin_emails[0]
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
