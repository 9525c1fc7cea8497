use std::env;
use std::path::PathBuf;

use super::environment::Environment;

/// All runtime configuration, constructed once at startup and passed by
/// reference to the components that need it. Nothing reads the environment
/// after this is built.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    /// Override for the Gemini endpoint; None means the public API.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub uploads_dir: PathBuf,
    pub metadata_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Builds settings from the process environment. The Gemini API key is
    /// the one value without a default: its absence aborts startup here,
    /// before any listener binds or any request is served.
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment: Environment = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::InvalidEnvironment)?;

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
            Err(_) => 8002,
        };

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let base_url = env::var("GEMINI_BASE_URL").ok();

        let uploads_dir = env::var("UPLOADS_DIR")
            .unwrap_or_else(|_| "uploads".to_string())
            .into();
        let metadata_path = env::var("METADATA_PATH")
            .unwrap_or_else(|_| "metadata.json".to_string())
            .into();

        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let json_format = match env::var("LOG_FORMAT") {
            Ok(v) => v.to_lowercase() == "json",
            Err(_) => environment.is_prod(),
        };

        Ok(Self {
            environment,
            server: ServerSettings { host, port },
            llm: LlmSettings {
                api_key,
                model,
                base_url,
            },
            storage: StorageSettings {
                uploads_dir,
                metadata_path,
            },
            logging: LoggingSettings { level, json_format },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GEMINI_API_KEY not set. The service cannot answer queries without it.")]
    MissingApiKey,
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
    #[error("{0}")]
    InvalidEnvironment(String),
}
