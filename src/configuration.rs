use sqlx::mysql::MySqlConnectOptions;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub docs: DocsSettings,
    #[serde(default)]
    pub patch: PatchSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

/// Values published in the generated API document.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct DocsSettings {
    pub title: String,
    pub version: String,
    pub description: String,
    pub host: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PatchSettings {
    /// Treat `""` and `0` in a partial update as if the field was not sent.
    #[serde(default)]
    pub ignore_falsy_values: bool,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            title: "Agents related API".to_string(),
            version: "1.0.0".to_string(),
            description: "Agents related API Information".to_string(),
            host: None,
        }
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        self.connect_options_without_db()
            .database(&self.database_name)
    }

    // Used to create the database itself, e.g. in tests
    pub fn connect_options_without_db(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml first, then APP_* variables, e.g. APP_DATABASE__HOST
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
