#![allow(dead_code)]

use agents_api::configuration::{get_configuration, DatabaseSettings, Settings};
use agents_api::models::Agent;
use agents_api::startup::{get_connection_pool, run};
use serde_json::{json, Value};
use sqlx::{Connection, Executor, MySqlConnection, MySqlPool};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub db_pool: MySqlPool,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn count_agents(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM agents")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count agents")
    }

    pub async fn fetch_agent(&self, code: &str) -> Option<Agent> {
        sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE AGENT_CODE = ?")
            .bind(code)
            .fetch_optional(&self.db_pool)
            .await
            .expect("Failed to fetch agent")
    }
}

pub fn gabriel() -> Value {
    json!({
        "AGENT_CODE": "A201",
        "AGENT_NAME": "Gabriel",
        "WORKING_AREA": "Costa Rica",
        "COMMISSION": 0.11,
        "PHONE_NO": "+1-336-454-7880",
        "COUNTRY": "Brazil"
    })
}

pub async fn start_server(pool: MySqlPool, configuration: Settings) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(listener, pool, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    address
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) if require_database() => panic!("Failed to connect to mysql: {}", err),
        Err(err) => {
            eprintln!("Skipping test: failed to connect to mysql: {}", err);
            return None;
        }
    };

    let address = start_server(db_pool.clone(), configuration).await;

    Some(TestApp { address, db_pool })
}

/// Set `TEST_REQUIRE_DATABASE=1` to turn a missing MySQL into a
/// failure instead of a skip.
pub fn require_database() -> bool {
    std::env::var("TEST_REQUIRE_DATABASE").is_ok_and(|value| !value.is_empty() && value != "0")
}

pub async fn spawn_app() -> Option<TestApp> {
    let configuration = get_configuration().expect("Failed to get configuration");
    spawn_app_with_configuration(configuration).await
}

/// Server whose pool points at a port nothing listens on.
pub async fn spawn_app_without_database() -> String {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.host = "127.0.0.1".to_string();
    configuration.database.port = 1;
    configuration.database.acquire_timeout_secs = 1;

    let pool = get_connection_pool(&configuration.database);
    start_server(pool, configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<MySqlPool, sqlx::Error> {
    let mut connection =
        MySqlConnection::connect_with(&config.connect_options_without_db()).await?;

    connection
        .execute(format!("CREATE DATABASE `{}`", config.database_name).as_str())
        .await?;

    let pool = get_connection_pool(config);
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
