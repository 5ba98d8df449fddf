use agents_api::configuration::get_configuration;
use agents_api::startup::{get_connection_pool, run};
use agents_api::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("agents-api".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        max_connections = settings.database.max_connections,
        "Connecting to MySQL"
    );
    let pool = get_connection_pool(&settings.database);

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, pool.clone(), settings).await?.await?;

    // waits for checked out connections to come back
    tracing::info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
