use crate::configuration::{DatabaseSettings, Settings};
use crate::helpers::JsonResponse;
use crate::routes;
use actix_web::{dev::Server, error, web, App, HttpServer};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Nothing is opened here; connections are made on first acquire.
pub fn get_connection_pool(settings: &DatabaseSettings) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect_lazy_with(settings.connect_options())
}

pub async fn run(
    listener: TcpListener,
    pool: MySqlPool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pool = web::Data::new(pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        JsonResponse::build().bad_request(msg)
    });
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| JsonResponse::build().bad_request(err.to_string()));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/docs")
                    .service(routes::docs::docs_page)
                    .service(routes::docs::docs_document),
            )
            .service(
                web::scope("/api/v1")
                    .service(routes::agent::list_handler)
                    .service(routes::agent::add_handler)
                    .service(routes::agent::update_handler)
                    .service(routes::agent::patch_handler)
                    .service(routes::agent::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
