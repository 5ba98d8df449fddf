use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::connection::{Connection, Manager};
use actix_web::{get, HttpResponse, Result};

#[tracing::instrument(name = "List agents.", skip(conn))]
#[get("/agents", wrap = "Manager::new()")]
pub async fn list_handler(mut conn: Connection) -> Result<HttpResponse> {
    let agents = db::agent::fetch_all(&mut conn).await;
    conn.release();

    agents
        .map(|agents| HttpResponse::Ok().json(agents))
        .map_err(|_err| JsonResponse::build().internal_server_error(super::QUERY_ERROR))
}
