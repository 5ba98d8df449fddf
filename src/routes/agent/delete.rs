use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::connection::{Connection, Manager};
use actix_web::{delete, web, HttpResponse, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: String,
}

#[tracing::instrument(name = "Delete agent.", skip(conn))]
#[delete("/deleteAgent", wrap = "Manager::new()")]
pub async fn delete_handler(
    mut conn: Connection,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse> {
    let agent_code = query.into_inner().id;
    let result = db::agent::delete(&mut conn, &agent_code).await;
    conn.release();

    result
        .map(|rows_affected| {
            tracing::info!(rows_affected, "Agent {} deleted", agent_code);
            HttpResponse::NoContent().finish()
        })
        .map_err(|_err| JsonResponse::build().internal_server_error(super::QUERY_ERROR))
}
