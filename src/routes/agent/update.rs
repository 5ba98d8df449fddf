use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::connection::{Connection, Manager};
use actix_web::{put, web, HttpResponse, Result};

#[tracing::instrument(name = "Update agent.", skip(conn))]
#[put("/updateAgent/{id}", wrap = "Manager::new()")]
pub async fn update_handler(
    mut conn: Connection,
    path: web::Path<(String,)>,
    form: web::Json<forms::agent::Update>,
) -> Result<HttpResponse> {
    let (agent_code,) = path.into_inner();
    let result = db::agent::update(&mut conn, &agent_code, form.into_inner()).await;
    conn.release();

    result
        .map(|rows_affected| {
            tracing::info!(rows_affected, "Agent {} updated", agent_code);
            HttpResponse::NoContent().finish()
        })
        .map_err(|_err| JsonResponse::build().internal_server_error(super::QUERY_ERROR))
}
