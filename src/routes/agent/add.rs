use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::connection::{Connection, Manager};
use actix_web::{post, web, HttpResponse, Result};

#[tracing::instrument(name = "Create agent.", skip(conn))]
#[post("/createAgent", wrap = "Manager::new()")]
pub async fn add_handler(
    mut conn: Connection,
    form: web::Json<forms::agent::Create>,
) -> Result<HttpResponse> {
    let result = db::agent::insert(&mut conn, form.into_inner()).await;
    conn.release();

    result
        .map(|_| HttpResponse::Created().finish())
        .map_err(|_err| JsonResponse::build().internal_server_error(super::QUERY_ERROR))
}
