use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::forms::agent::PatchPolicy;
use crate::helpers::JsonResponse;
use crate::middleware::connection::{Connection, Manager};
use actix_web::{patch, web, HttpResponse, Result};

#[tracing::instrument(name = "Patch agent.", skip(conn, settings))]
#[patch("/patchAgent/{id}", wrap = "Manager::new()")]
pub async fn patch_handler(
    mut conn: Connection,
    path: web::Path<(String,)>,
    form: web::Json<forms::agent::Patch>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse> {
    let (agent_code,) = path.into_inner();
    let policy = if settings.patch.ignore_falsy_values {
        PatchPolicy::IgnoreFalsy
    } else {
        PatchPolicy::Present
    };

    let assignments = form.into_inner().assignments(policy);
    if assignments.is_empty() {
        conn.release();
        return Err(JsonResponse::build().bad_request("No valid fields to update."));
    }

    let result = db::agent::patch(&mut conn, &agent_code, &assignments).await;
    conn.release();

    result
        .map(|rows_affected| {
            tracing::info!(rows_affected, "Agent {} patched", agent_code);
            HttpResponse::NoContent().finish()
        })
        .map_err(|_err| JsonResponse::build().internal_server_error(super::QUERY_ERROR))
}
