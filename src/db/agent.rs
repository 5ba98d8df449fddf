use crate::forms::agent::{bind_text, Assignment};
use crate::{forms, models};
use sqlx::{MySql, MySqlConnection, QueryBuilder};
use tracing::Instrument;

pub async fn fetch_all(conn: &mut MySqlConnection) -> Result<Vec<models::Agent>, String> {
    let query_span = tracing::info_span!("Fetching all agents");
    sqlx::query_as::<_, models::Agent>(
        r#"
        SELECT AGENT_CODE, AGENT_NAME, WORKING_AREA, COMMISSION, PHONE_NO, COUNTRY
        FROM agents
        "#,
    )
    .fetch_all(conn)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch agents: {:?}", err);
        "Failed to fetch agents".to_string()
    })
}

pub async fn insert(conn: &mut MySqlConnection, agent: forms::agent::Create) -> Result<(), String> {
    let query_span = tracing::info_span!("Saving new agent into the database");
    sqlx::query(
        r#"
        INSERT INTO agents (AGENT_CODE, AGENT_NAME, WORKING_AREA, COMMISSION, PHONE_NO, COUNTRY)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(bind_text(&agent.agent_code))
    .bind(bind_text(&agent.agent_name))
    .bind(bind_text(&agent.working_area))
    .bind(bind_text(&agent.commission))
    .bind(bind_text(&agent.phone_no))
    .bind(bind_text(&agent.country))
    .execute(conn)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to insert agent: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Returns the number of affected rows; zero is not an error.
pub async fn update(
    conn: &mut MySqlConnection,
    agent_code: &str,
    agent: forms::agent::Update,
) -> Result<u64, String> {
    let query_span = tracing::info_span!("Updating agent", agent_code);
    sqlx::query(
        r#"
        UPDATE agents
        SET
            AGENT_NAME = ?,
            WORKING_AREA = ?,
            COMMISSION = ?,
            PHONE_NO = ?,
            COUNTRY = ?
        WHERE AGENT_CODE = ?
        "#,
    )
    .bind(bind_text(&agent.agent_name))
    .bind(bind_text(&agent.working_area))
    .bind(bind_text(&agent.commission))
    .bind(bind_text(&agent.phone_no))
    .bind(bind_text(&agent.country))
    .bind(agent_code)
    .execute(conn)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!("Failed to update agent: {:?}", err);
        "Failed to update".to_string()
    })
}

/// `UPDATE agents SET <col> = ?, ... WHERE AGENT_CODE = ?` for the given
/// assignments, identifier bound last. `assignments` must not be empty.
pub(crate) fn patch_query<'a>(
    agent_code: &'a str,
    assignments: &'a [Assignment],
) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::<MySql>::new("UPDATE agents SET ");
    let mut columns = builder.separated(", ");
    for assignment in assignments {
        columns.push(assignment.column);
        columns.push_unseparated(" = ");
        columns.push_bind_unseparated(assignment.value.as_str());
    }
    builder.push(" WHERE AGENT_CODE = ");
    builder.push_bind(agent_code);

    builder
}

pub async fn patch(
    conn: &mut MySqlConnection,
    agent_code: &str,
    assignments: &[Assignment],
) -> Result<u64, String> {
    let query_span = tracing::info_span!("Patching agent", agent_code);
    let mut builder = patch_query(agent_code, assignments);
    let result = builder
        .build()
        .execute(conn)
        .instrument(query_span)
        .await;

    result
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to patch agent: {:?}", err);
            "Failed to update".to_string()
        })
}

pub async fn delete(conn: &mut MySqlConnection, agent_code: &str) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting agent", agent_code);
    sqlx::query::<MySql>("DELETE FROM agents WHERE AGENT_CODE = ?")
        .bind(agent_code)
        .execute(conn)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to delete agent: {:?}", err);
            "Failed to delete agent".to_string()
        })
}
