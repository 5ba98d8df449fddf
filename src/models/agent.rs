use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the `agents` table. Keys in JSON are the column names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Agent {
    pub agent_code: String,
    pub agent_name: String,
    pub working_area: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    pub phone_no: String,
    pub country: String,
}
