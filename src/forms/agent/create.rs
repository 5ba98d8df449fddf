use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /createAgent`. Fields keep whatever JSON the caller sent;
/// missing ones are bound as NULL and left to the table constraints.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateAgent {
    pub agent_code: Option<Value>,
    pub agent_name: Option<Value>,
    pub working_area: Option<Value>,
    pub commission: Option<Value>,
    pub phone_no: Option<Value>,
    pub country: Option<Value>,
}
