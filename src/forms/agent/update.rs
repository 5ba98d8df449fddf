use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `PUT /updateAgent/{id}`. `AGENT_CODE` is taken from the path only,
/// so it is not part of this form.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UpdateAgent {
    pub agent_name: Option<Value>,
    pub working_area: Option<Value>,
    pub commission: Option<Value>,
    pub phone_no: Option<Value>,
    pub country: Option<Value>,
}
