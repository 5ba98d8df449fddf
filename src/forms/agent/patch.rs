use super::value::{is_falsy, sql_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `PATCH /patchAgent/{id}`. A field counts as sent when it is present
/// and not `null`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PatchAgent {
    pub agent_name: Option<Value>,
    pub working_area: Option<Value>,
    pub commission: Option<Value>,
    pub phone_no: Option<Value>,
    pub country: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchPolicy {
    /// Apply every field that was sent.
    #[default]
    Present,
    /// Also drop `""`, `0` and `false`, like older clients expect.
    IgnoreFalsy,
}

/// `column = value` pair of a partial update, value as bound to the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: &'static str,
    pub value: String,
}

impl PatchAgent {
    /// Assignments in column order name, area, commission, phone, country.
    pub fn assignments(self, policy: PatchPolicy) -> Vec<Assignment> {
        let fields = [
            ("AGENT_NAME", self.agent_name),
            ("WORKING_AREA", self.working_area),
            ("COMMISSION", self.commission),
            ("PHONE_NO", self.phone_no),
            ("COUNTRY", self.country),
        ];

        fields
            .into_iter()
            .filter_map(|(column, value)| value.map(|value| (column, value)))
            .filter(|(_, value)| policy == PatchPolicy::Present || !is_falsy(value))
            .filter_map(|(column, value)| {
                sql_text(&value).map(|value| Assignment { column, value })
            })
            .collect()
    }
}
