use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entry of the dashboard's recent-updates feed.
///
/// The feed mixes record types; `_type` names the collection and the
/// remaining fields are kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentItem {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RecentItem {
    /// `"<type>: <name|description|id>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let label = ["name", "description", "id"]
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default();
        format!("{}: {label}", self.kind)
    }
}
