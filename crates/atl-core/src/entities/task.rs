use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::EntityKind;

/// A to-do item, optionally tied to a contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub name: Option<String>,
    /// `null` and a missing key both read as not completed.
    #[serde(default)]
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
    pub contract_id: Option<i64>,
}

impl Task {
    /// Whether the task still counts as open (`completed != true`).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.completed != Some(true)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub contract_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<Option<i64>>,
}

impl Record for Task {
    const KIND: EntityKind = EntityKind::Tasks;
    type New = NewTask;
    type Update = TaskUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewTask) -> Option<&str> {
        Some(&new.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_completed_are_open() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Order fabric", "completed": null},
                {"id": 2, "name": "Measure"},
                {"id": 3, "name": "Hang drapes", "completed": false},
                {"id": 4, "name": "Deliver sofa", "completed": true}
            ]"#,
        )
        .unwrap();

        let open: Vec<i64> = tasks.iter().filter(|t| t.is_open()).map(|t| t.id).collect();
        assert_eq!(open, vec![1, 2, 3]);
        assert_eq!(tasks[0].completed, None);
    }
}
