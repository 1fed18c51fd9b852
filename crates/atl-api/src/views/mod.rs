//! Per-entity load / create / update / delete flows.
//!
//! Every flow is a sequence of awaited requests: a mutation is followed by
//! a reload of the affected collection. Nothing is updated optimistically
//! and nothing guards against double submits.

mod admin;
mod dashboard;
mod entity;
mod project_detail;

pub use admin::AdminView;
pub use dashboard::{Dashboard, DashboardSummary};
pub use entity::EntityView;
pub use project_detail::ProjectDetail;

use serde::Serialize;

/// Blocking yes/no prompt shown before destructive requests.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Adapts a closure into a [`Confirm`].
pub struct ConfirmWith<F>(pub F);

impl<F> Confirm for ConfirmWith<F>
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        (self.0)(prompt)
    }
}

/// Answers yes to every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Result of a create or import: the single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub message: String,
}

/// Status of an update or delete request. The response is not otherwise
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub id: i64,
    pub status: u16,
    pub ok: bool,
}

impl Mutation {
    fn from_response(id: i64, resp: &reqwest::Response) -> Self {
        Self {
            id,
            status: resp.status().as_u16(),
            ok: resp.status().is_success(),
        }
    }
}
