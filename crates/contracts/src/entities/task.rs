use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{ClientId, TaskId};

/// A unit of work tracked for a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDTO {
    /// Task identifier
    #[schema(value_type = String)]
    pub id: TaskId,
    /// Free-form status label, owned by the backend
    pub status: String,
    /// Free-form task kind, owned by the backend
    pub task_type: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Due date, `null` until one is set
    pub due_date: Option<DateTime<Utc>>,
    /// Archived tasks are hidden from active lists
    pub archived: bool,
    /// Whether a file is attached, `null` when unknown
    pub has_file: Option<bool>,
}

/// Task denormalised with the owning client's id and name.
///
/// Used for firm-wide task lists that would otherwise need a join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithClientDTO {
    #[schema(value_type = String)]
    pub id: TaskId,
    #[schema(value_type = String)]
    pub client_id: ClientId,
    pub client_name: String,
    pub status: String,
    pub task_type: String,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub archived: bool,
    pub has_file: Option<bool>,
}

impl TaskDTO {
    /// Attach client context to this task
    pub fn with_client(
        &self,
        client_id: impl Into<ClientId>,
        client_name: impl Into<String>,
    ) -> TaskWithClientDTO {
        TaskWithClientDTO {
            id: self.id.clone(),
            client_id: client_id.into(),
            client_name: client_name.into(),
            status: self.status.clone(),
            task_type: self.task_type.clone(),
            created_at: self.created_at,
            due_date: self.due_date,
            archived: self.archived,
            has_file: self.has_file,
        }
    }

    /// Check if a due date has been set
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }
}

impl TaskWithClientDTO {
    /// Drop the client context
    pub fn into_task(self) -> TaskDTO {
        TaskDTO {
            id: self.id,
            status: self.status,
            task_type: self.task_type,
            created_at: self.created_at,
            due_date: self.due_date,
            archived: self.archived,
            has_file: self.has_file,
        }
    }

    /// Copy of the task without the client context
    pub fn task(&self) -> TaskDTO {
        self.clone().into_task()
    }
}
