use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::company::{CompanyExtended, CompanyProfile};
use super::compliance::ComplianceFlags;
use super::file::FileDTO;
use super::task::{TaskDTO, TaskWithClientDTO};
use crate::types::RelationId;

/// A client company as seen by its firm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDTO {
    /// Shared company fields
    #[serde(flatten)]
    pub company: CompanyExtended,
    /// Identifier of the firm/client relation this view belongs to
    #[schema(value_type = String)]
    pub relation_id: RelationId,
    /// Compliance areas handled for this client
    #[serde(flatten)]
    pub compliance: ComplianceFlags,
    /// Tasks in insertion order
    pub tasks: Vec<TaskDTO>,
    /// Attached files in insertion order
    pub attachments: Vec<FileDTO>,
}

impl ClientDTO {
    pub fn new(company: CompanyExtended, relation_id: impl Into<RelationId>) -> Self {
        Self {
            company,
            relation_id: relation_id.into(),
            compliance: ComplianceFlags::default(),
            tasks: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Tasks that are not archived
    pub fn active_tasks(&self) -> impl Iterator<Item = &TaskDTO> {
        self.tasks.iter().filter(|task| !task.archived)
    }

    /// Tasks with this client's id and name attached
    pub fn tasks_with_client(&self) -> Vec<TaskWithClientDTO> {
        self.tasks
            .iter()
            .map(|task| task.with_client(self.id(), self.name()))
            .collect()
    }
}

impl CompanyProfile for ClientDTO {
    fn company(&self) -> &CompanyExtended {
        &self.company
    }
}
