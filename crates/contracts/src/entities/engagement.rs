use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::client::ClientDTO;
use super::firm::FirmLightDTO;
use super::task::TaskDTO;
use crate::types::{ClientId, FirmId, RelationId};

/// A firm together with the clients it is engaged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngagementDTO {
    pub firm: FirmLightDTO,
    pub clients: Vec<ClientDTO>,
}

/// Task list of one firm/client engagement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngagementTaskDTO {
    #[schema(value_type = String)]
    pub id: RelationId,
    #[schema(value_type = String)]
    pub firm_id: FirmId,
    #[schema(value_type = String)]
    pub client_id: ClientId,
    /// May be empty
    pub tasks: Vec<TaskDTO>,
}

impl EngagementDTO {
    pub fn client(&self, client_id: &str) -> Option<&ClientDTO> {
        self.clients
            .iter()
            .find(|client| client.company.base.id == client_id)
    }
}

impl EngagementTaskDTO {
    pub fn new(
        id: impl Into<RelationId>,
        firm_id: impl Into<FirmId>,
        client_id: impl Into<ClientId>,
    ) -> Self {
        Self {
            id: id.into(),
            firm_id: firm_id.into(),
            client_id: client_id.into(),
            tasks: Vec::new(),
        }
    }
}
