use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::company::{CompanyExtended, CompanyProfile};
use super::engagement::EngagementTaskDTO;
use super::task::TaskWithClientDTO;
use super::user::FirmUserDTO;

/// A firm with its client relations and their tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirmDTO {
    #[serde(flatten)]
    pub company: CompanyExtended,
    pub relations: Vec<EngagementTaskDTO>,
}

/// A firm with company fields only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirmLightDTO {
    #[serde(flatten)]
    pub company: CompanyExtended,
}

/// A firm as shown on its settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirmSettingsDTO {
    #[serde(flatten)]
    pub company: CompanyExtended,
    pub users: Vec<FirmUserDTO>,
    pub tasks: Vec<TaskWithClientDTO>,
}

impl FirmDTO {
    pub fn light(&self) -> FirmLightDTO {
        FirmLightDTO::from(self.company.clone())
    }

    /// Relation to the given client, if any
    pub fn relation_for(&self, client_id: &str) -> Option<&EngagementTaskDTO> {
        self.relations
            .iter()
            .find(|relation| relation.client_id == client_id)
    }
}

impl FirmSettingsDTO {
    pub fn light(&self) -> FirmLightDTO {
        FirmLightDTO::from(self.company.clone())
    }
}

impl From<CompanyExtended> for FirmLightDTO {
    fn from(company: CompanyExtended) -> Self {
        Self { company }
    }
}

impl CompanyProfile for FirmDTO {
    fn company(&self) -> &CompanyExtended {
        &self.company
    }
}

impl CompanyProfile for FirmLightDTO {
    fn company(&self) -> &CompanyExtended {
        &self.company
    }
}

impl CompanyProfile for FirmSettingsDTO {
    fn company(&self) -> &CompanyExtended {
        &self.company
    }
}
