use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{CompanyId, FirmRole};

/// Identity shared by every company-like record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBase {
    #[schema(value_type = String)]
    pub id: CompanyId,
    pub name: String,
}

impl CompanyBase {
    pub fn new(id: impl Into<CompanyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Company identity plus registration and contact details.
///
/// Clients and every firm view embed this record flattened, so on the wire
/// they are plain objects carrying all of these keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyExtended {
    #[serde(flatten)]
    pub base: CompanyBase,
    /// Company registration number
    pub cvr: String,
    pub phone: String,
    pub email: String,
    /// Name of the owner
    pub owner: String,
    /// Name of the CEO
    pub ceo: String,
    pub address: String,
}

impl CompanyExtended {
    /// Create a record with identity only, contact details left blank
    pub fn new(id: impl Into<CompanyId>, name: impl Into<String>) -> Self {
        Self {
            base: CompanyBase::new(id, name),
            cvr: String::new(),
            phone: String::new(),
            email: String::new(),
            owner: String::new(),
            ceo: String::new(),
            address: String::new(),
        }
    }
}

/// Anything that satisfies the company-extended contract.
///
/// Lets code accept a client or any firm view where only the shared company
/// fields matter.
pub trait CompanyProfile {
    fn company(&self) -> &CompanyExtended;

    fn id(&self) -> &str {
        &self.company().base.id
    }

    fn name(&self) -> &str {
        &self.company().base.name
    }

    fn cvr(&self) -> &str {
        &self.company().cvr
    }

    fn phone(&self) -> &str {
        &self.company().phone
    }

    fn email(&self) -> &str {
        &self.company().email
    }

    fn owner(&self) -> &str {
        &self.company().owner
    }

    fn ceo(&self) -> &str {
        &self.company().ceo
    }

    fn address(&self) -> &str {
        &self.company().address
    }
}

impl CompanyProfile for CompanyExtended {
    fn company(&self) -> &CompanyExtended {
        self
    }
}

/// Company identity tagged with the current user's role in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirmWithRole {
    #[serde(flatten)]
    pub base: CompanyBase,
    pub role: FirmRole,
}

/// A firm the signed-in user belongs to, with their role there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyFirmDTO {
    #[serde(flatten)]
    pub firm: FirmWithRole,
}

impl MyFirmDTO {
    pub fn new(id: impl Into<CompanyId>, name: impl Into<String>, role: FirmRole) -> Self {
        Self {
            firm: FirmWithRole {
                base: CompanyBase::new(id, name),
                role,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.firm.base.id
    }

    pub fn name(&self) -> &str {
        &self.firm.base.name
    }

    pub fn role(&self) -> FirmRole {
        self.firm.role
    }
}
