use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::compliance::ComplianceFlags;
use crate::types::{FirmRole, UserId, UserRole};

/// Identity fields shared by every user record, generic over the role
/// universe the record draws from.
pub trait UserBase {
    type Role: Copy;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn username(&self) -> &str;
    fn role(&self) -> Self::Role;
}

/// A user as a member of one firm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirmUserDTO {
    #[schema(value_type = String)]
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub role: FirmRole,
}

/// A user as known to the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakUserDTO {
    #[schema(value_type = String)]
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub role: UserRole,
}

/// Firm user together with the compliance areas they may work on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionUserDTO {
    #[serde(flatten)]
    pub user: FirmUserDTO,
    #[serde(flatten)]
    pub compliance: ComplianceFlags,
}

impl FirmUserDTO {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        username: impl Into<String>,
        role: FirmRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            role,
        }
    }
}

impl KeycloakUserDTO {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        username: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            role,
        }
    }

    /// Same user in the firm role universe, if the global role maps onto one
    pub fn firm_user(&self) -> Option<FirmUserDTO> {
        self.role.firm_role().map(|role| FirmUserDTO {
            id: self.id.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
            role,
        })
    }
}

impl PermissionUserDTO {
    pub fn new(user: FirmUserDTO, compliance: ComplianceFlags) -> Self {
        Self { user, compliance }
    }

    pub fn user(&self) -> &FirmUserDTO {
        &self.user
    }
}

impl UserBase for FirmUserDTO {
    type Role = FirmRole;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn role(&self) -> FirmRole {
        self.role
    }
}

impl UserBase for KeycloakUserDTO {
    type Role = UserRole;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn role(&self) -> UserRole {
        self.role
    }
}

impl UserBase for PermissionUserDTO {
    type Role = FirmRole;

    fn id(&self) -> &str {
        &self.user.id
    }

    fn name(&self) -> &str {
        &self.user.name
    }

    fn username(&self) -> &str {
        &self.user.username
    }

    fn role(&self) -> FirmRole {
        self.user.role
    }
}
