//! Role universes.
//!
//! Two disjoint enumerations exist: roles a user holds inside one firm, and
//! roles in the global identity provider. They are separate types so a
//! global role can never be stored on a firm-scoped record by accident.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::ContractError;

/// Role of a user within a single firm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FirmRole {
    Owner,
    Admin,
    Employee,
}

impl FirmRole {
    pub const ALL: [FirmRole; 3] = [FirmRole::Owner, FirmRole::Admin, FirmRole::Employee];

    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            FirmRole::Owner => "OWNER",
            FirmRole::Admin => "ADMIN",
            FirmRole::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for FirmRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FirmRole {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FirmRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContractError::unknown_role("firm", s))
    }
}

impl From<FirmRole> for String {
    fn from(role: FirmRole) -> Self {
        role.as_str().to_string()
    }
}

/// Role of a user in the global identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    FirmOwner,
    FirmAdmin,
    FirmEmployee,
    Client,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::SuperAdmin,
        UserRole::FirmOwner,
        UserRole::FirmAdmin,
        UserRole::FirmEmployee,
        UserRole::Client,
    ];

    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::FirmOwner => "FIRM_OWNER",
            UserRole::FirmAdmin => "FIRM_ADMIN",
            UserRole::FirmEmployee => "FIRM_EMPLOYEE",
            UserRole::Client => "CLIENT",
        }
    }

    /// Firm-scoped counterpart of a global role, if it has one
    pub fn firm_role(&self) -> Option<FirmRole> {
        match self {
            UserRole::FirmOwner => Some(FirmRole::Owner),
            UserRole::FirmAdmin => Some(FirmRole::Admin),
            UserRole::FirmEmployee => Some(FirmRole::Employee),
            UserRole::SuperAdmin | UserRole::Client => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContractError::unknown_role("user", s))
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl From<FirmRole> for UserRole {
    fn from(role: FirmRole) -> Self {
        match role {
            FirmRole::Owner => UserRole::FirmOwner,
            FirmRole::Admin => UserRole::FirmAdmin,
            FirmRole::Employee => UserRole::FirmEmployee,
        }
    }
}
