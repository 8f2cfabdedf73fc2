//! Shared types for the contract layer.
//!
//! Identifier aliases, the two role universes and the error type used across
//! the entity modules.

pub mod errors;
pub mod roles;

pub use errors::{ContractError, ContractResult};
pub use roles::{FirmRole, UserRole};

// Ids are opaque strings on the wire
pub type CompanyId = String;
pub type ClientId = String;
pub type FirmId = String;
pub type RelationId = String;
pub type EngagementId = String;
pub type TaskId = String;
pub type FileId = String;
pub type ChatId = String;
pub type MessageId = String;
pub type TimerId = String;
pub type UserId = String;
