//! Wire records for the Firmdesk domain.
//!
//! These are snapshots produced by the backend and rendered by the frontend.
//! Record extension is expressed by embedding the base record with
//! `#[serde(flatten)]`, which keeps every object flat on the wire.

pub mod chat;
pub mod client;
pub mod company;
pub mod compliance;
pub mod engagement;
pub mod file;
pub mod firm;
pub mod task;
pub mod timer;
pub mod user;

// Re-export all entity types
pub use chat::{ChatDTO, MessageDTO, MessageStreamDTO};
pub use client::ClientDTO;
pub use company::{CompanyBase, CompanyExtended, CompanyProfile, FirmWithRole, MyFirmDTO};
pub use compliance::ComplianceFlags;
pub use engagement::{EngagementDTO, EngagementTaskDTO};
pub use file::FileDTO;
pub use firm::{FirmDTO, FirmLightDTO, FirmSettingsDTO};
pub use task::{TaskDTO, TaskWithClientDTO};
pub use timer::{CompanyTimerDTO, TimerDTO};
pub use user::{FirmUserDTO, KeycloakUserDTO, PermissionUserDTO, UserBase};
