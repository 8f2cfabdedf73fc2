//! # Firmdesk Contracts Crate
//!
//! This crate declares the data-transfer objects exchanged between the
//! Firmdesk frontend and backend: clients, firms, engagements, tasks, files,
//! chats, timers and users.
//!
//! ## Architecture
//!
//! - **Entities**: The wire records and the traits that group them
//! - **Types**: Id aliases, role universes and errors
//! - **Codec**: JSON encode/decode with tracing
//! - **Schema**: OpenAPI components generated from the records
//!
//! ## Usage
//!
//! ```rust
//! use firmdesk_contracts::{codec, CompanyProfile, FirmLightDTO};
//!
//! let json = r#"{"id":"f-1","name":"Ledger & Co","cvr":"87654321","phone":"",
//!     "email":"","owner":"","ceo":"","address":""}"#;
//! let firm: FirmLightDTO = codec::decode(json).unwrap();
//! assert_eq!(firm.cvr(), "87654321");
//! ```

pub mod codec;
pub mod entities;
pub mod schema;
pub mod types;

// Re-export main types for convenience
pub use entities::{
    ChatDTO, ClientDTO, CompanyBase, CompanyExtended, CompanyProfile, CompanyTimerDTO,
    ComplianceFlags, EngagementDTO, EngagementTaskDTO, FileDTO, FirmDTO, FirmLightDTO,
    FirmSettingsDTO, FirmUserDTO, FirmWithRole, KeycloakUserDTO, MessageDTO, MessageStreamDTO,
    MyFirmDTO, PermissionUserDTO, TaskDTO, TaskWithClientDTO, TimerDTO, UserBase,
};
pub use schema::ContractsDoc;
pub use types::{ContractError, ContractResult, FirmRole, UserRole};
