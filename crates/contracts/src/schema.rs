//! OpenAPI description of the wire contracts.

use utoipa::OpenApi;

use crate::types::{ContractError, ContractResult};

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            crate::types::FirmRole,
            crate::types::UserRole,
            crate::entities::CompanyBase,
            crate::entities::CompanyExtended,
            crate::entities::FirmWithRole,
            crate::entities::MyFirmDTO,
            crate::entities::ComplianceFlags,
            crate::entities::ClientDTO,
            crate::entities::FirmDTO,
            crate::entities::FirmLightDTO,
            crate::entities::FirmSettingsDTO,
            crate::entities::EngagementDTO,
            crate::entities::EngagementTaskDTO,
            crate::entities::TaskDTO,
            crate::entities::TaskWithClientDTO,
            crate::entities::FileDTO,
            crate::entities::MessageDTO,
            crate::entities::ChatDTO,
            crate::entities::MessageStreamDTO,
            crate::entities::TimerDTO,
            crate::entities::CompanyTimerDTO,
            crate::entities::FirmUserDTO,
            crate::entities::KeycloakUserDTO,
            crate::entities::PermissionUserDTO
        )
    ),
    tags(
        (name = "Companies", description = "Clients, firms and engagements"),
        (name = "Tasks", description = "Tasks and attached files"),
        (name = "Chats", description = "Engagement chats and live message events"),
        (name = "Timers", description = "Time tracking per company"),
        (name = "Users", description = "Firm users, identity provider users and permissions")
    )
)]
pub struct ContractsDoc;

/// Build the document with the given info block
pub fn openapi(
    title: &str,
    version: &str,
    description: Option<&str>,
) -> utoipa::openapi::OpenApi {
    let mut doc = ContractsDoc::openapi();
    doc.info.title = title.to_string();
    doc.info.version = version.to_string();
    doc.info.description = description.map(str::to_string);
    doc
}

/// Render a document as JSON
pub fn render(doc: &utoipa::openapi::OpenApi, pretty: bool) -> ContractResult<String> {
    let rendered = if pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    };
    rendered.map_err(|err| ContractError::schema(format!("failed to render OpenAPI document: {err}")))
}

/// Build and render the document in one step
pub fn openapi_json(
    title: &str,
    version: &str,
    description: Option<&str>,
    pretty: bool,
) -> ContractResult<String> {
    render(&openapi(title, version, description), pretty)
}

/// Names of all schema components, sorted
pub fn component_names() -> Vec<String> {
    ContractsDoc::openapi()
        .components
        .map(|components| components.schemas.into_keys().collect())
        .unwrap_or_default()
}
