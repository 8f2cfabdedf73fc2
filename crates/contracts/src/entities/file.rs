use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::FileId;

/// File attached to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileDTO {
    #[schema(value_type = String)]
    pub id: FileId,
    pub filename: String,
    pub file_extension: String,
    pub archived: bool,
    /// Size in bytes
    pub size: u64,
}

impl FileDTO {
    /// Filename with its extension appended, unless already present
    pub fn display_name(&self) -> String {
        let ext = self.file_extension.trim_start_matches('.');
        if ext.is_empty() || self.filename.ends_with(&format!(".{ext}")) {
            self.filename.clone()
        } else {
            format!("{}.{}", self.filename, ext)
        }
    }
}
