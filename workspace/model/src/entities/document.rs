use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata for a file a tenant has uploaded. The file bytes themselves
/// live elsewhere; only the name and a URL are recorded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub upload_date: DateTime<Utc>,
    pub url: String,
}
