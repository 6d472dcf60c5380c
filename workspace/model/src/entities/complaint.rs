use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplaintCategory {
    Civil,
    Maintenance,
}

/// An issue raised by a tenant against their property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Complaint {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub message: String,
    pub status: ComplaintStatus,
    pub date: DateTime<Utc>,
    pub category: ComplaintCategory,
}
