use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The role a user acts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Owner,
    Tenant,
}

/// An account in the system, either a property owner or a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Avatar image URL.
    pub avatar: String,
    /// Mock credential. Never exposed through API responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
