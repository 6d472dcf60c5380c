use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A renting user, always tied to exactly one property and its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image URL.
    pub avatar: String,
    /// The property this tenant rents.
    pub property_id: String,
    /// The owner of that property.
    pub owner_id: String,
    /// Mock credential. Never exposed through API responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
