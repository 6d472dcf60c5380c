use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The kind of property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
}

/// A rentable property managed by an owner.
///
/// `tenant_id` doubles as the occupancy flag: a property with a tenant
/// assigned is occupied and cannot be deleted until the tenant is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    pub id: String,
    /// The user who owns this property.
    pub owner_id: String,
    pub title: String,
    pub address: String,
    /// Monthly rent in INR.
    pub rent: Decimal,
    pub property_type: PropertyType,
    /// The tenant currently assigned, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub image_url: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
}

impl Property {
    pub fn is_occupied(&self) -> bool {
        self.tenant_id.is_some()
    }
}
