use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use model::entities::{Property, PropertyType};
use model::new_id;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for adding a property
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreatePropertyRequest {
    /// Owner of the new property
    #[validate(length(min = 1))]
    pub owner_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub address: String,
    /// Monthly rent in INR
    pub rent: Decimal,
    pub property_type: PropertyType,
    /// Defaults to a placeholder image when omitted
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    pub bedrooms: u32,
    #[validate(range(min = 1))]
    pub bathrooms: u32,
    #[validate(range(min = 100))]
    pub square_footage: u32,
}

/// Request body for updating a property. Only provided fields change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub address: Option<String>,
    pub rent: Option<Decimal>,
    pub property_type: Option<PropertyType>,
    pub image_url: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub square_footage: Option<u32>,
}

/// Query parameters for listing properties
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PropertyQuery {
    /// Restrict to one owner's properties
    pub owner_id: Option<String>,
}

/// Add a new property
#[utoipa::path(
    post,
    path = "/api/v1/properties",
    tag = "properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property created successfully", body = ApiResponse<Property>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_property(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreatePropertyRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<Property>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_property function");
    debug!("Creating property '{}' for owner {}", request.title, request.owner_id);

    // The owner must be a known user.
    state
        .store
        .get_user(&request.owner_id)
        .await
        .map_err(store_error)?;

    let id = new_id("prop");
    let image_url = request
        .image_url
        .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/800/600", id));
    let property = Property {
        id,
        owner_id: request.owner_id,
        title: request.title,
        address: request.address,
        rent: request.rent,
        property_type: request.property_type,
        tenant_id: None,
        image_url,
        bedrooms: request.bedrooms,
        bathrooms: request.bathrooms,
        square_footage: request.square_footage,
    };

    let property = state.store.add_property(property).await;
    info!("Property created successfully with ID: {}", property.id);

    let response = ApiResponse::new(property, "Property created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all properties, optionally for one owner
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    tag = "properties",
    params(PropertyQuery),
    responses(
        (status = 200, description = "Properties retrieved successfully", body = ApiResponse<Vec<Property>>)
    )
)]
#[instrument]
pub async fn get_properties(
    Query(query): Query<PropertyQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Property>>> {
    trace!("Entering get_properties function");

    let properties = state.store.list_properties(query.owner_id.as_deref()).await;
    debug!("Retrieved {} properties", properties.len());

    Json(ApiResponse::new(
        properties,
        "Properties retrieved successfully",
    ))
}

/// Get a specific property by ID
#[utoipa::path(
    get,
    path = "/api/v1/properties/{property_id}",
    tag = "properties",
    params(
        ("property_id" = String, Path, description = "Property ID"),
    ),
    responses(
        (status = 200, description = "Property retrieved successfully", body = ApiResponse<Property>),
        (status = 404, description = "Property not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Property>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_property function for property_id: {}", property_id);

    let property = state
        .store
        .get_property(&property_id)
        .await
        .map_err(store_error)?;

    Ok(Json(ApiResponse::new(
        property,
        "Property retrieved successfully",
    )))
}

/// Update a property
#[utoipa::path(
    put,
    path = "/api/v1/properties/{property_id}",
    tag = "properties",
    params(
        ("property_id" = String, Path, description = "Property ID"),
    ),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Property updated successfully", body = ApiResponse<Property>),
        (status = 404, description = "Property not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering update_property function for property_id: {}", property_id);

    let property = state
        .store
        .update_property(&property_id, |property| {
            if let Some(title) = request.title {
                property.title = title;
            }
            if let Some(address) = request.address {
                property.address = address;
            }
            if let Some(rent) = request.rent {
                property.rent = rent;
            }
            if let Some(property_type) = request.property_type {
                property.property_type = property_type;
            }
            if let Some(image_url) = request.image_url {
                property.image_url = image_url;
            }
            if let Some(bedrooms) = request.bedrooms {
                property.bedrooms = bedrooms;
            }
            if let Some(bathrooms) = request.bathrooms {
                property.bathrooms = bathrooms;
            }
            if let Some(square_footage) = request.square_footage {
                property.square_footage = square_footage;
            }
        })
        .await
        .map_err(store_error)?;

    info!("Property with ID {} updated successfully", property_id);
    Ok(Json(ApiResponse::new(
        property,
        "Property updated successfully",
    )))
}

/// Delete a property. Occupied properties cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/v1/properties/{property_id}",
    tag = "properties",
    params(
        ("property_id" = String, Path, description = "Property ID"),
    ),
    responses(
        (status = 200, description = "Property deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 409, description = "Property is occupied", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_property(
    Path(property_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering delete_property function for property_id: {}", property_id);

    state
        .store
        .delete_property(&property_id)
        .await
        .map_err(store_error)?;

    info!("Property with ID {} deleted successfully", property_id);
    Ok(Json(ApiResponse::new(
        format!("Property {} deleted", property_id),
        "Property deleted successfully",
    )))
}
