use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use model::entities::{Property, Tenant};
use model::new_id;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request body for adding a tenant to a vacant property
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateTenantRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// The vacant property to assign
    #[validate(length(min = 1))]
    pub property_id: String,
    #[validate(length(min = 1))]
    pub owner_id: String,
    /// Mock credential; generated by the server when omitted
    pub password: Option<String>,
    pub avatar: Option<String>,
}

/// Tenant as exposed through the API. The mock credential never leaves
/// the store except once, at creation, when it was server-generated.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TenantResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub property_id: String,
    pub owner_id: String,
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            name: tenant.name,
            email: tenant.email,
            avatar: tenant.avatar,
            property_id: tenant.property_id,
            owner_id: tenant.owner_id,
        }
    }
}

/// Creation response, carrying the generated credential when the caller
/// did not supply one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTenantResponse {
    pub tenant: TenantResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_password: Option<String>,
}

/// Query parameters for listing tenants
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TenantQuery {
    /// Restrict to one owner's tenants
    pub owner_id: Option<String>,
}

/// Add a new tenant and assign them to a property
#[utoipa::path(
    post,
    path = "/api/v1/tenants",
    tag = "tenants",
    request_body = CreateTenantRequest,
    responses(
        (status = 201, description = "Tenant created successfully", body = ApiResponse<CreateTenantResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 409, description = "Property already occupied", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_tenant(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreateTenantRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<CreateTenantResponse>>), (StatusCode, Json<ErrorResponse>)>
{
    trace!("Entering create_tenant function");
    debug!(
        "Creating tenant '{}' for property {}",
        request.name, request.property_id
    );

    let id = new_id("tenant");
    let generated_password = if request.password.is_none() {
        // Credentials handed to the owner once; not derivable afterwards.
        Some(Uuid::new_v4().simple().to_string()[..10].to_string())
    } else {
        None
    };
    let password = request.password.or_else(|| generated_password.clone());
    let avatar = request
        .avatar
        .unwrap_or_else(|| format!("https://i.pravatar.cc/150?u={}", id));

    let tenant = Tenant {
        id,
        name: request.name,
        email: request.email,
        avatar,
        property_id: request.property_id,
        owner_id: request.owner_id,
        password,
    };

    let tenant = state.store.add_tenant(tenant).await.map_err(store_error)?;
    info!("Tenant created successfully with ID: {}", tenant.id);

    let response = ApiResponse::new(
        CreateTenantResponse {
            tenant: TenantResponse::from(tenant),
            generated_password,
        },
        "Tenant created successfully",
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all tenants, optionally for one owner
#[utoipa::path(
    get,
    path = "/api/v1/tenants",
    tag = "tenants",
    params(TenantQuery),
    responses(
        (status = 200, description = "Tenants retrieved successfully", body = ApiResponse<Vec<TenantResponse>>)
    )
)]
#[instrument]
pub async fn get_tenants(
    Query(query): Query<TenantQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<TenantResponse>>> {
    trace!("Entering get_tenants function");

    let tenants: Vec<TenantResponse> = state
        .store
        .list_tenants(query.owner_id.as_deref())
        .await
        .into_iter()
        .map(TenantResponse::from)
        .collect();
    debug!("Retrieved {} tenants", tenants.len());

    Json(ApiResponse::new(tenants, "Tenants retrieved successfully"))
}

/// Get a specific tenant by ID
#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}",
    tag = "tenants",
    params(
        ("tenant_id" = String, Path, description = "Tenant ID"),
    ),
    responses(
        (status = 200, description = "Tenant retrieved successfully", body = ApiResponse<TenantResponse>),
        (status = 404, description = "Tenant not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_tenant(
    Path(tenant_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TenantResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_tenant function for tenant_id: {}", tenant_id);

    let tenant = state.store.get_tenant(&tenant_id).await.map_err(store_error)?;

    Ok(Json(ApiResponse::new(
        TenantResponse::from(tenant),
        "Tenant retrieved successfully",
    )))
}

/// Remove a tenant. Their property becomes vacant again.
#[utoipa::path(
    delete,
    path = "/api/v1/tenants/{tenant_id}",
    tag = "tenants",
    params(
        ("tenant_id" = String, Path, description = "Tenant ID"),
    ),
    responses(
        (status = 200, description = "Tenant removed successfully", body = ApiResponse<String>),
        (status = 404, description = "Tenant not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_tenant(
    Path(tenant_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering delete_tenant function for tenant_id: {}", tenant_id);

    state
        .store
        .remove_tenant(&tenant_id)
        .await
        .map_err(store_error)?;

    info!("Tenant with ID {} removed, property vacated", tenant_id);
    Ok(Json(ApiResponse::new(
        format!("Tenant {} removed", tenant_id),
        "Tenant removed successfully",
    )))
}

/// Get the property a tenant rents
#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}/property",
    tag = "tenants",
    params(
        ("tenant_id" = String, Path, description = "Tenant ID"),
    ),
    responses(
        (status = 200, description = "Property retrieved successfully", body = ApiResponse<Property>),
        (status = 404, description = "Tenant or property not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_tenant_property(
    Path(tenant_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Property>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_tenant_property function for tenant_id: {}", tenant_id);

    let property = state
        .store
        .property_for_tenant(&tenant_id)
        .await
        .map_err(store_error)?;

    Ok(Json(ApiResponse::new(
        property,
        "Property retrieved successfully",
    )))
}
