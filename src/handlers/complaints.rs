use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::Utc;
use model::entities::{Complaint, ComplaintCategory, ComplaintStatus};
use model::new_id;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for a tenant submitting a complaint
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateComplaintRequest {
    #[validate(length(min = 1))]
    pub tenant_id: String,
    #[validate(length(min = 1, message = "Please enter a message."))]
    pub message: String,
    pub category: ComplaintCategory,
}

/// Request body for the owner changing a complaint's status
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateComplaintStatusRequest {
    pub status: ComplaintStatus,
}

/// Query parameters for listing complaints
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ComplaintQuery {
    pub tenant_id: Option<String>,
    pub status: Option<ComplaintStatus>,
}

/// Submit a complaint. The property is resolved from the tenant and the
/// status starts Pending with a server-side timestamp.
#[utoipa::path(
    post,
    path = "/api/v1/complaints",
    tag = "complaints",
    request_body = CreateComplaintRequest,
    responses(
        (status = 201, description = "Complaint submitted successfully", body = ApiResponse<Complaint>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Tenant not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_complaint(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreateComplaintRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<Complaint>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_complaint function");
    debug!(
        "Tenant {} submitting a {:?} complaint",
        request.tenant_id, request.category
    );

    let tenant = state
        .store
        .get_tenant(&request.tenant_id)
        .await
        .map_err(store_error)?;

    let complaint = Complaint {
        id: new_id("comp"),
        tenant_id: tenant.id,
        property_id: tenant.property_id,
        message: request.message,
        status: ComplaintStatus::Pending,
        date: Utc::now(),
        category: request.category,
    };

    let complaint = state.store.add_complaint(complaint).await;
    info!("Complaint submitted successfully with ID: {}", complaint.id);

    let response = ApiResponse::new(complaint, "Complaint submitted successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get complaints, newest first, filtered by tenant or status
#[utoipa::path(
    get,
    path = "/api/v1/complaints",
    tag = "complaints",
    params(ComplaintQuery),
    responses(
        (status = 200, description = "Complaints retrieved successfully", body = ApiResponse<Vec<Complaint>>)
    )
)]
#[instrument]
pub async fn get_complaints(
    Query(query): Query<ComplaintQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Complaint>>> {
    trace!("Entering get_complaints function");

    let complaints = state
        .store
        .list_complaints(query.tenant_id.as_deref(), query.status)
        .await;
    debug!("Retrieved {} complaints", complaints.len());

    Json(ApiResponse::new(
        complaints,
        "Complaints retrieved successfully",
    ))
}

/// Owner toggles a complaint between Pending and Resolved
#[utoipa::path(
    put,
    path = "/api/v1/complaints/{complaint_id}/status",
    tag = "complaints",
    params(
        ("complaint_id" = String, Path, description = "Complaint ID"),
    ),
    request_body = UpdateComplaintStatusRequest,
    responses(
        (status = 200, description = "Complaint status updated", body = ApiResponse<Complaint>),
        (status = 404, description = "Complaint not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_complaint_status(
    Path(complaint_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateComplaintStatusRequest>,
) -> Result<Json<ApiResponse<Complaint>>, (StatusCode, Json<ErrorResponse>)> {
    trace!(
        "Entering update_complaint_status function for complaint_id: {}",
        complaint_id
    );

    let complaint = state
        .store
        .set_complaint_status(&complaint_id, request.status)
        .await
        .map_err(store_error)?;

    info!(
        "Complaint {} status changed to {:?}",
        complaint_id, request.status
    );
    Ok(Json(ApiResponse::new(complaint, "Complaint status updated")))
}
