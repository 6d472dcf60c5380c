use crate::schemas::{ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use chrono::Utc;
use model::entities::Announcement;
use model::new_id;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for broadcasting an announcement to all tenants
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, message = "Announcement message cannot be empty."))]
    pub message: String,
}

/// Broadcast an announcement
#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    tag = "announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement sent successfully", body = ApiResponse<Announcement>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn create_announcement(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreateAnnouncementRequest>>,
) -> (StatusCode, Json<ApiResponse<Announcement>>) {
    trace!("Entering create_announcement function");

    let announcement = Announcement {
        id: new_id("anno"),
        message: request.message,
        date: Utc::now(),
    };

    let announcement = state.store.add_announcement(announcement).await;
    info!("Announcement sent with ID: {}", announcement.id);

    let response = ApiResponse::new(announcement, "Announcement sent successfully");
    (StatusCode::CREATED, Json(response))
}

/// Get all announcements, newest first
#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    tag = "announcements",
    responses(
        (status = 200, description = "Announcements retrieved successfully", body = ApiResponse<Vec<Announcement>>)
    )
)]
#[instrument]
pub async fn get_announcements(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Announcement>>> {
    trace!("Entering get_announcements function");

    let announcements = state.store.list_announcements().await;
    debug!("Retrieved {} announcements", announcements.len());

    Json(ApiResponse::new(
        announcements,
        "Announcements retrieved successfully",
    ))
}
