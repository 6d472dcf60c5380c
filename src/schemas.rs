use crate::prediction::{RentPrediction, RentPredictionRequest, RentPredictor};
use crate::store::{MockStore, StoreError};
use axum::http::StatusCode;
use axum::response::Json;
use model::entities::{
    Announcement, Bill, BillStatus, BillType, Complaint, ComplaintCategory, ComplaintStatus,
    Document, PaymentMethod, PaymentStatus, Property, PropertyType, Role, RentPayment, User,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// In-memory mock data store
    pub store: MockStore,
    /// Client for the external rent-prediction model
    pub predictor: Arc<RentPredictor>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}

/// Map a store error onto the HTTP error envelope.
pub fn store_error(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::PropertyOccupied(_)
        | StoreError::PropertyVacant(_)
        | StoreError::InvalidPaymentTransition { .. }
        | StoreError::BillAlreadyPaid(_) => StatusCode::CONFLICT,
        StoreError::InvalidMonth(_) => StatusCode::BAD_REQUEST,
    };
    warn!("Store operation failed: {}", err);
    let response = ErrorResponse::new(err.to_string(), err.code());
    (status, Json(response))
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of properties in the mock store
    pub properties: usize,
    /// Whether the prediction backend has credentials configured
    pub prediction_configured: bool,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::properties::create_property,
        crate::handlers::properties::get_properties,
        crate::handlers::properties::get_property,
        crate::handlers::properties::update_property,
        crate::handlers::properties::delete_property,
        crate::handlers::tenants::create_tenant,
        crate::handlers::tenants::get_tenants,
        crate::handlers::tenants::get_tenant,
        crate::handlers::tenants::delete_tenant,
        crate::handlers::tenants::get_tenant_property,
        crate::handlers::rent_payments::request_rent,
        crate::handlers::rent_payments::get_rent_payments,
        crate::handlers::rent_payments::get_rent_payment,
        crate::handlers::rent_payments::submit_rent_payment,
        crate::handlers::rent_payments::confirm_rent_payment,
        crate::handlers::rent_payments::reject_rent_payment,
        crate::handlers::bills::create_bill,
        crate::handlers::bills::get_bills,
        crate::handlers::bills::pay_bill,
        crate::handlers::complaints::create_complaint,
        crate::handlers::complaints::get_complaints,
        crate::handlers::complaints::update_complaint_status,
        crate::handlers::announcements::create_announcement,
        crate::handlers::announcements::get_announcements,
        crate::handlers::documents::upload_document,
        crate::handlers::documents::get_documents,
        crate::handlers::documents::delete_document,
        crate::handlers::dashboard::get_owner_dashboard,
        crate::handlers::dashboard::get_tenant_dashboard,
        crate::handlers::prediction::predict_rent,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            User,
            Role,
            Property,
            PropertyType,
            RentPayment,
            PaymentStatus,
            PaymentMethod,
            Bill,
            BillStatus,
            BillType,
            Complaint,
            ComplaintStatus,
            ComplaintCategory,
            Announcement,
            Document,
            RentPredictionRequest,
            RentPrediction,
            crate::handlers::properties::CreatePropertyRequest,
            crate::handlers::properties::UpdatePropertyRequest,
            crate::handlers::tenants::CreateTenantRequest,
            crate::handlers::tenants::TenantResponse,
            crate::handlers::tenants::CreateTenantResponse,
            crate::handlers::rent_payments::RequestRentRequest,
            crate::handlers::rent_payments::SubmitPaymentRequest,
            crate::handlers::bills::CreateBillRequest,
            crate::handlers::complaints::CreateComplaintRequest,
            crate::handlers::complaints::UpdateComplaintStatusRequest,
            crate::handlers::announcements::CreateAnnouncementRequest,
            crate::handlers::documents::UploadDocumentRequest,
            crate::handlers::dashboard::OwnerDashboardResponse,
            crate::handlers::dashboard::TenantDashboardResponse,
            crate::handlers::dashboard::MonthlyRentSummary,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "properties", description = "Property CRUD endpoints"),
        (name = "tenants", description = "Tenant management endpoints"),
        (name = "rent-payments", description = "Rent payment lifecycle endpoints"),
        (name = "bills", description = "Utility bill endpoints"),
        (name = "complaints", description = "Complaint workflow endpoints"),
        (name = "announcements", description = "Owner announcement endpoints"),
        (name = "documents", description = "Tenant document endpoints"),
        (name = "dashboard", description = "Owner and tenant dashboard summaries"),
        (name = "prediction", description = "AI rent prediction endpoint"),
    ),
    info(
        title = "RentEase API",
        description = "Property rental management API - owners and tenants managing properties, rent, complaints and documents",
        version = "0.1.0",
        contact(
            name = "RentEase Team",
            email = "contact@rentease.example.com"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
