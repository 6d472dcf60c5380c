use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use model::entities::{PaymentMethod, PaymentStatus, RentPayment};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for an owner requesting a month's rent
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct RequestRentRequest {
    #[validate(length(min = 1))]
    pub property_id: String,
    /// Calendar month, 1-12
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
}

/// Request body for a tenant submitting a payment
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubmitPaymentRequest {
    pub payment_method: PaymentMethod,
}

/// Query parameters for listing rent payments
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RentPaymentQuery {
    pub tenant_id: Option<String>,
    pub property_id: Option<String>,
    pub status: Option<PaymentStatus>,
}

/// Request rent for a month. Creates a Pending payment due on the 5th.
#[utoipa::path(
    post,
    path = "/api/v1/rent-payments",
    tag = "rent-payments",
    request_body = RequestRentRequest,
    responses(
        (status = 201, description = "Rent requested successfully", body = ApiResponse<RentPayment>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 409, description = "Property has no tenant", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn request_rent(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<RequestRentRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<RentPayment>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering request_rent function");
    debug!(
        "Requesting rent for property {} ({}/{})",
        request.property_id, request.month, request.year
    );

    let payment = state
        .store
        .request_rent(&request.property_id, request.month, request.year)
        .await
        .map_err(store_error)?;

    info!(
        "Rent requested: payment {} for tenant {} due {}",
        payment.id, payment.tenant_id, payment.due_date
    );
    let response = ApiResponse::new(payment, "Rent requested successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get rent payments, filtered by tenant, property or status
#[utoipa::path(
    get,
    path = "/api/v1/rent-payments",
    tag = "rent-payments",
    params(RentPaymentQuery),
    responses(
        (status = 200, description = "Rent payments retrieved successfully", body = ApiResponse<Vec<RentPayment>>)
    )
)]
#[instrument]
pub async fn get_rent_payments(
    Query(query): Query<RentPaymentQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<RentPayment>>> {
    trace!("Entering get_rent_payments function");

    let payments = state
        .store
        .list_rent_payments(
            query.tenant_id.as_deref(),
            query.property_id.as_deref(),
            query.status,
        )
        .await;
    debug!("Retrieved {} rent payments", payments.len());

    Json(ApiResponse::new(
        payments,
        "Rent payments retrieved successfully",
    ))
}

/// Get a specific rent payment by ID
#[utoipa::path(
    get,
    path = "/api/v1/rent-payments/{payment_id}",
    tag = "rent-payments",
    params(
        ("payment_id" = String, Path, description = "Rent payment ID"),
    ),
    responses(
        (status = 200, description = "Rent payment retrieved successfully", body = ApiResponse<RentPayment>),
        (status = 404, description = "Rent payment not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_rent_payment(
    Path(payment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RentPayment>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_rent_payment function for payment_id: {}", payment_id);

    let payment = state
        .store
        .get_rent_payment(&payment_id)
        .await
        .map_err(store_error)?;

    Ok(Json(ApiResponse::new(
        payment,
        "Rent payment retrieved successfully",
    )))
}

/// Tenant submits a payment with a method; the owner must then confirm.
#[utoipa::path(
    post,
    path = "/api/v1/rent-payments/{payment_id}/pay",
    tag = "rent-payments",
    params(
        ("payment_id" = String, Path, description = "Rent payment ID"),
    ),
    request_body = SubmitPaymentRequest,
    responses(
        (status = 200, description = "Payment submitted for confirmation", body = ApiResponse<RentPayment>),
        (status = 404, description = "Rent payment not found", body = ErrorResponse),
        (status = 409, description = "Payment is not payable in its current status", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn submit_rent_payment(
    Path(payment_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<SubmitPaymentRequest>,
) -> Result<Json<ApiResponse<RentPayment>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering submit_rent_payment function for payment_id: {}", payment_id);

    let payment = state
        .store
        .submit_payment(&payment_id, request.payment_method)
        .await
        .map_err(store_error)?;

    info!(
        "Payment {} submitted via {:?}, awaiting owner confirmation",
        payment_id, request.payment_method
    );
    Ok(Json(ApiResponse::new(
        payment,
        "Payment submitted for confirmation",
    )))
}

/// Owner confirms receipt: the payment becomes Paid with today's date.
#[utoipa::path(
    post,
    path = "/api/v1/rent-payments/{payment_id}/confirm",
    tag = "rent-payments",
    params(
        ("payment_id" = String, Path, description = "Rent payment ID"),
    ),
    responses(
        (status = 200, description = "Payment confirmed", body = ApiResponse<RentPayment>),
        (status = 404, description = "Rent payment not found", body = ErrorResponse),
        (status = 409, description = "Payment is not awaiting confirmation", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn confirm_rent_payment(
    Path(payment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RentPayment>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering confirm_rent_payment function for payment_id: {}", payment_id);

    let payment = state
        .store
        .confirm_payment(&payment_id)
        .await
        .map_err(store_error)?;

    info!("Payment {} confirmed as paid", payment_id);
    Ok(Json(ApiResponse::new(payment, "Payment confirmed")))
}

/// Owner rejects a submitted payment; the tenant can submit again.
#[utoipa::path(
    post,
    path = "/api/v1/rent-payments/{payment_id}/reject",
    tag = "rent-payments",
    params(
        ("payment_id" = String, Path, description = "Rent payment ID"),
    ),
    responses(
        (status = 200, description = "Payment rejected", body = ApiResponse<RentPayment>),
        (status = 404, description = "Rent payment not found", body = ErrorResponse),
        (status = 409, description = "Payment is not awaiting confirmation", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn reject_rent_payment(
    Path(payment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RentPayment>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering reject_rent_payment function for payment_id: {}", payment_id);

    let payment = state
        .store
        .reject_payment(&payment_id)
        .await
        .map_err(store_error)?;

    info!("Payment {} rejected, tenant may resubmit", payment_id);
    Ok(Json(ApiResponse::new(payment, "Payment rejected")))
}
