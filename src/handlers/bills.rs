use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use crate::store::StoreError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::NaiveDate;
use model::entities::{Bill, BillStatus, BillType};
use model::new_id;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for issuing a utility bill against an occupied property
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateBillRequest {
    #[validate(length(min = 1))]
    pub property_id: String,
    pub bill_type: BillType,
    /// Amount due in INR
    pub amount: Decimal,
    pub due_date: NaiveDate,
    /// Calendar month, 1-12
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
}

/// Query parameters for listing bills
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct BillQuery {
    pub tenant_id: Option<String>,
    pub property_id: Option<String>,
}

/// Issue a bill to the tenant of a property
#[utoipa::path(
    post,
    path = "/api/v1/bills",
    tag = "bills",
    request_body = CreateBillRequest,
    responses(
        (status = 201, description = "Bill created successfully", body = ApiResponse<Bill>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 409, description = "Property has no tenant", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_bill(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreateBillRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<Bill>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_bill function");
    debug!(
        "Creating {:?} bill for property {}",
        request.bill_type, request.property_id
    );

    let property = state
        .store
        .get_property(&request.property_id)
        .await
        .map_err(store_error)?;
    let tenant_id = property
        .tenant_id
        .ok_or_else(|| store_error(StoreError::PropertyVacant(request.property_id.clone())))?;

    let bill = Bill {
        id: new_id("bill"),
        property_id: request.property_id,
        tenant_id,
        bill_type: request.bill_type,
        amount: request.amount,
        status: BillStatus::Pending,
        due_date: request.due_date,
        month: request.month,
        year: request.year,
    };

    let bill = state.store.add_bill(bill).await;
    info!("Bill created successfully with ID: {}", bill.id);

    let response = ApiResponse::new(bill, "Bill created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get bills, filtered by tenant or property
#[utoipa::path(
    get,
    path = "/api/v1/bills",
    tag = "bills",
    params(BillQuery),
    responses(
        (status = 200, description = "Bills retrieved successfully", body = ApiResponse<Vec<Bill>>)
    )
)]
#[instrument]
pub async fn get_bills(
    Query(query): Query<BillQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Bill>>> {
    trace!("Entering get_bills function");

    let bills = state
        .store
        .list_bills(query.tenant_id.as_deref(), query.property_id.as_deref())
        .await;
    debug!("Retrieved {} bills", bills.len());

    Json(ApiResponse::new(bills, "Bills retrieved successfully"))
}

/// Mark a bill as paid
#[utoipa::path(
    post,
    path = "/api/v1/bills/{bill_id}/pay",
    tag = "bills",
    params(
        ("bill_id" = String, Path, description = "Bill ID"),
    ),
    responses(
        (status = 200, description = "Bill paid successfully", body = ApiResponse<Bill>),
        (status = 404, description = "Bill not found", body = ErrorResponse),
        (status = 409, description = "Bill is already paid", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn pay_bill(
    Path(bill_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Bill>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering pay_bill function for bill_id: {}", bill_id);

    let bill = state.store.pay_bill(&bill_id).await.map_err(store_error)?;

    info!("Bill {} marked as paid", bill_id);
    Ok(Json(ApiResponse::new(bill, "Bill paid successfully")))
}
