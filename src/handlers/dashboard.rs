use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{
    Bill, Complaint, ComplaintStatus, PaymentStatus, Property, RentPayment,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};
use utoipa::ToSchema;

/// How many complaints the owner dashboard shows.
const RECENT_COMPLAINTS: usize = 4;

/// Paid vs pending rent totals for one month, for the overview chart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MonthlyRentSummary {
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub paid: Decimal,
    pub pending: Decimal,
}

/// Summary cards and tables for the owner dashboard.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OwnerDashboardResponse {
    pub total_properties: usize,
    pub total_tenants: usize,
    /// Rent payments still Pending
    pub unpaid_rents: usize,
    pub pending_complaints: usize,
    /// Payments submitted by tenants, awaiting confirmation
    pub awaiting_confirmation: Vec<RentPayment>,
    pub recent_complaints: Vec<Complaint>,
    /// Month-by-month paid vs pending totals
    pub rent_overview: Vec<MonthlyRentSummary>,
}

/// Summary for the tenant dashboard: their home, the next rent to pay
/// and the latest bill.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TenantDashboardResponse {
    pub property: Property,
    /// The next payable rent (Pending or Rejected), earliest due first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment: Option<RentPayment>,
    /// Most recent bill by due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_bill: Option<Bill>,
}

/// Get the owner dashboard summary
#[utoipa::path(
    get,
    path = "/api/v1/owners/{owner_id}/dashboard",
    tag = "dashboard",
    params(
        ("owner_id" = String, Path, description = "Owner user ID"),
    ),
    responses(
        (status = 200, description = "Owner dashboard retrieved successfully", body = ApiResponse<OwnerDashboardResponse>),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_owner_dashboard(
    Path(owner_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OwnerDashboardResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_owner_dashboard function for owner_id: {}", owner_id);

    state.store.get_user(&owner_id).await.map_err(store_error)?;

    let properties = state.store.list_properties(Some(&owner_id)).await;
    let tenants = state.store.list_tenants(Some(&owner_id)).await;
    let complaints = state.store.list_complaints(None, None).await;

    // All payments against this owner's properties.
    let payments: Vec<RentPayment> = {
        let mut payments = Vec::new();
        for property in &properties {
            payments.extend(
                state
                    .store
                    .list_rent_payments(None, Some(&property.id), None)
                    .await,
            );
        }
        payments
    };

    let unpaid_rents = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .count();
    let awaiting_confirmation: Vec<RentPayment> = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Processing)
        .cloned()
        .collect();

    let tenant_ids: Vec<&str> = tenants.iter().map(|t| t.id.as_str()).collect();
    let owner_complaints: Vec<&Complaint> = complaints
        .iter()
        .filter(|c| tenant_ids.contains(&c.tenant_id.as_str()))
        .collect();
    let pending_complaints = owner_complaints
        .iter()
        .filter(|c| c.status == ComplaintStatus::Pending)
        .count();
    let recent_complaints: Vec<Complaint> = owner_complaints
        .iter()
        .take(RECENT_COMPLAINTS)
        .map(|c| (*c).clone())
        .collect();

    // Group payment amounts by month for the paid/pending chart.
    let mut by_month: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    for payment in &payments {
        let entry = by_month
            .entry((payment.year, payment.month))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        if payment.status == PaymentStatus::Paid {
            entry.0 += payment.amount;
        } else {
            entry.1 += payment.amount;
        }
    }
    let rent_overview: Vec<MonthlyRentSummary> = by_month
        .into_iter()
        .map(|((year, month), (paid, pending))| MonthlyRentSummary {
            year,
            month,
            paid,
            pending,
        })
        .collect();

    debug!(
        "Owner dashboard: {} properties, {} tenants, {} unpaid rents",
        properties.len(),
        tenants.len(),
        unpaid_rents
    );

    let dashboard = OwnerDashboardResponse {
        total_properties: properties.len(),
        total_tenants: tenants.len(),
        unpaid_rents,
        pending_complaints,
        awaiting_confirmation,
        recent_complaints,
        rent_overview,
    };

    Ok(Json(ApiResponse::new(
        dashboard,
        "Owner dashboard retrieved successfully",
    )))
}

/// Get the tenant dashboard summary
#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}/dashboard",
    tag = "dashboard",
    params(
        ("tenant_id" = String, Path, description = "Tenant ID"),
    ),
    responses(
        (status = 200, description = "Tenant dashboard retrieved successfully", body = ApiResponse<TenantDashboardResponse>),
        (status = 404, description = "Tenant not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_tenant_dashboard(
    Path(tenant_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TenantDashboardResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_tenant_dashboard function for tenant_id: {}", tenant_id);

    let property = state
        .store
        .property_for_tenant(&tenant_id)
        .await
        .map_err(store_error)?;

    let mut payments = state
        .store
        .list_rent_payments(Some(&tenant_id), None, None)
        .await;
    payments.sort_by_key(|p| p.due_date);
    let next_payment = payments
        .into_iter()
        .find(|p| matches!(p.status, PaymentStatus::Pending | PaymentStatus::Rejected));

    let bills = state.store.list_bills(Some(&tenant_id), None).await;
    let recent_bill = bills.into_iter().max_by_key(|b| b.due_date);

    let dashboard = TenantDashboardResponse {
        property,
        next_payment,
        recent_bill,
    };

    Ok(Json(ApiResponse::new(
        dashboard,
        "Tenant dashboard retrieved successfully",
    )))
}
