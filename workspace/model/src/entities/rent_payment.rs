use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a rent payment.
///
/// The owner requests rent (`Pending`), the tenant submits a payment
/// (`Processing`), and the owner either confirms (`Paid`) or rejects
/// (`Rejected`). A rejected payment can be re-submitted by the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Processing,
    Rejected,
}

/// How the tenant paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    Cash,
}

/// A monthly rent obligation for one tenant on one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RentPayment {
    pub id: String,
    pub property_id: String,
    pub tenant_id: String,
    /// Calendar month, 1-12.
    pub month: u32,
    pub year: i32,
    /// Amount due in INR, copied from the property rent at request time.
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    /// Set when the owner confirms receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Set when the tenant submits the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}
