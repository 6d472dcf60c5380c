use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BillType {
    Water,
    Electricity,
}

/// Bills only move Pending -> Paid; there is no confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BillStatus {
    Paid,
    Pending,
}

/// A utility bill issued against a property for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bill {
    pub id: String,
    pub property_id: String,
    pub tenant_id: String,
    pub bill_type: BillType,
    /// Amount due in INR.
    pub amount: Decimal,
    pub status: BillStatus,
    pub due_date: NaiveDate,
    /// Calendar month, 1-12.
    pub month: u32,
    pub year: i32,
}
