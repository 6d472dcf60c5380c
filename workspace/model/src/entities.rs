//! This file serves as the root for all domain entity modules.
//! The records mirror the rental-management data model: plain serde
//! structs with foreign-key-style string references between them, kept
//! in the in-memory store rather than a database.

pub mod announcement;
pub mod bill;
pub mod complaint;
pub mod document;
pub mod property;
pub mod rent_payment;
pub mod tenant;
pub mod user;

pub use announcement::Announcement;
pub use bill::{Bill, BillStatus, BillType};
pub use complaint::{Complaint, ComplaintCategory, ComplaintStatus};
pub use document::Document;
pub use property::{Property, PropertyType};
pub use rent_payment::{PaymentMethod, PaymentStatus, RentPayment};
pub use tenant::Tenant;
pub use user::{Role, User};
