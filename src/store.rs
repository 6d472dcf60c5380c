//! In-memory mock data store.
//!
//! The persistence layer is a set of shared vectors behind `tokio` RwLocks,
//! one per entity, matching the original system's mock arrays. Lookups are
//! linear scans by id. The store owns the CRUD invariants that the HTTP
//! handlers rely on: occupancy checks, the rent payment lifecycle and the
//! tenant/property assignment linkage.

use chrono::{NaiveDate, Utc};
use model::entities::{
    Announcement, Bill, BillStatus, Complaint, ComplaintStatus, Document, PaymentMethod,
    PaymentStatus, Property, RentPayment, Tenant, User,
};
use model::new_id;
use model::seed::SeedData;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    #[error("property '{0}' still has a tenant assigned")]
    PropertyOccupied(String),
    #[error("property '{0}' has no tenant assigned")]
    PropertyVacant(String),
    #[error("rent payment '{id}' cannot move from {from:?} to {to:?}")]
    InvalidPaymentTransition {
        id: String,
        from: PaymentStatus,
        to: PaymentStatus,
    },
    #[error("bill '{0}' is already paid")]
    BillAlreadyPaid(String),
    #[error("no calendar month {0}")]
    InvalidMonth(u32),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable machine-readable code for the API error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::PropertyOccupied(_) => "PROPERTY_OCCUPIED",
            Self::PropertyVacant(_) => "PROPERTY_VACANT",
            Self::InvalidPaymentTransition { .. } => "INVALID_PAYMENT_TRANSITION",
            Self::BillAlreadyPaid(_) => "BILL_ALREADY_PAID",
            Self::InvalidMonth(_) => "INVALID_MONTH",
        }
    }
}

#[derive(Debug, Default)]
struct Collections {
    users: RwLock<Vec<User>>,
    properties: RwLock<Vec<Property>>,
    tenants: RwLock<Vec<Tenant>>,
    rent_payments: RwLock<Vec<RentPayment>>,
    bills: RwLock<Vec<Bill>>,
    complaints: RwLock<Vec<Complaint>>,
    announcements: RwLock<Vec<Announcement>>,
    documents: RwLock<Vec<Document>>,
}

/// Cloneable handle to the shared collections.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: Arc<Collections>,
}

impl MockStore {
    /// An empty store with no records at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store populated with the demo data set.
    pub fn demo() -> Self {
        Self::from_seed(model::seed::demo_data())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            inner: Arc::new(Collections {
                users: RwLock::new(seed.users),
                properties: RwLock::new(seed.properties),
                tenants: RwLock::new(seed.tenants),
                rent_payments: RwLock::new(seed.rent_payments),
                bills: RwLock::new(seed.bills),
                complaints: RwLock::new(seed.complaints),
                announcements: RwLock::new(seed.announcements),
                documents: RwLock::new(seed.documents),
            }),
        }
    }

    // --- users ---

    pub async fn get_user(&self, id: &str) -> Result<User, StoreError> {
        self.inner
            .users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    // --- properties ---

    pub async fn list_properties(&self, owner_id: Option<&str>) -> Vec<Property> {
        self.inner
            .properties
            .read()
            .await
            .iter()
            .filter(|p| owner_id.is_none_or(|o| p.owner_id == o))
            .cloned()
            .collect()
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, StoreError> {
        self.inner
            .properties
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("property", id))
    }

    pub async fn add_property(&self, property: Property) -> Property {
        let mut properties = self.inner.properties.write().await;
        properties.push(property.clone());
        property
    }

    pub async fn update_property<F>(&self, id: &str, apply: F) -> Result<Property, StoreError>
    where
        F: FnOnce(&mut Property),
    {
        let mut properties = self.inner.properties.write().await;
        let property = properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("property", id))?;
        apply(property);
        Ok(property.clone())
    }

    /// Delete a property. Rejected while a tenant is still assigned.
    pub async fn delete_property(&self, id: &str) -> Result<(), StoreError> {
        let mut properties = self.inner.properties.write().await;
        let index = properties
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("property", id))?;
        if properties[index].is_occupied() {
            return Err(StoreError::PropertyOccupied(id.to_string()));
        }
        properties.remove(index);
        Ok(())
    }

    // --- tenants ---

    pub async fn list_tenants(&self, owner_id: Option<&str>) -> Vec<Tenant> {
        self.inner
            .tenants
            .read()
            .await
            .iter()
            .filter(|t| owner_id.is_none_or(|o| t.owner_id == o))
            .cloned()
            .collect()
    }

    pub async fn get_tenant(&self, id: &str) -> Result<Tenant, StoreError> {
        self.inner
            .tenants
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("tenant", id))
    }

    /// Add a tenant and assign them to their property in one step.
    ///
    /// The property must exist and be vacant; its `tenant_id` is set
    /// under the same write lock that inserts the tenant.
    pub async fn add_tenant(&self, tenant: Tenant) -> Result<Tenant, StoreError> {
        let mut properties = self.inner.properties.write().await;
        let mut tenants = self.inner.tenants.write().await;

        let property = properties
            .iter_mut()
            .find(|p| p.id == tenant.property_id)
            .ok_or_else(|| StoreError::not_found("property", tenant.property_id.clone()))?;
        if property.is_occupied() {
            return Err(StoreError::PropertyOccupied(property.id.clone()));
        }
        property.tenant_id = Some(tenant.id.clone());
        tenants.push(tenant.clone());
        Ok(tenant)
    }

    /// Remove a tenant and vacate their property.
    pub async fn remove_tenant(&self, id: &str) -> Result<(), StoreError> {
        let mut properties = self.inner.properties.write().await;
        let mut tenants = self.inner.tenants.write().await;

        let index = tenants
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("tenant", id))?;
        let tenant = tenants.remove(index);
        if let Some(property) = properties.iter_mut().find(|p| p.id == tenant.property_id) {
            property.tenant_id = None;
        }
        Ok(())
    }

    pub async fn property_for_tenant(&self, tenant_id: &str) -> Result<Property, StoreError> {
        let tenant = self.get_tenant(tenant_id).await?;
        self.get_property(&tenant.property_id).await
    }

    // --- rent payments ---

    /// Owner requests rent for a month: creates a Pending payment with the
    /// property's current rent, due on the 5th of that month.
    pub async fn request_rent(
        &self,
        property_id: &str,
        month: u32,
        year: i32,
    ) -> Result<RentPayment, StoreError> {
        let due_date =
            NaiveDate::from_ymd_opt(year, month, 5).ok_or(StoreError::InvalidMonth(month))?;
        let property = self.get_property(property_id).await?;
        let tenant_id = property
            .tenant_id
            .clone()
            .ok_or_else(|| StoreError::PropertyVacant(property_id.to_string()))?;

        let payment = RentPayment {
            id: new_id("rent"),
            property_id: property.id,
            tenant_id,
            month,
            year,
            amount: property.rent,
            status: PaymentStatus::Pending,
            due_date,
            payment_date: None,
            payment_method: None,
        };
        let mut payments = self.inner.rent_payments.write().await;
        payments.push(payment.clone());
        Ok(payment)
    }

    pub async fn list_rent_payments(
        &self,
        tenant_id: Option<&str>,
        property_id: Option<&str>,
        status: Option<PaymentStatus>,
    ) -> Vec<RentPayment> {
        self.inner
            .rent_payments
            .read()
            .await
            .iter()
            .filter(|p| tenant_id.is_none_or(|t| p.tenant_id == t))
            .filter(|p| property_id.is_none_or(|pr| p.property_id == pr))
            .filter(|p| status.is_none_or(|s| p.status == s))
            .cloned()
            .collect()
    }

    pub async fn get_rent_payment(&self, id: &str) -> Result<RentPayment, StoreError> {
        self.inner
            .rent_payments
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("rent payment", id))
    }

    /// Tenant submits a payment: Pending or Rejected moves to Processing.
    pub async fn submit_payment(
        &self,
        id: &str,
        method: PaymentMethod,
    ) -> Result<RentPayment, StoreError> {
        self.transition_payment(
            id,
            PaymentStatus::Processing,
            &[PaymentStatus::Pending, PaymentStatus::Rejected],
            |payment| payment.payment_method = Some(method),
        )
        .await
    }

    /// Owner confirms a submitted payment: Processing moves to Paid and the
    /// payment date is recorded.
    pub async fn confirm_payment(&self, id: &str) -> Result<RentPayment, StoreError> {
        self.transition_payment(
            id,
            PaymentStatus::Paid,
            &[PaymentStatus::Processing],
            |payment| payment.payment_date = Some(Utc::now().date_naive()),
        )
        .await
    }

    /// Owner rejects a submitted payment: Processing moves to Rejected, from
    /// where the tenant can submit again.
    pub async fn reject_payment(&self, id: &str) -> Result<RentPayment, StoreError> {
        self.transition_payment(
            id,
            PaymentStatus::Rejected,
            &[PaymentStatus::Processing],
            |_| {},
        )
        .await
    }

    async fn transition_payment<F>(
        &self,
        id: &str,
        to: PaymentStatus,
        allowed_from: &[PaymentStatus],
        apply: F,
    ) -> Result<RentPayment, StoreError>
    where
        F: FnOnce(&mut RentPayment),
    {
        let mut payments = self.inner.rent_payments.write().await;
        let payment = payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("rent payment", id))?;
        if !allowed_from.contains(&payment.status) {
            return Err(StoreError::InvalidPaymentTransition {
                id: id.to_string(),
                from: payment.status,
                to,
            });
        }
        payment.status = to;
        apply(payment);
        Ok(payment.clone())
    }

    // --- bills ---

    pub async fn add_bill(&self, bill: Bill) -> Bill {
        let mut bills = self.inner.bills.write().await;
        bills.push(bill.clone());
        bill
    }

    pub async fn list_bills(&self, tenant_id: Option<&str>, property_id: Option<&str>) -> Vec<Bill> {
        self.inner
            .bills
            .read()
            .await
            .iter()
            .filter(|b| tenant_id.is_none_or(|t| b.tenant_id == t))
            .filter(|b| property_id.is_none_or(|p| b.property_id == p))
            .cloned()
            .collect()
    }

    pub async fn pay_bill(&self, id: &str) -> Result<Bill, StoreError> {
        let mut bills = self.inner.bills.write().await;
        let bill = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found("bill", id))?;
        if bill.status == BillStatus::Paid {
            return Err(StoreError::BillAlreadyPaid(id.to_string()));
        }
        bill.status = BillStatus::Paid;
        Ok(bill.clone())
    }

    // --- complaints ---

    /// Newest complaints first, matching the original list ordering.
    pub async fn add_complaint(&self, complaint: Complaint) -> Complaint {
        let mut complaints = self.inner.complaints.write().await;
        complaints.insert(0, complaint.clone());
        complaint
    }

    pub async fn list_complaints(
        &self,
        tenant_id: Option<&str>,
        status: Option<ComplaintStatus>,
    ) -> Vec<Complaint> {
        self.inner
            .complaints
            .read()
            .await
            .iter()
            .filter(|c| tenant_id.is_none_or(|t| c.tenant_id == t))
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect()
    }

    pub async fn set_complaint_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<Complaint, StoreError> {
        let mut complaints = self.inner.complaints.write().await;
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("complaint", id))?;
        complaint.status = status;
        Ok(complaint.clone())
    }

    // --- announcements ---

    pub async fn add_announcement(&self, announcement: Announcement) -> Announcement {
        let mut announcements = self.inner.announcements.write().await;
        announcements.insert(0, announcement.clone());
        announcement
    }

    pub async fn list_announcements(&self) -> Vec<Announcement> {
        self.inner.announcements.read().await.clone()
    }

    // --- documents ---

    pub async fn add_document(&self, document: Document) -> Document {
        let mut documents = self.inner.documents.write().await;
        documents.insert(0, document.clone());
        document
    }

    pub async fn list_documents(&self, tenant_id: Option<&str>) -> Vec<Document> {
        self.inner
            .documents
            .read()
            .await
            .iter()
            .filter(|d| tenant_id.is_none_or(|t| d.tenant_id == t))
            .cloned()
            .collect()
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
        let mut documents = self.inner.documents.write().await;
        let index = documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("document", id))?;
        documents.remove(index);
        Ok(())
    }
}
