use crate::handlers::{
    announcements::{create_announcement, get_announcements},
    bills::{create_bill, get_bills, pay_bill},
    complaints::{create_complaint, get_complaints, update_complaint_status},
    dashboard::{get_owner_dashboard, get_tenant_dashboard},
    documents::{delete_document, get_documents, upload_document},
    health::health_check,
    prediction::predict_rent,
    properties::{
        create_property, delete_property, get_properties, get_property, update_property,
    },
    rent_payments::{
        confirm_rent_payment, get_rent_payment, get_rent_payments, reject_rent_payment,
        request_rent, submit_rent_payment,
    },
    tenants::{create_tenant, delete_tenant, get_tenant, get_tenant_property, get_tenants},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Property CRUD routes
        .route("/api/v1/properties", post(create_property))
        .route("/api/v1/properties", get(get_properties))
        .route("/api/v1/properties/:property_id", get(get_property))
        .route("/api/v1/properties/:property_id", put(update_property))
        .route("/api/v1/properties/:property_id", delete(delete_property))
        // Tenant routes
        .route("/api/v1/tenants", post(create_tenant))
        .route("/api/v1/tenants", get(get_tenants))
        .route("/api/v1/tenants/:tenant_id", get(get_tenant))
        .route("/api/v1/tenants/:tenant_id", delete(delete_tenant))
        .route("/api/v1/tenants/:tenant_id/property", get(get_tenant_property))
        // Rent payment lifecycle routes
        .route("/api/v1/rent-payments", post(request_rent))
        .route("/api/v1/rent-payments", get(get_rent_payments))
        .route("/api/v1/rent-payments/:payment_id", get(get_rent_payment))
        .route("/api/v1/rent-payments/:payment_id/pay", post(submit_rent_payment))
        .route("/api/v1/rent-payments/:payment_id/confirm", post(confirm_rent_payment))
        .route("/api/v1/rent-payments/:payment_id/reject", post(reject_rent_payment))
        // Bill routes
        .route("/api/v1/bills", post(create_bill))
        .route("/api/v1/bills", get(get_bills))
        .route("/api/v1/bills/:bill_id/pay", post(pay_bill))
        // Complaint routes
        .route("/api/v1/complaints", post(create_complaint))
        .route("/api/v1/complaints", get(get_complaints))
        .route("/api/v1/complaints/:complaint_id/status", put(update_complaint_status))
        // Announcement routes
        .route("/api/v1/announcements", post(create_announcement))
        .route("/api/v1/announcements", get(get_announcements))
        // Document routes
        .route("/api/v1/documents", post(upload_document))
        .route("/api/v1/documents", get(get_documents))
        .route("/api/v1/documents/:document_id", delete(delete_document))
        // Dashboard routes
        .route("/api/v1/owners/:owner_id/dashboard", get(get_owner_dashboard))
        .route("/api/v1/tenants/:tenant_id/dashboard", get(get_tenant_dashboard))
        // Rent prediction
        .route("/api/v1/rent-prediction", post(predict_rent))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
