use crate::schemas::{store_error, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::Utc;
use model::entities::Document;
use model::new_id;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for recording an uploaded document. Only metadata is
/// stored; the file bytes live wherever `url` points.
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct UploadDocumentRequest {
    #[validate(length(min = 1))]
    pub tenant_id: String,
    #[validate(length(min = 1, message = "Please select a file to upload."))]
    pub name: String,
    /// Placeholder when the upload backend is mocked
    pub url: Option<String>,
}

/// Query parameters for listing documents
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DocumentQuery {
    pub tenant_id: Option<String>,
}

/// Record an uploaded document for a tenant
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    tag = "documents",
    request_body = UploadDocumentRequest,
    responses(
        (status = 201, description = "Document uploaded successfully", body = ApiResponse<Document>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Tenant not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn upload_document(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<UploadDocumentRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering upload_document function");
    debug!(
        "Recording document '{}' for tenant {}",
        request.name, request.tenant_id
    );

    let tenant = state
        .store
        .get_tenant(&request.tenant_id)
        .await
        .map_err(store_error)?;

    let document = Document {
        id: new_id("doc"),
        tenant_id: tenant.id,
        name: request.name,
        upload_date: Utc::now(),
        url: request.url.unwrap_or_else(|| "#".to_string()),
    };

    let document = state.store.add_document(document).await;
    info!("Document recorded with ID: {}", document.id);

    let response = ApiResponse::new(document, "Document uploaded successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get documents, newest first, optionally for one tenant
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    tag = "documents",
    params(DocumentQuery),
    responses(
        (status = 200, description = "Documents retrieved successfully", body = ApiResponse<Vec<Document>>)
    )
)]
#[instrument]
pub async fn get_documents(
    Query(query): Query<DocumentQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Document>>> {
    trace!("Entering get_documents function");

    let documents = state.store.list_documents(query.tenant_id.as_deref()).await;
    debug!("Retrieved {} documents", documents.len());

    Json(ApiResponse::new(
        documents,
        "Documents retrieved successfully",
    ))
}

/// Remove a document
#[utoipa::path(
    delete,
    path = "/api/v1/documents/{document_id}",
    tag = "documents",
    params(
        ("document_id" = String, Path, description = "Document ID"),
    ),
    responses(
        (status = 200, description = "Document removed successfully", body = ApiResponse<String>),
        (status = 404, description = "Document not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_document(
    Path(document_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering delete_document function for document_id: {}", document_id);

    state
        .store
        .delete_document(&document_id)
        .await
        .map_err(store_error)?;

    info!("Document {} removed", document_id);
    Ok(Json(ApiResponse::new(
        format!("Document {} removed", document_id),
        "Document removed successfully",
    )))
}
