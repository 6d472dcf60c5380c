use crate::prediction::{PredictionError, RentPrediction, RentPredictionRequest};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use tracing::{error, info, instrument, trace};

/// Predict the monthly rent for a property from its attributes
#[utoipa::path(
    post,
    path = "/api/v1/rent-prediction",
    tag = "prediction",
    request_body = RentPredictionRequest,
    responses(
        (status = 200, description = "Rent prediction generated successfully", body = ApiResponse<RentPrediction>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Prediction backend failed", body = ErrorResponse),
        (status = 503, description = "Prediction backend not configured", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn predict_rent(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<RentPredictionRequest>>,
) -> Result<Json<ApiResponse<RentPrediction>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering predict_rent function");

    let prediction = state.predictor.predict(&request).await.map_err(|err| {
        error!("Rent prediction failed: {}", err);
        let status = match &err {
            PredictionError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            PredictionError::Http(_) | PredictionError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        };
        (status, Json(ErrorResponse::new(err.to_string(), err.code())))
    })?;

    info!(
        "Rent predicted for {} in {}: {}",
        request.property_type, request.location, prediction.predicted_rent
    );
    Ok(Json(ApiResponse::new(
        prediction,
        "Rent prediction generated successfully",
    )))
}
