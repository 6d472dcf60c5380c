use crate::prediction::{RentPredictor, DEFAULT_ENDPOINT};
use crate::schemas::AppState;
use crate::store::MockStore;
use anyhow::Result;
use std::sync::Arc;

/// Initialize application configuration and state
pub async fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Seed the in-memory store with the demo data set
    let store = MockStore::demo();
    tracing::info!("Mock data store seeded with demo data");

    let endpoint = std::env::var("PREDICTION_API_URL")
        .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let api_key = std::env::var("PREDICTION_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!("PREDICTION_API_KEY not set; rent prediction will be unavailable");
    }
    let predictor = RentPredictor::new(endpoint, api_key);

    Ok(AppState {
        store,
        predictor: Arc::new(predictor),
    })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
