//! Rent prediction via an external generative-model API.
//!
//! There is no pricing logic here: the property attributes are serialized
//! into a prompt template, sent to the model endpoint, and the structured
//! answer (predicted rent plus rationale) is parsed back out. Results are
//! cached so repeated form submissions do not re-bill the API.

use moka::future::Cache;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Default model endpoint (Gemini generateContent API). The key is passed
/// via the `x-goog-api-key` header.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Property attributes submitted for a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct RentPredictionRequest {
    /// Type of property (e.g., apartment, house).
    #[validate(length(min = 1, message = "Property type is required."))]
    pub property_type: String,
    /// Location of the property (e.g., city, neighborhood).
    #[validate(length(min = 1, message = "Location is required."))]
    pub location: String,
    /// Number of bedrooms in the property.
    #[validate(range(min = 1, message = "Must have at least 1 bedroom."))]
    pub num_bedrooms: u32,
    /// Number of bathrooms in the property.
    #[validate(range(min = 1, message = "Must have at least 1 bathroom."))]
    pub num_bathrooms: u32,
    /// Square footage of the property.
    #[validate(range(min = 100, message = "Must be at least 100 sq. ft."))]
    pub square_footage: u32,
    /// Comma-separated list of amenities (e.g., balcony, parking, gym).
    #[validate(length(min = 1, message = "Amenities are required."))]
    pub amenities: String,
    /// Comma-separated list of nearby amenities (e.g., schools, parks).
    #[validate(length(min = 1, message = "Nearby amenities are required."))]
    pub nearby_amenities: String,
}

/// The model's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RentPrediction {
    /// Predicted monthly rent in INR.
    pub predicted_rent: Decimal,
    /// Explanation of the factors behind the prediction.
    pub rationale: String,
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction API key is not configured")]
    NotConfigured,
    #[error("prediction API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("prediction API returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl PredictionError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "PREDICTION_UNAVAILABLE",
            Self::Http(_) | Self::MalformedResponse(_) => "PREDICTION_FAILED",
        }
    }
}

/// Client for the external model, with a response cache.
#[derive(Debug, Clone)]
pub struct RentPredictor {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    cache: Cache<String, RentPrediction>,
}

// Wire format of the generateContent API, reduced to the parts we use.

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl RentPredictor {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();
        Self {
            http,
            endpoint,
            api_key,
            cache,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the model for a rent estimate. Identical inputs within the cache
    /// window are answered from cache without a network call.
    #[instrument(skip(self))]
    pub async fn predict(
        &self,
        request: &RentPredictionRequest,
    ) -> Result<RentPrediction, PredictionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(PredictionError::NotConfigured)?;

        let cache_key = format!("prediction_{:?}", request);
        if let Some(prediction) = self.cache.get(&cache_key).await {
            debug!("Rent prediction served from cache");
            return Ok(prediction);
        }

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        debug!("Requesting rent prediction from model endpoint");
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                warn!("Model response contained no candidates");
                PredictionError::MalformedResponse("no candidates in response".to_string())
            })?;

        let prediction = parse_prediction(&text)?;
        self.cache.insert(cache_key, prediction.clone()).await;
        Ok(prediction)
    }
}

/// Render the prompt the original system sent to the model.
fn build_prompt(request: &RentPredictionRequest) -> String {
    format!(
        "You are an expert real estate analyst specializing in Indian rental markets. \
Given the details of a property, you will predict the optimal monthly rental rate in Indian Rupees (₹).

Consider the following factors:
- Property type: {property_type}
- Location: {location}
- Number of bedrooms: {num_bedrooms}
- Number of bathrooms: {num_bathrooms}
- Square footage: {square_footage}
- Amenities: {amenities}
- Nearby amenities: {nearby_amenities}

Provide a predicted rent and a brief rationale explaining your reasoning. \
Respond with a JSON object of the form {{\"predicted_rent\": <number>, \"rationale\": <string>}}, \
with all values in Indian Rupees (₹).",
        property_type = request.property_type,
        location = request.location,
        num_bedrooms = request.num_bedrooms,
        num_bathrooms = request.num_bathrooms,
        square_footage = request.square_footage,
        amenities = request.amenities,
        nearby_amenities = request.nearby_amenities,
    )
}

/// Parse the model's JSON answer, tolerating markdown code fences some
/// models wrap around JSON output.
fn parse_prediction(text: &str) -> Result<RentPrediction, PredictionError> {
    #[derive(Deserialize)]
    struct RawPrediction {
        predicted_rent: f64,
        rationale: String,
    }

    let trimmed = strip_code_fence(text);
    let raw: RawPrediction = serde_json::from_str(trimmed)
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
    let predicted_rent = Decimal::try_from(raw.predicted_rent)
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
    Ok(RentPrediction {
        predicted_rent,
        rationale: raw.rationale,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
