//! REST API Server for the health assessment service
//!
//! Form-encoded endpoints, JSON responses with either `result` or `error`.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn, Instrument};

use crate::assessment::AssessmentService;
use crate::biometrics;
use crate::error::AssessmentError;
use crate::geo::{self, NearbyQuery, PlaceSearch};
use crate::models::ProductCategory;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct SymptomForm {
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub product: String,
    pub product_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub report_text: String,
}

/// Kept as strings so bad numbers become validation errors, not rejections.
#[derive(Debug, Deserialize)]
pub struct BiometricForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn success(result: String) -> Self {
        Self {
            result: Some(result),
            error: None,
            details: None,
        }
    }

    pub fn with_details<T: Serialize>(mut self, details: T) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    pub fn error(message: String) -> Self {
        Self {
            result: None,
            error: Some(message),
            details: None,
        }
    }
}

type ApiReply = (StatusCode, Json<ApiResponse>);

fn ok(response: ApiResponse) -> ApiReply {
    (StatusCode::OK, Json(response))
}

fn failure(e: AssessmentError) -> ApiReply {
    let status = e.status_code();
    if status.is_server_error() {
        warn!(%status, "Request failed: {}", e);
    } else {
        info!(%status, "Request rejected: {}", e);
    }
    (status, Json(ApiResponse::error(e.to_string())))
}

/// Extractor rejections (missing fields, bad numbers, wrong content type)
/// are validation failures and answer with the JSON error shape.
fn rejected(rejection: impl std::fmt::Display) -> ApiReply {
    failure(AssessmentError::validation(rejection.to_string()))
}

fn reply(outcome: crate::Result<String>) -> ApiReply {
    match outcome {
        Ok(text) => ok(ApiResponse::success(text)),
        Err(e) => failure(e),
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<AssessmentService>,
    pub places: Arc<dyn PlaceSearch>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Assessment Endpoints
/// =============================

async fn check_symptoms(
    State(state): State<ApiState>,
    form: Result<Form<SymptomForm>, FormRejection>,
) -> ApiReply {
    let span = info_span!("check_symptoms", request_id = %uuid::Uuid::new_v4());
    async move {
        let Form(form) = match form {
            Ok(form) => form,
            Err(rejection) => return rejected(rejection),
        };
        info!(strategy = ?state.service.strategy(), "Received symptom check");
        reply(state.service.check_symptoms(&form.symptoms).await)
    }
    .instrument(span)
    .await
}

async fn analyze_product(
    State(state): State<ApiState>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> ApiReply {
    let span = info_span!("analyze_product", request_id = %uuid::Uuid::new_v4());
    async move {
        let Form(form) = match form {
            Ok(form) => form,
            Err(rejection) => return rejected(rejection),
        };
        let category = match form.product_type.as_deref() {
            Some(raw) if !raw.trim().is_empty() => match raw.parse::<ProductCategory>() {
                Ok(category) => category,
                Err(e) => return failure(e),
            },
            _ => ProductCategory::Food,
        };

        info!(product = %form.product, category = %category, "Received product analysis");
        reply(state.service.analyze_product(&form.product, category).await)
    }
    .instrument(span)
    .await
}

async fn analyze_report(
    State(state): State<ApiState>,
    form: Result<Form<ReportForm>, FormRejection>,
) -> ApiReply {
    let span = info_span!("analyze_report", request_id = %uuid::Uuid::new_v4());
    async move {
        let Form(form) = match form {
            Ok(form) => form,
            Err(rejection) => return rejected(rejection),
        };
        info!(chars = form.report_text.len(), "Received report analysis");
        reply(state.service.analyze_report(&form.report_text).await)
    }
    .instrument(span)
    .await
}

async fn bmi_calculator(form: Result<Form<BiometricForm>, FormRejection>) -> ApiReply {
    let span = info_span!("bmi_calculator", request_id = %uuid::Uuid::new_v4());
    async move {
        let Form(form) = match form {
            Ok(form) => form,
            Err(rejection) => return rejected(rejection),
        };

        let outcome =
            biometrics::parse_input(&form.weight, &form.height, &form.age, &form.gender)
                .and_then(|input| biometrics::assess(&input));

        match outcome {
            Ok(result) => {
                info!(bmi = result.bmi, category = %result.category, "BMI calculated");
                ok(ApiResponse::success(biometrics::summary(&result)).with_details(&result))
            }
            Err(e) => failure(e),
        }
    }
    .instrument(span)
    .await
}

async fn nearby(
    State(state): State<ApiState>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> ApiReply {
    let span = info_span!("nearby", request_id = %uuid::Uuid::new_v4());
    async move {
        let Query(query) = match query {
            Ok(query) => query,
            Err(rejection) => return rejected(rejection),
        };
        match geo::find_nearby(state.places.as_ref(), &query).await {
            Ok(places) => {
                let result = format!(
                    "Found {} result(s) for '{}' within {} km",
                    places.len(),
                    query.keyword.trim(),
                    query.radius_km
                );
                ok(ApiResponse::success(result).with_details(&places))
            }
            Err(e) => failure(e),
        }
    }
    .instrument(span)
    .await
}

/// =============================
/// Router
/// =============================

pub fn create_router(service: Arc<AssessmentService>, places: Arc<dyn PlaceSearch>) -> Router {
    let state = ApiState { service, places };

    Router::new()
        .route("/health", get(health))
        .route("/check-symptoms", post(check_symptoms))
        .route("/analyze-product", post(analyze_product))
        .route("/analyze-report", post(analyze_report))
        .route("/bmi-calculator", post(bmi_calculator))
        .route("/nearby", get(nearby))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    service: Arc<AssessmentService>,
    places: Arc<dyn PlaceSearch>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(service, places);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
