// src/handlers/farmers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::validate_not_negative,
    middleware::i18n::Locale,
    models::farmers::{Farmer, FarmerStatus, FarmerUpdate},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmerPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ramesh Patil")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "+91 98220 11223")]
    pub phone: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Wagholi")]
    pub village: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Cluster Norte")]
    pub cluster: String,

    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "4.5")]
    pub land_size: Decimal,

    #[serde(default)]
    #[schema(example = json!(["Soja", "Algodão"]))]
    pub crops: Vec<String>,

    // Capital social integralizado na entrada. Pode ser 0.
    #[validate(custom(function = validate_not_negative))]
    #[serde(default)]
    #[schema(example = "500.00")]
    pub share_capital: Decimal,

    // Sem status explícito o cadastro entra como PENDING_KYC.
    pub status: Option<FarmerStatus>,
}

// POST /api/farmers
#[utoipa::path(
    post,
    path = "/api/farmers",
    tag = "Farmers",
    request_body = CreateFarmerPayload,
    responses(
        (status = 201, description = "Produtor cadastrado", body = Farmer),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_farmer(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateFarmerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let farmer = app_state
        .farmer_service
        .register_farmer(
            &payload.name,
            &payload.phone,
            &payload.village,
            &payload.cluster,
            payload.land_size,
            payload.crops,
            payload.share_capital,
            payload.status,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(farmer)))
}

// GET /api/farmers
#[utoipa::path(
    get,
    path = "/api/farmers",
    tag = "Farmers",
    responses(
        (status = 200, description = "Lista de produtores (mais recentes primeiro)", body = Vec<Farmer>)
    )
)]
pub async fn list_farmers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let farmers = app_state
        .farmer_service
        .list_farmers()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(farmers)))
}

// PATCH /api/farmers/{id}
#[utoipa::path(
    patch,
    path = "/api/farmers/{farmer_id}",
    tag = "Farmers",
    request_body = FarmerUpdate,
    responses(
        (status = 200, description = "Produtor atualizado (merge raso do patch)", body = Farmer),
        (status = 404, description = "Produtor não encontrado")
    ),
    params(
        ("farmer_id" = Uuid, Path, description = "ID do Produtor")
    )
)]
pub async fn update_farmer(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(farmer_id): Path<Uuid>,
    Json(patch): Json<FarmerUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let farmer = app_state
        .farmer_service
        .update_farmer(farmer_id, patch)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(farmer)))
}
