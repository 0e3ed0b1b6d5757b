// src/handlers/inventory.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::validate_not_negative,
    middleware::i18n::Locale,
    models::inventory::InventoryItem,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ureia 45kg")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Fertilizantes")]
    pub category: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "saco")]
    pub unit: String,

    // Estoque de abertura. Pode ser 0.
    #[validate(custom(function = validate_not_negative))]
    #[serde(default)]
    #[schema(example = "120.0")]
    pub current_stock: Decimal,

    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "40.0")]
    pub reorder_level: Decimal,

    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "10.0")]
    pub minimum_threshold: Decimal,

    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "265.00")]
    pub average_cost: Decimal,
}

// POST /api/inventory/items
#[utoipa::path(
    post,
    path = "/api/inventory/items",
    tag = "Inventory",
    request_body = CreateItemPayload,
    responses(
        (status = 201, description = "Item cadastrado no armazém", body = InventoryItem),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let item = app_state
        .inventory_service
        .create_item(
            &payload.name,
            &payload.category,
            &payload.unit,
            payload.current_stock,
            payload.reorder_level,
            payload.minimum_threshold,
            payload.average_cost,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(item)))
}

// GET /api/inventory/items
#[utoipa::path(
    get,
    path = "/api/inventory/items",
    tag = "Inventory",
    responses(
        (status = 200, description = "Lista de itens do armazém", body = Vec<InventoryItem>)
    )
)]
pub async fn list_items(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .inventory_service
        .list_items()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(items)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockPayload {
    // O valor enviado É o novo saldo (substituição absoluta, não delta).
    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "7.0")]
    pub current_stock: Decimal,
}

// PUT /api/inventory/items/{id}/stock
#[utoipa::path(
    put,
    path = "/api/inventory/items/{item_id}/stock",
    tag = "Inventory",
    request_body = UpdateStockPayload,
    responses(
        (status = 200, description = "Estoque substituído pelo valor absoluto enviado", body = InventoryItem),
        (status = 404, description = "Item não encontrado")
    ),
    params(
        ("item_id" = Uuid, Path, description = "ID do Item")
    )
)]
pub async fn update_stock(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(item_id): Path<Uuid>,
    Json(payload): Json<UpdateStockPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let item = app_state
        .inventory_service
        .set_stock(item_id, payload.current_stock)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(item)))
}

// GET /api/inventory/low-stock
#[utoipa::path(
    get,
    path = "/api/inventory/low-stock",
    tag = "Inventory",
    responses(
        (status = 200, description = "Itens no nível de reposição ou abaixo", body = Vec<InventoryItem>)
    )
)]
pub async fn list_low_stock(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .inventory_service
        .list_low_stock()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(items)))
}
