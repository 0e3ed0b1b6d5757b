// src/handlers/partners.rs

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
    models::{
        partners::{Buyer, Supplier},
        payments::PaymentMode,
    },
};

// =============================================================================
//  ÁREA 1: FORNECEDORES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Krishna Agro Inputs")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Fertilizantes")]
    pub category: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Suresh Kumar")]
    pub contact_person: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "+91 99887 66554")]
    pub phone: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "27AABCU9603R1ZM")]
    pub gst_number: String,
}

// POST /api/partners/suppliers
#[utoipa::path(
    post,
    path = "/api/partners/suppliers",
    tag = "Partners",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Fornecedor cadastrado", body = Supplier),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let supplier = app_state
        .partner_service
        .create_supplier(
            &payload.name,
            &payload.category,
            &payload.contact_person,
            &payload.phone,
            &payload.gst_number,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

// GET /api/partners/suppliers
#[utoipa::path(
    get,
    path = "/api/partners/suppliers",
    tag = "Partners",
    responses(
        (status = 200, description = "Lista de fornecedores", body = Vec<Supplier>)
    )
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let suppliers = app_state
        .partner_service
        .list_suppliers()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(suppliers)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettleSupplierPayload {
    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "4000.00")]
    pub amount: Decimal,

    #[schema(example = "BANK_TRANSFER")]
    pub mode: PaymentMode,

    #[schema(example = "NEFT8812345")]
    pub reference_number: Option<String>,
}

// POST /api/partners/suppliers/{id}/settle
#[utoipa::path(
    post,
    path = "/api/partners/suppliers/{supplier_id}/settle",
    tag = "Partners",
    request_body = SettleSupplierPayload,
    responses(
        (status = 200, description = "Fatura abatida e saída registrada no livro-caixa", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    params(
        ("supplier_id" = Uuid, Path, description = "ID do Fornecedor")
    )
)]
pub async fn settle_supplier(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(supplier_id): Path<Uuid>,
    Json(payload): Json<SettleSupplierPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let supplier = app_state
        .partner_service
        .settle_supplier(
            supplier_id,
            payload.amount,
            payload.mode,
            payload.reference_number,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(supplier)))
}

// =============================================================================
//  ÁREA 2: COMPRADORES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuyerPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maharashtra Oils Ltd")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Processadora")]
    pub buyer_type: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "+91 98111 22334")]
    pub phone: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "27AALCS2781A1ZO")]
    pub gst_number: String,
}

// POST /api/partners/buyers
#[utoipa::path(
    post,
    path = "/api/partners/buyers",
    tag = "Partners",
    request_body = CreateBuyerPayload,
    responses(
        (status = 201, description = "Comprador cadastrado", body = Buyer),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_buyer(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateBuyerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let buyer = app_state
        .partner_service
        .create_buyer(
            &payload.name,
            &payload.buyer_type,
            &payload.phone,
            &payload.gst_number,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(buyer)))
}

// GET /api/partners/buyers
#[utoipa::path(
    get,
    path = "/api/partners/buyers",
    tag = "Partners",
    responses(
        (status = 200, description = "Lista de compradores", body = Vec<Buyer>)
    )
)]
pub async fn list_buyers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let buyers = app_state
        .partner_service
        .list_buyers()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(buyers)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyerReceiptPayload {
    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "12000.00")]
    pub amount: Decimal,

    #[schema(example = "UPI")]
    pub mode: PaymentMode,

    #[schema(example = "UTR20250620xxxx")]
    pub reference_number: Option<String>,
}

// POST /api/partners/buyers/{id}/receipt
#[utoipa::path(
    post,
    path = "/api/partners/buyers/{buyer_id}/receipt",
    tag = "Partners",
    request_body = BuyerReceiptPayload,
    responses(
        (status = 200, description = "Recebimento registrado e saldo do comprador abatido", body = Buyer),
        (status = 404, description = "Comprador não encontrado")
    ),
    params(
        ("buyer_id" = Uuid, Path, description = "ID do Comprador")
    )
)]
pub async fn record_buyer_receipt(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(buyer_id): Path<Uuid>,
    Json(payload): Json<BuyerReceiptPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let buyer = app_state
        .partner_service
        .record_buyer_receipt(
            buyer_id,
            payload.amount,
            payload.mode,
            payload.reference_number,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(buyer)))
}
