// src/handlers/payments.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
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
    models::payments::{Payment, PaymentDirection, PaymentMode, PaymentStatus, PartyType},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPayload {
    // Sem data explícita o lançamento entra com a data de hoje.
    #[schema(value_type = Option<String>, format = Date, example = "2025-06-20")]
    pub payment_date: Option<NaiveDate>,

    pub entity_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Krishna Agro Inputs")]
    pub entity_name: String,

    pub entity_type: PartyType,

    pub direction: PaymentDirection,

    #[validate(custom(function = validate_not_negative))]
    #[schema(example = "5000.00")]
    pub amount: Decimal,

    pub mode: PaymentMode,

    #[schema(example = "UTR20250620xxxx")]
    pub reference_number: Option<String>,

    // Sem status explícito o lançamento entra como COMPLETED.
    pub status: Option<PaymentStatus>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Adiantamento de safra")]
    pub purpose: String,
}

// POST /api/payments
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    request_body = CreatePaymentPayload,
    responses(
        (status = 201, description = "Lançamento registrado no livro-caixa", body = Payment),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_payment(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let payment = app_state
        .payment_service
        .record_payment(
            payload
                .payment_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            payload.entity_id,
            &payload.entity_name,
            payload.entity_type,
            payload.direction,
            payload.amount,
            payload.mode,
            payload.reference_number,
            payload.status.unwrap_or(PaymentStatus::Completed),
            &payload.purpose,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(payment)))
}

// GET /api/payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    responses(
        (status = 200, description = "Livro-caixa (mais recentes primeiro)", body = Vec<Payment>)
    )
)]
pub async fn list_payments(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let payments = app_state
        .payment_service
        .list_payments()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(payments)))
}

// POST /api/payments/{id}/reconcile
#[utoipa::path(
    post,
    path = "/api/payments/{payment_id}/reconcile",
    tag = "Payments",
    responses(
        (status = 200, description = "Lançamento conciliado (PENDING/PROCESSING -> COMPLETED)", body = Payment),
        (status = 404, description = "Lançamento não encontrado"),
        (status = 422, description = "Lançamento não é conciliável")
    ),
    params(
        ("payment_id" = Uuid, Path, description = "ID do Lançamento")
    )
)]
pub async fn reconcile_payment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(payment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = app_state
        .payment_service
        .reconcile(payment_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(payment)))
}
