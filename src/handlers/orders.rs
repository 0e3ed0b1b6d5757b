// src/handlers/orders.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::operations::{Order, OrderPaymentStatus, OrderStatus},
    services::order_service::NewOrderLine,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    #[schema(example = "f0000000-0000-0000-0000-000000000001")]
    pub farmer_id: Uuid,

    // Nome desnormalizado: viaja junto com o pedido, como no restante
    // das coleções (sem integridade referencial).
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ramesh Patil")]
    pub farmer_name: String,

    // Sem data explícita o pedido entra com a data de hoje.
    #[schema(value_type = Option<String>, format = Date, example = "2025-06-14")]
    pub order_date: Option<NaiveDate>,

    #[validate(length(min = 1, message = "empty_order"), nested)]
    pub items: Vec<NewOrderLine>,
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado (inicia em PENDING, totais calculados no servidor)", body = Order),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let order = app_state
        .order_service
        .create_order(
            payload.farmer_id,
            &payload.farmer_name,
            payload.order_date,
            payload.items,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(order)))
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Lista de pedidos (mais recentes primeiro)", body = Vec<Order>)
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state
        .order_service
        .list_orders()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(orders)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusPayload {
    #[schema(example = "APPROVED")]
    pub status: OrderStatus,
}

// POST /api/orders/{id}/status
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/status",
    tag = "Orders",
    request_body = UpdateOrderStatusPayload,
    responses(
        (status = 200, description = "Pedido movido na máquina de estados", body = Order),
        (status = 404, description = "Pedido não encontrado"),
        (status = 422, description = "Transição de status inválida")
    ),
    params(
        ("order_id" = Uuid, Path, description = "ID do Pedido")
    )
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let order = app_state
        .order_service
        .update_status(order_id, payload.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(order)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPaymentStatusPayload {
    #[schema(example = "PAID")]
    pub payment_status: OrderPaymentStatus,
}

// POST /api/orders/{id}/payment-status
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/payment-status",
    tag = "Orders",
    request_body = UpdateOrderPaymentStatusPayload,
    responses(
        (status = 200, description = "Situação de pagamento do pedido atualizada", body = Order),
        (status = 404, description = "Pedido não encontrado")
    ),
    params(
        ("order_id" = Uuid, Path, description = "ID do Pedido")
    )
)]
pub async fn update_order_payment_status(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<UpdateOrderPaymentStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let order = app_state
        .order_service
        .update_payment_status(order_id, payload.payment_status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(order)))
}
