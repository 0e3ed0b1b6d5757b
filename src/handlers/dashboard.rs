// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{i18n::Locale, roles::RoleContext},
    // Importamos os models para referenciar no Swagger
    models::dashboard::{DashboardSummary, ProcurementChartEntry, RoleDashboard, TopProductEntry},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Os quatro indicadores principais, derivados do snapshot atual", body = DashboardSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .dashboard_service
        .get_summary()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/role-summary
#[utoipa::path(
    get,
    path = "/api/dashboard/role-summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "O recorte de indicadores do perfil enviado em x-role", body = RoleDashboard),
        (status = 400, description = "Cabeçalho x-role ausente ou inválido")
    ),
    params(
        ("x-role" = String, Header, description = "Perfil selecionado (CEO, OPERATIONS_ADMIN, FIELD_MODERATOR, SUPER_ADMIN)")
    )
)]
pub async fn get_role_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    role: RoleContext,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .dashboard_service
        .get_role_summary(role.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/procurement-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/procurement-chart",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Total de pedidos por dia (últimos 30 dias)", body = Vec<ProcurementChartEntry>)
    )
)]
pub async fn get_procurement_chart(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let chart = app_state
        .dashboard_service
        .get_procurement_chart()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/dashboard/top-products
#[utoipa::path(
    get,
    path = "/api/dashboard/top-products",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Ranking dos produtos mais pedidos", body = Vec<TopProductEntry>)
    )
)]
pub async fn get_top_products(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .dashboard_service
        .get_top_products()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(products)))
}
