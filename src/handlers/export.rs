// src/handlers/export.rs

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{common::error::ApiError, config::AppState, middleware::i18n::Locale};

// GET /api/export/{collection}
#[utoipa::path(
    get,
    path = "/api/export/{collection}",
    tag = "Export",
    responses(
        (status = 200, description = "Documento CSV da coleção, como download", body = String, content_type = "text/csv"),
        (status = 404, description = "Coleção desconhecida")
    ),
    params(
        ("collection" = String, Path, description = "farmers | orders | inventory | suppliers | buyers | staff | payments")
    )
)]
pub async fn export_collection(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(collection): Path<String>,
) -> Result<Response, ApiError> {
    let csv = app_state
        .export_service
        .export_collection(&collection)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    // Configura os headers para o navegador baixar o CSV
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.csv\"", collection),
        ),
    ];

    Ok((headers, csv).into_response())
}

// GET /api/export/full
#[utoipa::path(
    get,
    path = "/api/export/full",
    tag = "Export",
    responses(
        (status = 200, description = "Um documento CSV por coleção não vazia, indexado pelo nome da coleção", body = BTreeMap<String, String>)
    )
)]
pub async fn export_full(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let documents = app_state
        .export_service
        .export_all()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(documents)))
}
