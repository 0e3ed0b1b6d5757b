// src/handlers/staff.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::staff::{AttendanceStatus, StaffMember},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Anita Deshmukh")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Gerente de Armazém")]
    pub designation: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "+91 98500 44556")]
    pub phone: String,
}

// POST /api/staff (apenas SUPER_ADMIN, garantido pelo middleware)
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = "Staff",
    request_body = CreateStaffPayload,
    responses(
        (status = 201, description = "Funcionário cadastrado", body = StaffMember),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Apenas SUPER_ADMIN")
    ),
    params(
        ("x-role" = String, Header, description = "Perfil selecionado (SUPER_ADMIN)")
    )
)]
pub async fn create_staff_member(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateStaffPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let member = app_state
        .staff_service
        .add_member(&payload.name, &payload.designation, &payload.phone)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(member)))
}

// GET /api/staff (apenas SUPER_ADMIN, garantido pelo middleware)
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "Staff",
    responses(
        (status = 200, description = "Lista de funcionários", body = Vec<StaffMember>),
        (status = 403, description = "Apenas SUPER_ADMIN")
    ),
    params(
        ("x-role" = String, Header, description = "Perfil selecionado (SUPER_ADMIN)")
    )
)]
pub async fn list_staff(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let members = app_state
        .staff_service
        .list_members()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(members)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePayload {
    #[schema(example = "ON_LEAVE")]
    pub attendance: AttendanceStatus,
}

// POST /api/staff/{id}/attendance (apenas SUPER_ADMIN)
#[utoipa::path(
    post,
    path = "/api/staff/{staff_id}/attendance",
    tag = "Staff",
    request_body = AttendancePayload,
    responses(
        (status = 200, description = "Presença atualizada", body = StaffMember),
        (status = 404, description = "Funcionário não encontrado"),
        (status = 403, description = "Apenas SUPER_ADMIN")
    ),
    params(
        ("staff_id" = Uuid, Path, description = "ID do Funcionário"),
        ("x-role" = String, Header, description = "Perfil selecionado (SUPER_ADMIN)")
    )
)]
pub async fn set_attendance(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(staff_id): Path<Uuid>,
    Json(payload): Json<AttendancePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let member = app_state
        .staff_service
        .set_attendance(staff_id, payload.attendance)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(member)))
}
