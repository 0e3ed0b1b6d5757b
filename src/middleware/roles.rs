// src/middleware/roles.rs

use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::error::ApiError;

// O nome do nosso cabeçalho HTTP customizado
const ROLE_HEADER: &str = "x-role";

// Os quatro perfis da tela de entrada. Não é autenticação: o
// cabeçalho apenas roteia o cliente para o recorte certo dos dados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Ceo,             // Vira "CEO"
    OperationsAdmin, // Vira "OPERATIONS_ADMIN"
    FieldModerator,
    SuperAdmin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "CEO" => Some(Role::Ceo),
            "OPERATIONS_ADMIN" => Some(Role::OperationsAdmin),
            "FIELD_MODERATOR" => Some(Role::FieldModerator),
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            _ => None,
        }
    }
}

// O nosso extrator: armazena o perfil que o utilizador escolheu.
#[derive(Debug, Clone)]
pub struct RoleContext(pub Role);

impl<S> FromRequestParts<S> for RoleContext
where
    S: Send + Sync,
{
    // Usamos ApiError como rejeição, pois ele já implementa IntoResponse
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        // Tenta ler o cabeçalho X-Role
        let header_value = parts.headers.get(ROLE_HEADER);

        match header_value {
            Some(value) => {
                let value_str = value.to_str().map_err(|_| ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: "Cabeçalho X-Role contém caracteres inválidos.".to_string(),
                    details: None,
                })?;

                let role = Role::parse(value_str).ok_or(ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: "Cabeçalho X-Role inválido (perfil desconhecido).".to_string(),
                    details: None,
                })?;

                Ok(RoleContext(role))
            }
            None => {
                // Erro: o cabeçalho está em falta.
                Err(ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: "O cabeçalho X-Role é obrigatório.".to_string(),
                    details: None,
                })
            }
        }
    }
}

// Guardião das rotas exclusivas do super-admin (gestão de equipe).
pub async fn super_admin_guard(request: Request, next: Next) -> Result<Response, ApiError> {
    let role = request
        .headers()
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(Role::parse);

    match role {
        Some(Role::SuperAdmin) => Ok(next.run(request).await),
        Some(_) => Err(ApiError {
            status: StatusCode::FORBIDDEN,
            message: "Apenas o perfil SUPER_ADMIN pode aceder a esta rota.".to_string(),
            details: None,
        }),
        None => Err(ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "O cabeçalho X-Role é obrigatório.".to_string(),
            details: None,
        }),
    }
}
