// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::middleware::i18n::{I18nStore, Locale};

// Nosso tipo de erro de domínio, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Recurso não encontrado: {0}")]
    ResourceNotFound(String),

    #[error("Transição de status inválida: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Coleção desconhecida: {0}")]
    UnknownCollection(String),

    // Falhas de E/S ao gravar/ler o snapshot em disco
    #[error("Erro de E/S no snapshot: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("Erro de serialização do snapshot: {0}")]
    SnapshotSerde(#[from] serde_json::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro já "pronto para HTTP": status + mensagem no idioma do cliente.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => Json(json!({
                "error": self.message,
                "details": details,
            })),
            None => Json(json!({ "error": self.message })),
        };
        (self.status, body).into_response()
    }
}

impl AppError {
    // Converte o erro de domínio em resposta HTTP, resolvendo os
    // códigos de mensagem pela tabela i18n.
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();

        match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref())
                        .map(|code| i18n.translate(lang, code))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: i18n.translate(lang, "validation_failed"),
                    details: Some(json!(details)),
                }
            }

            AppError::ResourceNotFound(what) => ApiError {
                status: StatusCode::NOT_FOUND,
                message: format!("{}: {}", i18n.translate(lang, "resource_not_found"), what),
                details: None,
            },

            AppError::InvalidStatusTransition { from, to } => ApiError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!(
                    "{}: {} -> {}",
                    i18n.translate(lang, "invalid_status_transition"),
                    from,
                    to
                ),
                details: None,
            },

            AppError::UnknownCollection(name) => ApiError {
                status: StatusCode::NOT_FOUND,
                message: format!("{}: {}", i18n.translate(lang, "unknown_collection"), name),
                details: None,
            },

            // Todos os outros (E/S, serialização, inesperados) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: i18n.translate(lang, "internal_error"),
                    details: None,
                }
            }
        }
    }
}
