// src/middleware/i18n.rs

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Nosso extrator de idioma
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let default_lang = "en".to_string();

        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first() // Pega o primeiro idioma (ex: "pt-BR")
                    .map(|tag_string| {
                        // "pt-BR" -> split vira ["pt", "BR"] -> next() pega "pt"
                        // "en"    -> split vira ["en"]       -> next() pega "en"
                        tag_string.split('-').next().unwrap_or(tag_string).to_string()
                    })
            })
            .unwrap_or(default_lang);

        Ok(Locale(lang))
    }
}

// ---
// Tabela de mensagens: idioma -> código -> texto.
// Os erros do domínio carregam CÓDIGOS; a frase final é resolvida
// aqui no momento de montar a resposta HTTP.
// ---
#[derive(Debug, Clone)]
pub struct I18nStore {
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut en = HashMap::new();
        en.insert("validation_failed", "One or more fields are invalid.");
        en.insert("resource_not_found", "Resource not found");
        en.insert("invalid_status_transition", "Invalid status transition");
        en.insert("unknown_collection", "Unknown collection");
        en.insert("internal_error", "An unexpected error occurred.");
        en.insert("required", "This field is required.");
        en.insert("not_negative", "The value cannot be negative.");
        en.insert("empty_order", "The order must have at least one item.");

        let mut pt = HashMap::new();
        pt.insert("validation_failed", "Um ou mais campos são inválidos.");
        pt.insert("resource_not_found", "Recurso não encontrado");
        pt.insert("invalid_status_transition", "Transição de status inválida");
        pt.insert("unknown_collection", "Coleção desconhecida");
        pt.insert("internal_error", "Ocorreu um erro inesperado.");
        pt.insert("required", "Este campo é obrigatório.");
        pt.insert("not_negative", "O valor não pode ser negativo.");
        pt.insert("empty_order", "O pedido precisa de pelo menos um item.");

        let mut tables = HashMap::new();
        tables.insert("en", en);
        tables.insert("pt", pt);

        Self { tables }
    }

    // Resolve um código para o idioma pedido, caindo para o inglês
    // e, em último caso, para o próprio código.
    pub fn translate(&self, lang: &str, code: &str) -> String {
        self.tables
            .get(lang)
            .and_then(|table| table.get(code))
            .or_else(|| self.tables.get("en").and_then(|table| table.get(code)))
            .map(|msg| (*msg).to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
