// src/services/export_service.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::{common::error::AppError, store::Store};

// Nomes válidos para o export individual, na mesma grafia dos campos
// do snapshot persistido.
const COLLECTIONS: [&str; 7] = [
    "farmers",
    "orders",
    "inventory",
    "suppliers",
    "buyers",
    "staff",
    "payments",
];

// Monta um documento CSV a partir de registros de formato uniforme.
// Os cabeçalhos vêm das chaves do PRIMEIRO registro (via reflexão do
// objeto JSON); entrada vazia produz documento vazio.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, AppError> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let first = serde_json::to_value(first)?;
    let headers: Vec<String> = match first.as_object() {
        Some(map) => map.keys().cloned().collect(),
        None => return Ok(String::new()),
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let value = serde_json::to_value(record)?;
        let row: Vec<String> = headers
            .iter()
            .map(|header| {
                let field = value.get(header).cloned().unwrap_or(Value::Null);
                escape_field(&value_to_string(&field))
            })
            .collect();
        lines.push(row.join(","));
    }

    Ok(lines.join("\n"))
}

// Aspas no padrão CSV: o campo é envolvido em aspas quando contém
// vírgula, aspas ou quebra de linha, e aspas internas são dobradas.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Listas e objetos aninhados (ex.: culturas, linhas do pedido)
        // viajam como JSON compacto dentro da célula.
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct ExportService {
    store: Arc<Store>,
}

impl ExportService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn export_collection(&self, name: &str) -> Result<String, AppError> {
        let snapshot = self.store.snapshot().await;

        match name {
            "farmers" => to_csv(&snapshot.farmers),
            "orders" => to_csv(&snapshot.orders),
            "inventory" => to_csv(&snapshot.inventory),
            "suppliers" => to_csv(&snapshot.suppliers),
            "buyers" => to_csv(&snapshot.buyers),
            "staff" => to_csv(&snapshot.staff),
            "payments" => to_csv(&snapshot.payments),
            other => Err(AppError::UnknownCollection(other.to_string())),
        }
    }

    // O "export completo": um documento CSV por coleção NÃO vazia.
    pub async fn export_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let mut documents = BTreeMap::new();

        for name in COLLECTIONS {
            let csv = self.export_collection(name).await?;
            if !csv.is_empty() {
                documents.insert(name.to_string(), csv);
            }
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Registro {
        name: String,
        note: String,
    }

    #[test]
    fn virgulas_e_aspas_sao_escapadas_no_padrao_csv() {
        let registros = vec![Registro {
            name: "A,B".to_string(),
            note: "has \"quote\"".to_string(),
        }];

        let csv = to_csv(&registros).expect("csv");
        let mut linhas = csv.lines();

        assert_eq!(linhas.next(), Some("name,note"));
        // Campo com vírgula vira "A,B"; aspas internas são dobradas.
        assert_eq!(linhas.next(), Some("\"A,B\",\"has \"\"quote\"\"\""));
        assert_eq!(linhas.next(), None);
    }

    #[test]
    fn quebra_de_linha_embutida_tambem_forca_aspas() {
        let registros = vec![Registro {
            name: "linha1\nlinha2".to_string(),
            note: "ok".to_string(),
        }];

        let csv = to_csv(&registros).expect("csv");
        assert!(csv.contains("\"linha1\nlinha2\""));
    }

    #[test]
    fn entrada_vazia_produz_documento_vazio() {
        let registros: Vec<Registro> = vec![];
        assert_eq!(to_csv(&registros).expect("csv"), "");
    }

    #[tokio::test]
    async fn export_completo_pula_colecoes_vazias() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("store.json");

        // Snapshot persistido com só duas coleções populadas.
        let seed = crate::store::seed::seed_snapshot();
        let snapshot = crate::store::StoreSnapshot {
            farmers: seed.farmers,
            orders: vec![],
            inventory: seed.inventory,
            suppliers: vec![],
            buyers: vec![],
            staff: vec![],
            payments: vec![],
        };
        std::fs::write(&path, serde_json::to_vec_pretty(&snapshot).unwrap()).unwrap();

        let store = Arc::new(crate::store::Store::open(&path).await);
        let service = ExportService::new(store);

        let documentos = service.export_all().await.expect("export");
        assert_eq!(documentos.len(), 2);
        assert!(documentos.contains_key("farmers"));
        assert!(documentos.contains_key("inventory"));
        assert!(!documentos.contains_key("orders"));

        // Cada documento tem cabeçalho + pelo menos uma linha.
        for csv in documentos.values() {
            assert!(csv.lines().count() >= 2);
        }
    }

    #[tokio::test]
    async fn colecao_desconhecida_e_rejeitada() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let store = Arc::new(crate::store::Store::open(dir.path().join("store.json")).await);
        let service = ExportService::new(store);

        let resultado = service.export_collection("documents").await;
        assert!(matches!(resultado, Err(AppError::UnknownCollection(_))));
    }
}
