// src/models/inventory.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    InStock,    // Vira "IN_STOCK"
    LowStock,   // Abaixo do nível de reposição
    OutOfStock,
}

// --- Structs ---

// Item do armazém da cooperativa (insumos e produção agregada).
// O estoque é substituído por valor absoluto nas edições; não há
// trilha de movimentações neste protótipo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,

    #[schema(example = "Ureia 45kg")]
    pub name: String,

    #[schema(example = "Fertilizantes")]
    pub category: String,

    #[schema(example = "120.0")]
    pub current_stock: Decimal,

    #[schema(example = "saco")]
    pub unit: String,

    // Nível que dispara o alerta de reposição
    #[schema(example = "40.0")]
    pub reorder_level: Decimal,

    // Piso operacional: abaixo disso a cooperativa para de vender
    #[schema(example = "10.0")]
    pub minimum_threshold: Decimal,

    pub status: ItemStatus,

    #[schema(example = "265.00")]
    pub average_cost: Decimal,

    pub updated_at: DateTime<Utc>,
}
