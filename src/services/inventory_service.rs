// src/services/inventory_service.rs

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::inventory::{InventoryItem, ItemStatus},
    store::Store,
};

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<Store>,
}

impl InventoryService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    // Classificação do item no momento do cadastro, a partir dos
    // níveis informados.
    fn classify(stock: Decimal, reorder_level: Decimal) -> ItemStatus {
        if stock <= Decimal::ZERO {
            ItemStatus::OutOfStock
        } else if stock <= reorder_level {
            ItemStatus::LowStock
        } else {
            ItemStatus::InStock
        }
    }

    pub async fn create_item(
        &self,
        name: &str,
        category: &str,
        unit: &str,
        current_stock: Decimal,
        reorder_level: Decimal,
        minimum_threshold: Decimal,
        average_cost: Decimal,
    ) -> Result<InventoryItem, AppError> {
        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            current_stock,
            unit: unit.to_string(),
            reorder_level,
            minimum_threshold,
            status: Self::classify(current_stock, reorder_level),
            average_cost,
            updated_at: Utc::now(),
        };

        self.store.add_inventory_item(item.clone()).await?;
        Ok(item)
    }

    // Substituição absoluta do estoque (o valor enviado É o novo
    // saldo, não um delta). Nenhum outro campo é recalculado.
    pub async fn set_stock(&self, id: Uuid, new_stock: Decimal) -> Result<InventoryItem, AppError> {
        self.store
            .update_inventory_stock(id, new_stock)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Item de estoque {}", id)))
    }

    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, AppError> {
        Ok(self.store.snapshot().await.inventory)
    }

    // Itens no nível de reposição ou abaixo, para o alerta do painel
    // de operações.
    pub async fn list_low_stock(&self) -> Result<Vec<InventoryItem>, AppError> {
        let snapshot = self.store.snapshot().await;
        Ok(snapshot
            .inventory
            .into_iter()
            .filter(|item| item.current_stock <= item.reorder_level)
            .collect())
    }
}
