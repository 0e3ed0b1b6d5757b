// src/services/order_service.rs

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::operations::{Order, OrderLine, OrderPaymentStatus, OrderStatus},
    store::Store,
};

// Linha de pedido como chega do cliente: sem total. O total da linha
// e o total do pedido são sempre recalculados aqui no serviço.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderLine {
    pub product_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ureia 45kg")]
    pub product_name: String,

    #[schema(example = "4.0")]
    pub quantity: Decimal,

    #[schema(example = "270.00")]
    pub unit_price: Decimal,
}

#[derive(Clone)]
pub struct OrderService {
    store: Arc<Store>,
}

impl OrderService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    // Cria o pedido já na primeira etapa (PENDING). A referência ao
    // produtor é solta: id + nome desnormalizado, sem validação de
    // existência (as coleções não têm integridade referencial).
    pub async fn create_order(
        &self,
        farmer_id: Uuid,
        farmer_name: &str,
        order_date: Option<NaiveDate>,
        lines: Vec<NewOrderLine>,
    ) -> Result<Order, AppError> {
        let now = Utc::now();

        let items: Vec<OrderLine> = lines
            .into_iter()
            .map(|line| OrderLine {
                product_id: line.product_id,
                product_name: line.product_name,
                total: line.quantity * line.unit_price,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        let total_amount: Decimal = items.iter().map(|line| line.total).sum();

        let order = Order {
            id: Uuid::new_v4(),
            farmer_id,
            farmer_name: farmer_name.to_string(),
            order_date: order_date.unwrap_or_else(|| now.date_naive()),
            status: OrderStatus::Pending,
            items,
            total_amount,
            payment_status: OrderPaymentStatus::Unpaid,
            created_at: now,
            updated_at: now,
        };

        self.store.add_order(order.clone()).await?;
        Ok(order)
    }

    // Move o pedido na máquina de estados. Transições ilegais voltam
    // como InvalidStatusTransition (422), decididas dentro do store.
    pub async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, AppError> {
        self.store
            .update_order_status(id, status)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Pedido {}", id)))
    }

    pub async fn update_payment_status(
        &self,
        id: Uuid,
        payment_status: OrderPaymentStatus,
    ) -> Result<Order, AppError> {
        self.store
            .update_order_payment_status(id, payment_status)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Pedido {}", id)))
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.store.snapshot().await.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[tokio::test]
    async fn totais_sao_calculados_no_servico() {
        let dir = TempDir::new().expect("tempdir");
        let store = Arc::new(Store::open(dir.path().join("store.json")).await);
        let service = OrderService::new(store);

        let order = service
            .create_order(
                Uuid::new_v4(),
                "Ramesh Patil",
                None,
                vec![
                    NewOrderLine {
                        product_id: Uuid::new_v4(),
                        product_name: "Ureia 45kg".to_string(),
                        quantity: dec!(4),
                        unit_price: dec!(270.00),
                    },
                    NewOrderLine {
                        product_id: Uuid::new_v4(),
                        product_name: "DAP 50kg".to_string(),
                        quantity: dec!(2),
                        unit_price: dec!(1400.00),
                    },
                ],
            )
            .await
            .expect("pedido criado");

        assert_eq!(order.items[0].total, dec!(1080.00));
        assert_eq!(order.items[1].total, dec!(2800.00));
        assert_eq!(order.total_amount, dec!(3880.00));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, OrderPaymentStatus::Unpaid);
    }
}
