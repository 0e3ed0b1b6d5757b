// src/models/operations.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

// Ciclo de vida do pedido de compra coletiva:
// PENDING -> APPROVED -> PARTIALLY_FULFILLED -> FULFILLED
// CANCELLED é alcançável a partir de qualquer estado não-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Approved,
    PartiallyFulfilled, // Vira "PARTIALLY_FULFILLED"
    Fulfilled,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Fulfilled | OrderStatus::Cancelled)
    }

    // A máquina de estados explícita: transições fora desta relação
    // são rejeitadas pelo serviço.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Approved) => true,
            (Approved, PartiallyFulfilled) => true,
            (Approved, Fulfilled) => true,
            (PartiallyFulfilled, Fulfilled) => true,
            (Pending | Approved | PartiallyFulfilled, Cancelled) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPaymentStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
}

// --- Structs ---

// Linha do pedido. O total da linha é sempre quantity * unitPrice,
// calculado pelo serviço no momento da criação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: Uuid,

    #[schema(example = "Semente de Soja JS-335")]
    pub product_name: String,

    #[schema(example = "10.0")]
    pub quantity: Decimal,

    #[schema(example = "85.00")]
    pub unit_price: Decimal,

    #[schema(example = "850.00")]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,

    // Referência desnormalizada: o id nunca é validado contra a coleção
    // de produtores, e o nome viaja junto com o pedido.
    pub farmer_id: Uuid,
    #[schema(example = "Ramesh Patil")]
    pub farmer_name: String,

    #[schema(value_type = String, format = Date, example = "2025-06-14")]
    pub order_date: NaiveDate,

    pub status: OrderStatus,

    #[schema(example = json!([{"productId": "550e8400-e29b-41d4-a716-446655440010", "productName": "Ureia 45kg", "quantity": 4, "unitPrice": 270.0, "total": 1080.0}]))]
    pub items: Vec<OrderLine>,

    #[schema(example = "1080.00")]
    pub total_amount: Decimal,

    pub payment_status: OrderPaymentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluxo_normal_de_transicoes() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Approved));
        assert!(OrderStatus::Approved.can_transition_to(OrderStatus::PartiallyFulfilled));
        assert!(OrderStatus::PartiallyFulfilled.can_transition_to(OrderStatus::Fulfilled));
        assert!(OrderStatus::Approved.can_transition_to(OrderStatus::Fulfilled));
    }

    #[test]
    fn cancelamento_permitido_antes_de_finalizar() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Approved.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::PartiallyFulfilled.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn estados_terminais_nao_transicionam() {
        assert!(!OrderStatus::Fulfilled.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Pending));
        assert!(OrderStatus::Fulfilled.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn saltos_ilegais_sao_rejeitados() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Fulfilled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::PartiallyFulfilled));
        assert!(!OrderStatus::Fulfilled.can_transition_to(OrderStatus::Pending));
        // Mesmo estado não é uma transição.
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }
}
