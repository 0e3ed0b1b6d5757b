// src/models/payments.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDirection {
    Inbound,  // Entrada de caixa (recebimento)
    Outbound, // Saída de caixa (pagamento)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    Upi,
    BankTransfer, // Vira "BANK_TRANSFER"
    Cheque,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Processing,
    Failed,
}

// Com quem o lançamento se relaciona. A referência é solta: o id
// não é validado contra a coleção correspondente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyType {
    Farmer,
    Supplier,
    Buyer,
    Staff,
}

// --- Structs ---

// Lançamento do livro-caixa. A coleção é append-only: lançamentos
// nunca são removidos, apenas conciliados (status -> COMPLETED).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,

    #[schema(value_type = String, format = Date, example = "2025-06-20")]
    pub payment_date: NaiveDate,

    pub entity_id: Uuid,
    #[schema(example = "Krishna Agro Inputs")]
    pub entity_name: String,
    pub entity_type: PartyType,

    pub direction: PaymentDirection,

    #[schema(example = "5000.00")]
    pub amount: Decimal,

    pub mode: PaymentMode,

    #[schema(example = "UTR20250620xxxx")]
    pub reference_number: Option<String>,

    pub status: PaymentStatus,

    #[schema(example = "Adiantamento de safra")]
    pub purpose: String,
}
