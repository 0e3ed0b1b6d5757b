// src/models/partners.rs

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerStatus {
    Active,
    Inactive,
}

// --- Structs ---

// Fornecedor de insumos da cooperativa. Coleção append-only: ninguém
// é removido, apenas marcado como INACTIVE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,

    #[schema(example = "Krishna Agro Inputs")]
    pub name: String,

    #[schema(example = "Fertilizantes")]
    pub category: String,

    #[schema(example = "Suresh Kumar")]
    pub contact_person: String,

    #[schema(example = "+91 99887 66554")]
    pub phone: String,

    // Registro fiscal (GSTIN)
    #[schema(example = "27AABCU9603R1ZM")]
    pub gst_number: String,

    // Quanto a cooperativa ainda deve a este fornecedor
    #[schema(example = "18500.00")]
    pub outstanding_balance: Decimal,

    pub status: PartnerStatus,
}

// Comprador da produção agregada (atacadistas, processadoras).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: Uuid,

    #[schema(example = "Maharashtra Oils Ltd")]
    pub name: String,

    #[schema(example = "Processadora")]
    pub buyer_type: String,

    #[schema(example = "+91 98111 22334")]
    pub phone: String,

    #[schema(example = "27AALCS2781A1ZO")]
    pub gst_number: String,

    // Quanto este comprador ainda deve à cooperativa
    #[schema(example = "42000.00")]
    pub outstanding_balance: Decimal,

    pub status: PartnerStatus,
}

// --- Patches tipados ---

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub gst_number: Option<String>,
    pub outstanding_balance: Option<Decimal>,
    pub status: Option<PartnerStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyerUpdate {
    pub name: Option<String>,
    pub buyer_type: Option<String>,
    pub phone: Option<String>,
    pub gst_number: Option<String>,
    pub outstanding_balance: Option<Decimal>,
    pub status: Option<PartnerStatus>,
}

impl Supplier {
    pub fn apply(&mut self, patch: SupplierUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(contact_person) = patch.contact_person {
            self.contact_person = contact_person;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(gst_number) = patch.gst_number {
            self.gst_number = gst_number;
        }
        if let Some(outstanding_balance) = patch.outstanding_balance {
            self.outstanding_balance = outstanding_balance;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl Buyer {
    pub fn apply(&mut self, patch: BuyerUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(buyer_type) = patch.buyer_type {
            self.buyer_type = buyer_type;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(gst_number) = patch.gst_number {
            self.gst_number = gst_number;
        }
        if let Some(outstanding_balance) = patch.outstanding_balance {
            self.outstanding_balance = outstanding_balance;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
