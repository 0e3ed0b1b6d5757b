// src/models/farmers.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FarmerStatus {
    Active,     // Sócio em dia
    Dormant,    // Sem movimentação recente
    Inactive,
    PendingKyc, // Vira "PENDING_KYC"
}

// --- Structs ---

// O produtor rural associado à cooperativa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Ramesh Patil")]
    pub name: String,

    #[schema(example = "+91 98220 11223")]
    pub phone: String,

    #[schema(example = "Wagholi")]
    pub village: String,

    // Agrupamento de aldeias usado pelos moderadores de campo
    #[schema(example = "Cluster Norte")]
    pub cluster: String,

    // Área cultivada, em acres
    #[schema(example = "4.5")]
    pub land_size: Decimal,

    pub status: FarmerStatus,

    #[schema(example = "1250.00")]
    pub outstanding_dues: Decimal,

    #[schema(example = "500.00")]
    pub share_capital: Decimal,

    #[schema(example = json!(["Soja", "Algodão"]))]
    pub crops: Vec<String>,

    // Pontuação de risco de crédito (0 a 100)
    #[schema(example = 35)]
    pub risk_score: i32,

    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Patch tipado ---
// Apenas os campos presentes no patch são aplicados; o resto do registro
// permanece intacto (merge raso, campo a campo).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub village: Option<String>,
    pub cluster: Option<String>,
    pub land_size: Option<Decimal>,
    pub status: Option<FarmerStatus>,
    pub outstanding_dues: Option<Decimal>,
    pub share_capital: Option<Decimal>,
    pub crops: Option<Vec<String>>,
    pub risk_score: Option<i32>,
}

impl Farmer {
    // Merge raso do patch sobre o registro existente.
    pub fn apply(&mut self, patch: FarmerUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(village) = patch.village {
            self.village = village;
        }
        if let Some(cluster) = patch.cluster {
            self.cluster = cluster;
        }
        if let Some(land_size) = patch.land_size {
            self.land_size = land_size;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(outstanding_dues) = patch.outstanding_dues {
            self.outstanding_dues = outstanding_dues;
        }
        if let Some(share_capital) = patch.share_capital {
            self.share_capital = share_capital;
        }
        if let Some(crops) = patch.crops {
            self.crops = crops;
        }
        if let Some(risk_score) = patch.risk_score {
            self.risk_score = risk_score;
        }
    }
}
