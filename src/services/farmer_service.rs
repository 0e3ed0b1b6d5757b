// src/services/farmer_service.rs

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::farmers::{Farmer, FarmerStatus, FarmerUpdate},
    store::Store,
};

#[derive(Clone)]
pub struct FarmerService {
    store: Arc<Store>,
}

impl FarmerService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    // Cadastra um novo produtor. O id é gerado AQUI (UUID v4), nunca
    // pelo cliente. Sem status explícito, o produtor entra como
    // PENDING_KYC até o moderador de campo validar os documentos.
    pub async fn register_farmer(
        &self,
        name: &str,
        phone: &str,
        village: &str,
        cluster: &str,
        land_size: Decimal,
        crops: Vec<String>,
        share_capital: Decimal,
        status: Option<FarmerStatus>,
    ) -> Result<Farmer, AppError> {
        let now = Utc::now();

        let farmer = Farmer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            village: village.to_string(),
            cluster: cluster.to_string(),
            land_size,
            status: status.unwrap_or(FarmerStatus::PendingKyc),
            outstanding_dues: Decimal::ZERO,
            share_capital,
            crops,
            // Pontuação neutra até a primeira avaliação de crédito
            risk_score: 50,
            joined_at: now,
            updated_at: now,
        };

        self.store.add_farmer(farmer.clone()).await?;
        Ok(farmer)
    }

    pub async fn update_farmer(&self, id: Uuid, patch: FarmerUpdate) -> Result<Farmer, AppError> {
        self.store
            .update_farmer(id, patch)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Produtor {}", id)))
    }

    pub async fn list_farmers(&self) -> Result<Vec<Farmer>, AppError> {
        Ok(self.store.snapshot().await.farmers)
    }
}
