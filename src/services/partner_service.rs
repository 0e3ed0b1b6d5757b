// src/services/partner_service.rs

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        partners::{Buyer, BuyerUpdate, PartnerStatus, Supplier, SupplierUpdate},
        payments::{Payment, PaymentDirection, PaymentMode, PaymentStatus, PartyType},
    },
    store::Store,
};

#[derive(Clone)]
pub struct PartnerService {
    store: Arc<Store>,
}

impl PartnerService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    // =========================================================================
    //  FORNECEDORES
    // =========================================================================

    pub async fn create_supplier(
        &self,
        name: &str,
        category: &str,
        contact_person: &str,
        phone: &str,
        gst_number: &str,
    ) -> Result<Supplier, AppError> {
        let supplier = Supplier {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            contact_person: contact_person.to_string(),
            phone: phone.to_string(),
            gst_number: gst_number.to_string(),
            outstanding_balance: Decimal::ZERO,
            status: PartnerStatus::Active,
        };

        self.store.add_supplier(supplier.clone()).await?;
        Ok(supplier)
    }

    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, AppError> {
        Ok(self.store.snapshot().await.suppliers)
    }

    // Liquida (total ou parcialmente) a fatura do fornecedor: abate o
    // saldo devedor (piso em zero) e registra a saída no livro-caixa.
    pub async fn settle_supplier(
        &self,
        id: Uuid,
        amount: Decimal,
        mode: PaymentMode,
        reference_number: Option<String>,
    ) -> Result<Supplier, AppError> {
        let snapshot = self.store.snapshot().await;
        let supplier = snapshot
            .suppliers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::ResourceNotFound(format!("Fornecedor {}", id)))?;

        let new_balance = (supplier.outstanding_balance - amount).max(Decimal::ZERO);

        let updated = self
            .store
            .update_supplier(
                id,
                SupplierUpdate {
                    outstanding_balance: Some(new_balance),
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Fornecedor {}", id)))?;

        self.store
            .add_payment(Payment {
                id: Uuid::new_v4(),
                payment_date: Utc::now().date_naive(),
                entity_id: supplier.id,
                entity_name: supplier.name.clone(),
                entity_type: PartyType::Supplier,
                direction: PaymentDirection::Outbound,
                amount,
                mode,
                reference_number,
                status: PaymentStatus::Completed,
                purpose: "Liquidação de fatura de fornecedor".to_string(),
            })
            .await?;

        Ok(updated)
    }

    // =========================================================================
    //  COMPRADORES
    // =========================================================================

    pub async fn create_buyer(
        &self,
        name: &str,
        buyer_type: &str,
        phone: &str,
        gst_number: &str,
    ) -> Result<Buyer, AppError> {
        let buyer = Buyer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            buyer_type: buyer_type.to_string(),
            phone: phone.to_string(),
            gst_number: gst_number.to_string(),
            outstanding_balance: Decimal::ZERO,
            status: PartnerStatus::Active,
        };

        self.store.add_buyer(buyer.clone()).await?;
        Ok(buyer)
    }

    pub async fn list_buyers(&self) -> Result<Vec<Buyer>, AppError> {
        Ok(self.store.snapshot().await.buyers)
    }

    // Registra o recebimento de um comprador: abate o saldo a receber
    // (piso em zero) e registra a entrada no livro-caixa.
    pub async fn record_buyer_receipt(
        &self,
        id: Uuid,
        amount: Decimal,
        mode: PaymentMode,
        reference_number: Option<String>,
    ) -> Result<Buyer, AppError> {
        let snapshot = self.store.snapshot().await;
        let buyer = snapshot
            .buyers
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::ResourceNotFound(format!("Comprador {}", id)))?;

        let new_balance = (buyer.outstanding_balance - amount).max(Decimal::ZERO);

        let updated = self
            .store
            .update_buyer(
                id,
                BuyerUpdate {
                    outstanding_balance: Some(new_balance),
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Comprador {}", id)))?;

        self.store
            .add_payment(Payment {
                id: Uuid::new_v4(),
                payment_date: Utc::now().date_naive(),
                entity_id: buyer.id,
                entity_name: buyer.name.clone(),
                entity_type: PartyType::Buyer,
                direction: PaymentDirection::Inbound,
                amount,
                mode,
                reference_number,
                status: PaymentStatus::Completed,
                purpose: "Recebimento de comprador".to_string(),
            })
            .await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    async fn service_temporario() -> (TempDir, PartnerService, Arc<Store>) {
        let dir = TempDir::new().expect("tempdir");
        let store = Arc::new(Store::open(dir.path().join("store.json")).await);
        (dir, PartnerService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn liquidacao_abate_saldo_e_registra_saida() {
        let (_dir, service, store) = service_temporario().await;

        let fornecedor = store.snapshot().await.suppliers[0].clone();
        assert_eq!(fornecedor.outstanding_balance, dec!(18500.00));

        let pagamentos_antes = store.snapshot().await.payments.len();

        let atualizado = service
            .settle_supplier(fornecedor.id, dec!(4000.00), PaymentMode::BankTransfer, None)
            .await
            .expect("liquidação");

        assert_eq!(atualizado.outstanding_balance, dec!(14500.00));

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.payments.len(), pagamentos_antes + 1);

        let lancamento = &snapshot.payments[0];
        assert_eq!(lancamento.entity_id, fornecedor.id);
        assert_eq!(lancamento.direction, PaymentDirection::Outbound);
        assert_eq!(lancamento.status, PaymentStatus::Completed);
        assert_eq!(lancamento.amount, dec!(4000.00));
    }

    #[tokio::test]
    async fn liquidacao_maior_que_o_saldo_tem_piso_em_zero() {
        let (_dir, service, store) = service_temporario().await;

        let fornecedor = store.snapshot().await.suppliers[0].clone();
        let atualizado = service
            .settle_supplier(fornecedor.id, dec!(999999.00), PaymentMode::Cash, None)
            .await
            .expect("liquidação");

        assert_eq!(atualizado.outstanding_balance, dec!(0));
    }

    #[tokio::test]
    async fn recebimento_de_comprador_abate_saldo_e_registra_entrada() {
        let (_dir, service, store) = service_temporario().await;

        let comprador = store.snapshot().await.buyers[0].clone();
        assert_eq!(comprador.outstanding_balance, dec!(42000.00));

        let atualizado = service
            .record_buyer_receipt(
                comprador.id,
                dec!(12000.00),
                PaymentMode::Upi,
                Some("UTR-TESTE".to_string()),
            )
            .await
            .expect("recebimento");

        assert_eq!(atualizado.outstanding_balance, dec!(30000.00));

        let lancamento = store.snapshot().await.payments[0].clone();
        assert_eq!(lancamento.direction, PaymentDirection::Inbound);
        assert_eq!(lancamento.entity_type, PartyType::Buyer);
    }
}
