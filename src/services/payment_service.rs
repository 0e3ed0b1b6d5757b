// src/services/payment_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::payments::{Payment, PaymentDirection, PaymentMode, PaymentStatus, PartyType},
    store::Store,
};

#[derive(Clone)]
pub struct PaymentService {
    store: Arc<Store>,
}

impl PaymentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    // Lançamento manual no livro-caixa. A referência à entidade é
    // solta (id + nome + tipo), sem validação cruzada de existência.
    pub async fn record_payment(
        &self,
        payment_date: NaiveDate,
        entity_id: Uuid,
        entity_name: &str,
        entity_type: PartyType,
        direction: PaymentDirection,
        amount: Decimal,
        mode: PaymentMode,
        reference_number: Option<String>,
        status: PaymentStatus,
        purpose: &str,
    ) -> Result<Payment, AppError> {
        let payment = Payment {
            id: Uuid::new_v4(),
            payment_date,
            entity_id,
            entity_name: entity_name.to_string(),
            entity_type,
            direction,
            amount,
            mode,
            reference_number,
            status,
            purpose: purpose.to_string(),
        };

        self.store.add_payment(payment.clone()).await?;
        Ok(payment)
    }

    // Conciliação: apenas lançamentos PENDING ou PROCESSING podem ser
    // marcados como COMPLETED. Conciliar de novo (ou conciliar um
    // FAILED) é rejeitado como transição inválida.
    pub async fn reconcile(&self, id: Uuid) -> Result<Payment, AppError> {
        let snapshot = self.store.snapshot().await;
        let payment = snapshot
            .payments
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::ResourceNotFound(format!("Lançamento {}", id)))?;

        match payment.status {
            PaymentStatus::Pending | PaymentStatus::Processing => self
                .store
                .update_payment_status(id, PaymentStatus::Completed)
                .await?
                .ok_or_else(|| AppError::ResourceNotFound(format!("Lançamento {}", id))),
            other => Err(AppError::InvalidStatusTransition {
                from: format!("{:?}", other),
                to: format!("{:?}", PaymentStatus::Completed),
            }),
        }
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        Ok(self.store.snapshot().await.payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn service_temporario() -> (TempDir, PaymentService, Arc<Store>) {
        let dir = TempDir::new().expect("tempdir");
        let store = Arc::new(Store::open(dir.path().join("store.json")).await);
        (dir, PaymentService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn conciliacao_conclui_lancamento_pendente() {
        let (_dir, service, store) = service_temporario().await;

        let pendente = store
            .snapshot()
            .await
            .payments
            .into_iter()
            .find(|p| p.status == PaymentStatus::Pending)
            .expect("seed tem lançamento pendente");

        let conciliado = service.reconcile(pendente.id).await.expect("conciliação");
        assert_eq!(conciliado.status, PaymentStatus::Completed);
    }

    #[tokio::test]
    async fn conciliar_lancamento_falho_e_rejeitado() {
        let (_dir, service, store) = service_temporario().await;

        let falho = store
            .snapshot()
            .await
            .payments
            .into_iter()
            .find(|p| p.status == PaymentStatus::Failed)
            .expect("seed tem lançamento falho");

        let resultado = service.reconcile(falho.id).await;
        assert!(matches!(
            resultado,
            Err(AppError::InvalidStatusTransition { .. })
        ));

        // O lançamento continua como estava.
        let snapshot = store.snapshot().await;
        let lancamento = snapshot.payments.iter().find(|p| p.id == falho.id).unwrap();
        assert_eq!(lancamento.status, PaymentStatus::Failed);
    }
}
