// src/store/mod.rs

pub mod seed;

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::{
    farmers::{Farmer, FarmerUpdate},
    inventory::InventoryItem,
    operations::{Order, OrderPaymentStatus, OrderStatus},
    partners::{Buyer, BuyerUpdate, Supplier, SupplierUpdate},
    payments::{Payment, PaymentStatus},
    staff::{AttendanceStatus, StaffMember},
};

// O snapshot completo: as sete coleções, exatamente como são
// serializadas para o arquivo de persistência (um único objeto JSON
// com sete campos de array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub farmers: Vec<Farmer>,
    pub orders: Vec<Order>,
    pub inventory: Vec<InventoryItem>,
    pub suppliers: Vec<Supplier>,
    pub buyers: Vec<Buyer>,
    pub staff: Vec<StaffMember>,
    pub payments: Vec<Payment>,
}

// A fonte única de verdade da aplicação.
//
// Um único escritor lógico: toda mutação roda até o fim (alterar +
// persistir) segurando o write lock, então os snapshots gravados em
// disco nunca se intercalam. Não há dirty-checking: QUALQUER mutação
// reescreve o objeto inteiro no arquivo.
pub struct Store {
    path: PathBuf,
    state: RwLock<StoreSnapshot>,
}

impl Store {
    // Abre o snapshot persistido, se existir. Arquivo ausente semeia
    // os dados iniciais; arquivo ilegível é logado e cai para o seed
    // silenciosamente (sem erro visível ao usuário).
    pub async fn open(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let initial = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<StoreSnapshot>(&bytes) {
                Ok(snapshot) => {
                    tracing::info!("✅ Snapshot carregado de {}", path.display());
                    snapshot
                }
                Err(e) => {
                    tracing::warn!(
                        "🔥 Snapshot ilegível em {} ({}); usando dados de seed",
                        path.display(),
                        e
                    );
                    seed::seed_snapshot()
                }
            },
            Err(_) => {
                tracing::info!(
                    "Snapshot inexistente em {}; semeando dados iniciais",
                    path.display()
                );
                seed::seed_snapshot()
            }
        };

        Self {
            path,
            state: RwLock::new(initial),
        }
    }

    // Cópia do estado atual. Os consumidores leem o snapshot e nunca
    // mutam nada diretamente.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    // Reescreve o objeto inteiro no arquivo, sem verificação de qual
    // coleção mudou. Chamado dentro do write lock.
    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    // =========================================================================
    //  INSERÇÕES — o registro novo entra sempre na FRENTE da coleção
    // =========================================================================

    pub async fn add_farmer(&self, farmer: Farmer) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.farmers.insert(0, farmer);
        self.persist(&state).await
    }

    pub async fn add_order(&self, order: Order) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.orders.insert(0, order);
        self.persist(&state).await
    }

    pub async fn add_inventory_item(&self, item: InventoryItem) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.inventory.insert(0, item);
        self.persist(&state).await
    }

    pub async fn add_supplier(&self, supplier: Supplier) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.suppliers.insert(0, supplier);
        self.persist(&state).await
    }

    pub async fn add_buyer(&self, buyer: Buyer) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.buyers.insert(0, buyer);
        self.persist(&state).await
    }

    pub async fn add_staff_member(&self, member: StaffMember) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.staff.insert(0, member);
        self.persist(&state).await
    }

    pub async fn add_payment(&self, payment: Payment) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.payments.insert(0, payment);
        self.persist(&state).await
    }

    // =========================================================================
    //  ATUALIZAÇÕES PONTUAIS — id não encontrado deixa a coleção intacta
    //  e devolve None (o handler decide o 404)
    // =========================================================================

    // Merge raso do patch tipado sobre o produtor. Nenhum outro campo
    // e nenhum outro produtor é tocado.
    pub async fn update_farmer(
        &self,
        id: Uuid,
        patch: FarmerUpdate,
    ) -> Result<Option<Farmer>, AppError> {
        let mut state = self.state.write().await;
        let Some(farmer) = state.farmers.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        farmer.apply(patch);
        let updated = farmer.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    // Substitui APENAS o campo status, depois de validar a transição
    // contra a máquina de estados do pedido.
    pub async fn update_order_status(
        &self,
        id: Uuid,
        new_status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let mut state = self.state.write().await;
        let Some(order) = state.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        if !order.status.can_transition_to(new_status) {
            return Err(AppError::InvalidStatusTransition {
                from: format!("{:?}", order.status),
                to: format!("{:?}", new_status),
            });
        }
        order.status = new_status;
        let updated = order.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    pub async fn update_order_payment_status(
        &self,
        id: Uuid,
        payment_status: OrderPaymentStatus,
    ) -> Result<Option<Order>, AppError> {
        let mut state = self.state.write().await;
        let Some(order) = state.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        order.payment_status = payment_status;
        let updated = order.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    // Substituição ABSOLUTA do estoque atual (não é um delta).
    pub async fn update_inventory_stock(
        &self,
        id: Uuid,
        new_stock: Decimal,
    ) -> Result<Option<InventoryItem>, AppError> {
        let mut state = self.state.write().await;
        let Some(item) = state.inventory.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        item.current_stock = new_stock;
        let updated = item.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    pub async fn update_supplier(
        &self,
        id: Uuid,
        patch: SupplierUpdate,
    ) -> Result<Option<Supplier>, AppError> {
        let mut state = self.state.write().await;
        let Some(supplier) = state.suppliers.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        supplier.apply(patch);
        let updated = supplier.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    pub async fn update_buyer(
        &self,
        id: Uuid,
        patch: BuyerUpdate,
    ) -> Result<Option<Buyer>, AppError> {
        let mut state = self.state.write().await;
        let Some(buyer) = state.buyers.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        buyer.apply(patch);
        let updated = buyer.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    pub async fn update_staff_attendance(
        &self,
        id: Uuid,
        attendance: AttendanceStatus,
    ) -> Result<Option<StaffMember>, AppError> {
        let mut state = self.state.write().await;
        let Some(member) = state.staff.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        member.attendance = attendance;
        let updated = member.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }

    pub async fn update_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, AppError> {
        let mut state = self.state.write().await;
        let Some(payment) = state.payments.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        payment.status = status;
        let updated = payment.clone();
        self.persist(&state).await?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::farmers::FarmerStatus;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn novo_produtor() -> Farmer {
        Farmer {
            id: Uuid::new_v4(),
            name: "Ganesh Thorat".to_string(),
            phone: "+91 90000 12345".to_string(),
            village: "Chakan".to_string(),
            cluster: "Cluster Sul".to_string(),
            land_size: dec!(2.5),
            status: FarmerStatus::Active,
            outstanding_dues: dec!(100.00),
            share_capital: dec!(500.00),
            crops: vec!["Milho".to_string()],
            risk_score: 25,
            joined_at: Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap(),
        }
    }

    async fn store_temporario() -> (TempDir, Store) {
        let dir = TempDir::new().expect("tempdir");
        let store = Store::open(dir.path().join("store.json")).await;
        (dir, store)
    }

    #[tokio::test]
    async fn sem_snapshot_persistido_cai_no_seed() {
        let (_dir, store) = store_temporario().await;
        assert_eq!(store.snapshot().await, seed::seed_snapshot());
    }

    #[tokio::test]
    async fn snapshot_corrompido_cai_no_seed() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{ isso nao e json").expect("write");

        let store = Store::open(&path).await;
        assert_eq!(store.snapshot().await, seed::seed_snapshot());
    }

    #[tokio::test]
    async fn insercao_entra_na_frente_preservando_o_resto() {
        let (_dir, store) = store_temporario().await;
        let antes = store.snapshot().await.farmers;

        let novo = novo_produtor();
        store.add_farmer(novo.clone()).await.expect("add");

        let depois = store.snapshot().await.farmers;
        assert_eq!(depois.len(), antes.len() + 1);
        assert_eq!(depois[0], novo);
        assert_eq!(&depois[1..], &antes[..]);
    }

    #[tokio::test]
    async fn patch_altera_apenas_o_campo_enviado() {
        let (_dir, store) = store_temporario().await;
        let antes = store.snapshot().await.farmers;
        let alvo = antes[0].clone();

        store
            .update_farmer(
                alvo.id,
                FarmerUpdate {
                    outstanding_dues: Some(dec!(0)),
                    ..Default::default()
                },
            )
            .await
            .expect("update")
            .expect("produtor existe");

        let depois = store.snapshot().await.farmers;
        assert_eq!(depois[0].outstanding_dues, dec!(0));

        // Todos os demais campos do registro alvo ficam idênticos.
        let mut esperado = alvo.clone();
        esperado.outstanding_dues = dec!(0);
        assert_eq!(depois[0], esperado);

        // E nenhum outro produtor foi tocado.
        assert_eq!(&depois[1..], &antes[1..]);
    }

    #[tokio::test]
    async fn id_inexistente_nao_altera_nada() {
        let (_dir, store) = store_temporario().await;
        let antes = store.snapshot().await;

        let resultado = store
            .update_farmer(
                Uuid::new_v4(),
                FarmerUpdate {
                    outstanding_dues: Some(dec!(0)),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert!(resultado.is_none());
        assert_eq!(store.snapshot().await, antes);
    }

    #[tokio::test]
    async fn estoque_e_substituido_por_valor_absoluto() {
        let (_dir, store) = store_temporario().await;
        let item = store.snapshot().await.inventory[0].clone();
        assert_ne!(item.current_stock, dec!(7));

        let atualizado = store
            .update_inventory_stock(item.id, dec!(7))
            .await
            .expect("update")
            .expect("item existe");

        assert_eq!(atualizado.current_stock, dec!(7));

        // Segunda substituição ignora o valor anterior.
        let atualizado = store
            .update_inventory_stock(item.id, dec!(7))
            .await
            .expect("update")
            .expect("item existe");
        assert_eq!(atualizado.current_stock, dec!(7));
    }

    #[tokio::test]
    async fn mutacao_persiste_o_snapshot_inteiro_em_disco() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("store.json");

        let store = Store::open(&path).await;
        store.add_farmer(novo_produtor()).await.expect("add");

        // O arquivo gravado reproduz o estado em memória...
        let bytes = std::fs::read(&path).expect("snapshot gravado");
        let relido: StoreSnapshot = serde_json::from_slice(&bytes).expect("json válido");
        assert_eq!(relido, store.snapshot().await);

        // ...e uma nova instância apontada para o mesmo arquivo
        // rehidrata o mesmo estado.
        let reaberto = Store::open(&path).await;
        assert_eq!(reaberto.snapshot().await, store.snapshot().await);
    }

    #[tokio::test]
    async fn transicao_de_pedido_valida_a_maquina_de_estados() {
        let (_dir, store) = store_temporario().await;
        let pendente = store
            .snapshot()
            .await
            .orders
            .into_iter()
            .find(|o| o.status == OrderStatus::Pending)
            .expect("seed tem pedido pendente");

        // Salto ilegal: PENDING -> FULFILLED
        let erro = store
            .update_order_status(pendente.id, OrderStatus::Fulfilled)
            .await;
        assert!(matches!(
            erro,
            Err(AppError::InvalidStatusTransition { .. })
        ));

        // O status não mudou.
        let atual = store.snapshot().await;
        let pedido = atual.orders.iter().find(|o| o.id == pendente.id).unwrap();
        assert_eq!(pedido.status, OrderStatus::Pending);

        // Transição legal: PENDING -> APPROVED
        let aprovado = store
            .update_order_status(pendente.id, OrderStatus::Approved)
            .await
            .expect("transição legal")
            .expect("pedido existe");
        assert_eq!(aprovado.status, OrderStatus::Approved);
    }
}
