// src/services/dashboard_service.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    middleware::roles::Role,
    models::{
        dashboard::{
            AdminSummary, CeoSummary, DashboardSummary, ModeratorSummary, OperationsSummary,
            ProcurementChartEntry, RoleDashboard, TopProductEntry,
        },
        farmers::FarmerStatus,
        operations::OrderStatus,
        payments::{PaymentDirection, PaymentStatus},
        staff::{AttendanceStatus, StaffStatus},
    },
    store::{Store, StoreSnapshot},
};

// =============================================================================
//  FUNÇÕES PURAS — recalculadas a cada chamada, sem cache/memoização.
//  Todas as métricas são derivadas filtrando/somando o snapshot atual.
// =============================================================================

// Os quatro cards do topo, iguais para todos os perfis:
// - receita total    = soma dos lançamentos COMPLETED
// - pedidos pendentes = contagem de pedidos PENDING
// - valor de estoque = soma de (estoque atual * custo médio)
// - sócios ativos    = contagem de produtores ACTIVE
pub fn compute_summary(snapshot: &StoreSnapshot) -> DashboardSummary {
    let total_revenue = snapshot
        .payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .map(|p| p.amount)
        .sum();

    let pending_orders = snapshot
        .orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();

    let inventory_value = snapshot
        .inventory
        .iter()
        .map(|item| item.current_stock * item.average_cost)
        .sum();

    let active_members = snapshot
        .farmers
        .iter()
        .filter(|f| f.status == FarmerStatus::Active)
        .count();

    DashboardSummary {
        total_revenue,
        pending_orders,
        inventory_value,
        active_members,
    }
}

pub fn compute_ceo_summary(snapshot: &StoreSnapshot) -> CeoSummary {
    let summary = compute_summary(snapshot);

    CeoSummary {
        total_revenue: summary.total_revenue,
        active_members: summary.active_members,
        total_outstanding_dues: snapshot.farmers.iter().map(|f| f.outstanding_dues).sum(),
        total_share_capital: snapshot.farmers.iter().map(|f| f.share_capital).sum(),
    }
}

pub fn compute_operations_summary(snapshot: &StoreSnapshot) -> OperationsSummary {
    let summary = compute_summary(snapshot);

    // Valor dos pedidos ainda em andamento (nem concluídos, nem
    // cancelados).
    let open_order_value = snapshot
        .orders
        .iter()
        .filter(|o| !o.status.is_terminal())
        .map(|o| o.total_amount)
        .sum();

    let low_stock_items = snapshot
        .inventory
        .iter()
        .filter(|item| item.current_stock <= item.reorder_level)
        .count();

    OperationsSummary {
        pending_orders: summary.pending_orders,
        open_order_value,
        inventory_value: summary.inventory_value,
        low_stock_items,
    }
}

pub fn compute_moderator_summary(snapshot: &StoreSnapshot) -> ModeratorSummary {
    let villages: std::collections::HashSet<&str> = snapshot
        .farmers
        .iter()
        .map(|f| f.village.as_str())
        .collect();

    ModeratorSummary {
        registered_farmers: snapshot.farmers.len(),
        pending_kyc: snapshot
            .farmers
            .iter()
            .filter(|f| f.status == FarmerStatus::PendingKyc)
            .count(),
        villages_covered: villages.len(),
        // Ponto de corte usado pelos moderadores para priorizar visitas
        high_risk_farmers: snapshot.farmers.iter().filter(|f| f.risk_score >= 70).count(),
    }
}

pub fn compute_admin_summary(snapshot: &StoreSnapshot) -> AdminSummary {
    let completed = |direction: PaymentDirection| -> Decimal {
        snapshot
            .payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed && p.direction == direction)
            .map(|p| p.amount)
            .sum()
    };

    AdminSummary {
        total_staff: snapshot
            .staff
            .iter()
            .filter(|m| m.status == StaffStatus::Active)
            .count(),
        staff_present: snapshot
            .staff
            .iter()
            .filter(|m| m.status == StaffStatus::Active && m.attendance == AttendanceStatus::Present)
            .count(),
        inbound_completed: completed(PaymentDirection::Inbound),
        outbound_completed: completed(PaymentDirection::Outbound),
        failed_payments: snapshot
            .payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Failed)
            .count(),
    }
}

// =============================================================================
//  O SERVIÇO — lê o snapshot e delega para as funções puras
// =============================================================================

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<Store>,
}

impl DashboardService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn get_summary(&self) -> Result<DashboardSummary, AppError> {
        Ok(compute_summary(&self.store.snapshot().await))
    }

    pub async fn get_role_summary(&self, role: Role) -> Result<RoleDashboard, AppError> {
        let snapshot = self.store.snapshot().await;

        Ok(match role {
            Role::Ceo => RoleDashboard::Ceo(compute_ceo_summary(&snapshot)),
            Role::OperationsAdmin => {
                RoleDashboard::Operations(compute_operations_summary(&snapshot))
            }
            Role::FieldModerator => RoleDashboard::Moderator(compute_moderator_summary(&snapshot)),
            Role::SuperAdmin => RoleDashboard::Admin(compute_admin_summary(&snapshot)),
        })
    }

    // Totais de pedidos por dia, últimos 30 dias (apenas dias com
    // movimento).
    pub async fn get_procurement_chart(&self) -> Result<Vec<ProcurementChartEntry>, AppError> {
        let snapshot = self.store.snapshot().await;
        let cutoff = Utc::now().date_naive() - Duration::days(30);

        let mut by_day: BTreeMap<chrono::NaiveDate, Decimal> = BTreeMap::new();
        for order in snapshot
            .orders
            .iter()
            .filter(|o| o.order_date >= cutoff && o.status != OrderStatus::Cancelled)
        {
            *by_day.entry(order.order_date).or_insert(Decimal::ZERO) += order.total_amount;
        }

        Ok(by_day
            .into_iter()
            .map(|(date, total)| ProcurementChartEntry {
                date: date.format("%Y-%m-%d").to_string(),
                total,
            })
            .collect())
    }

    // Ranking dos produtos mais pedidos (por quantidade), top 5.
    pub async fn get_top_products(&self) -> Result<Vec<TopProductEntry>, AppError> {
        let snapshot = self.store.snapshot().await;

        let mut by_product: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
        for order in snapshot
            .orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
        {
            for line in &order.items {
                let entry = by_product
                    .entry(line.product_name.clone())
                    .or_insert((Decimal::ZERO, Decimal::ZERO));
                entry.0 += line.quantity;
                entry.1 += line.total;
            }
        }

        let mut ranking: Vec<TopProductEntry> = by_product
            .into_iter()
            .map(|(product_name, (total_quantity, total_value))| TopProductEntry {
                product_name,
                total_quantity,
                total_value,
            })
            .collect();

        ranking.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
        ranking.truncate(5);
        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        farmers::Farmer,
        inventory::{InventoryItem, ItemStatus},
        operations::{Order, OrderPaymentStatus},
        payments::{Payment, PaymentMode, PartyType},
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn produtor(status: FarmerStatus) -> Farmer {
        Farmer {
            id: Uuid::new_v4(),
            name: "Produtor Teste".to_string(),
            phone: String::new(),
            village: "Wagholi".to_string(),
            cluster: "Cluster Norte".to_string(),
            land_size: dec!(1),
            status,
            outstanding_dues: dec!(0),
            share_capital: dec!(0),
            crops: vec![],
            risk_score: 10,
            joined_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn pedido(status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            farmer_id: Uuid::new_v4(),
            farmer_name: "Produtor Teste".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status,
            items: vec![],
            total_amount: dec!(0),
            payment_status: OrderPaymentStatus::Unpaid,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn item(stock: Decimal, cost: Decimal) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Item Teste".to_string(),
            category: "Teste".to_string(),
            current_stock: stock,
            unit: "unidade".to_string(),
            reorder_level: dec!(0),
            minimum_threshold: dec!(0),
            status: ItemStatus::InStock,
            average_cost: cost,
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn lancamento(amount: Decimal, status: PaymentStatus) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            payment_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            entity_id: Uuid::new_v4(),
            entity_name: "Entidade Teste".to_string(),
            entity_type: PartyType::Farmer,
            direction: PaymentDirection::Inbound,
            amount,
            mode: PaymentMode::Cash,
            reference_number: None,
            status,
            purpose: String::new(),
        }
    }

    #[test]
    fn metricas_do_cenario_de_referencia() {
        // Lançamentos [100 COMPLETED, 50 PENDING], pedidos [PENDING,
        // FULFILLED], estoque [{10 x 5}], produtores [ACTIVE, DORMANT]
        // => { 100, 1, 50, 1 }
        let snapshot = StoreSnapshot {
            farmers: vec![
                produtor(FarmerStatus::Active),
                produtor(FarmerStatus::Dormant),
            ],
            orders: vec![pedido(OrderStatus::Pending), pedido(OrderStatus::Fulfilled)],
            inventory: vec![item(dec!(10), dec!(5))],
            suppliers: vec![],
            buyers: vec![],
            staff: vec![],
            payments: vec![
                lancamento(dec!(100), PaymentStatus::Completed),
                lancamento(dec!(50), PaymentStatus::Pending),
            ],
        };

        let summary = compute_summary(&snapshot);
        assert_eq!(summary.total_revenue, dec!(100));
        assert_eq!(summary.pending_orders, 1);
        assert_eq!(summary.inventory_value, dec!(50));
        assert_eq!(summary.active_members, 1);
    }

    #[test]
    fn metricas_de_colecoes_vazias_sao_zero() {
        let snapshot = StoreSnapshot {
            farmers: vec![],
            orders: vec![],
            inventory: vec![],
            suppliers: vec![],
            buyers: vec![],
            staff: vec![],
            payments: vec![],
        };

        let summary = compute_summary(&snapshot);
        assert_eq!(summary.total_revenue, dec!(0));
        assert_eq!(summary.pending_orders, 0);
        assert_eq!(summary.inventory_value, dec!(0));
        assert_eq!(summary.active_members, 0);
    }
}
