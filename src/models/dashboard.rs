// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Resumo Geral (Os Cards do Topo, iguais para todos os perfis)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    // Soma dos lançamentos com status COMPLETED
    pub total_revenue: Decimal,
    // Pedidos aguardando aprovação
    pub pending_orders: usize,
    // Soma de estoque atual * custo médio
    pub inventory_value: Decimal,
    // Produtores com status ACTIVE
    pub active_members: usize,
}

// 2. Gráfico de Compras Coletivas (Últimos 30 dias)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementChartEntry {
    // Data no formato YYYY-MM-DD
    pub date: String,
    pub total: Decimal,
}

// 3. Produtos mais pedidos
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub product_name: String,
    pub total_quantity: Decimal,
    pub total_value: Decimal,
}

// --- Resumos por Perfil ---
// Cada papel do splash enxerga um recorte diferente das coleções.

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CeoSummary {
    pub total_revenue: Decimal,
    pub active_members: usize,
    pub total_outstanding_dues: Decimal,
    pub total_share_capital: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationsSummary {
    pub pending_orders: usize,
    pub open_order_value: Decimal,
    pub inventory_value: Decimal,
    pub low_stock_items: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModeratorSummary {
    pub registered_farmers: usize,
    pub pending_kyc: usize,
    pub villages_covered: usize,
    pub high_risk_farmers: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_staff: usize,
    pub staff_present: usize,
    pub inbound_completed: Decimal,
    pub outbound_completed: Decimal,
    pub failed_payments: usize,
}

// Resposta do endpoint /role-summary: o recorte correspondente
// ao papel enviado no cabeçalho x-role.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RoleDashboard {
    Ceo(CeoSummary),
    Operations(OperationsSummary),
    Moderator(ModeratorSummary),
    Admin(AdminSummary),
}
