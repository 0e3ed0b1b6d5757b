// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::middleware;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- FARMERS ---
        handlers::farmers::create_farmer,
        handlers::farmers::list_farmers,
        handlers::farmers::update_farmer,

        // --- ORDERS ---
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::update_order_status,
        handlers::orders::update_order_payment_status,

        // --- INVENTORY ---
        handlers::inventory::create_item,
        handlers::inventory::list_items,
        handlers::inventory::update_stock,
        handlers::inventory::list_low_stock,

        // --- PARTNERS ---
        handlers::partners::create_supplier,
        handlers::partners::list_suppliers,
        handlers::partners::settle_supplier,
        handlers::partners::create_buyer,
        handlers::partners::list_buyers,
        handlers::partners::record_buyer_receipt,

        // --- PAYMENTS ---
        handlers::payments::create_payment,
        handlers::payments::list_payments,
        handlers::payments::reconcile_payment,

        // --- STAFF ---
        handlers::staff::create_staff_member,
        handlers::staff::list_staff,
        handlers::staff::set_attendance,

        // --- DASHBOARD ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_role_summary,
        handlers::dashboard::get_procurement_chart,
        handlers::dashboard::get_top_products,

        // --- EXPORT ---
        handlers::export::export_collection,
        handlers::export::export_full,
    ),
    components(
        schemas(
            // --- FARMERS ---
            models::farmers::FarmerStatus,
            models::farmers::Farmer,
            models::farmers::FarmerUpdate,
            handlers::farmers::CreateFarmerPayload,

            // --- ORDERS ---
            models::operations::OrderStatus,
            models::operations::OrderPaymentStatus,
            models::operations::OrderLine,
            models::operations::Order,
            services::order_service::NewOrderLine,
            handlers::orders::CreateOrderPayload,
            handlers::orders::UpdateOrderStatusPayload,
            handlers::orders::UpdateOrderPaymentStatusPayload,

            // --- INVENTORY ---
            models::inventory::ItemStatus,
            models::inventory::InventoryItem,
            handlers::inventory::CreateItemPayload,
            handlers::inventory::UpdateStockPayload,

            // --- PARTNERS ---
            models::partners::PartnerStatus,
            models::partners::Supplier,
            models::partners::Buyer,
            handlers::partners::CreateSupplierPayload,
            handlers::partners::SettleSupplierPayload,
            handlers::partners::CreateBuyerPayload,
            handlers::partners::BuyerReceiptPayload,

            // --- PAYMENTS ---
            models::payments::PaymentDirection,
            models::payments::PaymentMode,
            models::payments::PaymentStatus,
            models::payments::PartyType,
            models::payments::Payment,
            handlers::payments::CreatePaymentPayload,

            // --- STAFF ---
            models::staff::AttendanceStatus,
            models::staff::StaffStatus,
            models::staff::StaffMember,
            handlers::staff::CreateStaffPayload,
            handlers::staff::AttendancePayload,

            // --- DASHBOARD ---
            models::dashboard::DashboardSummary,
            models::dashboard::ProcurementChartEntry,
            models::dashboard::TopProductEntry,
            models::dashboard::CeoSummary,
            models::dashboard::OperationsSummary,
            models::dashboard::ModeratorSummary,
            models::dashboard::AdminSummary,
            models::dashboard::RoleDashboard,

            // --- ROLES ---
            middleware::roles::Role,
        )
    ),
    tags(
        (name = "Farmers", description = "Cadastro e acompanhamento dos produtores associados"),
        (name = "Orders", description = "Pedidos de compra coletiva de insumos"),
        (name = "Inventory", description = "Armazém da cooperativa"),
        (name = "Partners", description = "Fornecedores e compradores"),
        (name = "Payments", description = "Livro-caixa e conciliação"),
        (name = "Staff", description = "Equipe da cooperativa (apenas SUPER_ADMIN)"),
        (name = "Dashboard", description = "Indicadores derivados do snapshot"),
        (name = "Export", description = "Exportação das coleções em CSV")
    )
)]
pub struct ApiDoc;
