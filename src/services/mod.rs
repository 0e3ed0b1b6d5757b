pub mod dashboard_service;
pub mod export_service;
pub mod farmer_service;
pub mod inventory_service;
pub mod order_service;
pub mod partner_service;
pub mod payment_service;
pub mod staff_service;

pub use dashboard_service::DashboardService;
pub use export_service::ExportService;
pub use farmer_service::FarmerService;
pub use inventory_service::InventoryService;
pub use order_service::OrderService;
pub use partner_service::PartnerService;
pub use payment_service::PaymentService;
pub use staff_service::StaffService;
