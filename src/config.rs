// src/config.rs

use std::env;
use std::sync::Arc;

use crate::{
    middleware::i18n::I18nStore,
    services::{
        DashboardService, ExportService, FarmerService, InventoryService, OrderService,
        PartnerService, PaymentService, StaffService,
    },
    store::Store,
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub i18n_store: Arc<I18nStore>,

    pub farmer_service: FarmerService,
    pub order_service: OrderService,
    pub inventory_service: InventoryService,
    pub partner_service: PartnerService,
    pub payment_service: PaymentService,
    pub staff_service: StaffService,
    pub dashboard_service: DashboardService,
    pub export_service: ExportService,
}

impl AppState {
    // Carrega as configurações e monta o estado da aplicação.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Caminho do snapshot persistido (as sete coleções em um único
        // objeto JSON). Sem a variável, usa o arquivo local padrão.
        let store_path =
            env::var("STORE_PATH").unwrap_or_else(|_| "fpo-store.json".to_string());

        let store = Arc::new(Store::open(store_path).await);
        tracing::info!("✅ Store inicializado com sucesso!");

        // --- Monta o gráfico de dependências ---
        Ok(Self::from_store(store))
    }

    // Montagem a partir de um Store já aberto. Os testes usam este
    // construtor para apontar cada instância para um arquivo isolado.
    pub fn from_store(store: Arc<Store>) -> Self {
        let i18n_store = Arc::new(I18nStore::new());

        let farmer_service = FarmerService::new(store.clone());
        let order_service = OrderService::new(store.clone());
        let inventory_service = InventoryService::new(store.clone());
        let partner_service = PartnerService::new(store.clone());
        let payment_service = PaymentService::new(store.clone());
        let staff_service = StaffService::new(store.clone());
        let dashboard_service = DashboardService::new(store.clone());
        let export_service = ExportService::new(store.clone());

        Self {
            store,
            i18n_store,
            farmer_service,
            order_service,
            inventory_service,
            partner_service,
            payment_service,
            staff_service,
            dashboard_service,
            export_service,
        }
    }
}
