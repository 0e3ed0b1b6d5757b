//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;

#[cfg(test)]
mod tests;

// Importações principais
use crate::config::AppState;
use crate::middleware::roles::super_admin_guard;

// Monta o router completo. Fica fora do main para os testes de
// integração subirem o mesmo app apontando para um store isolado.
fn create_router(app_state: AppState) -> Router {
    let farmer_routes = Router::new()
        .route(
            "/",
            post(handlers::farmers::create_farmer).get(handlers::farmers::list_farmers),
        )
        .route("/{farmer_id}", patch(handlers::farmers::update_farmer));

    let order_routes = Router::new()
        .route(
            "/",
            post(handlers::orders::create_order).get(handlers::orders::list_orders),
        )
        .route("/{order_id}/status", post(handlers::orders::update_order_status))
        .route(
            "/{order_id}/payment-status",
            post(handlers::orders::update_order_payment_status),
        );

    let inventory_routes = Router::new()
        .route(
            "/items",
            post(handlers::inventory::create_item).get(handlers::inventory::list_items),
        )
        .route(
            "/items/{item_id}/stock",
            put(handlers::inventory::update_stock),
        )
        .route("/low-stock", get(handlers::inventory::list_low_stock));

    let partner_routes = Router::new()
        .route(
            "/suppliers",
            post(handlers::partners::create_supplier).get(handlers::partners::list_suppliers),
        )
        .route(
            "/suppliers/{supplier_id}/settle",
            post(handlers::partners::settle_supplier),
        )
        .route(
            "/buyers",
            post(handlers::partners::create_buyer).get(handlers::partners::list_buyers),
        )
        .route(
            "/buyers/{buyer_id}/receipt",
            post(handlers::partners::record_buyer_receipt),
        );

    let payment_routes = Router::new()
        .route(
            "/",
            post(handlers::payments::create_payment).get(handlers::payments::list_payments),
        )
        .route(
            "/{payment_id}/reconcile",
            post(handlers::payments::reconcile_payment),
        );

    // Gestão de equipe é exclusiva do perfil SUPER_ADMIN
    let staff_routes = Router::new()
        .route(
            "/",
            post(handlers::staff::create_staff_member).get(handlers::staff::list_staff),
        )
        .route("/{staff_id}/attendance", post(handlers::staff::set_attendance))
        .layer(axum_middleware::from_fn(super_admin_guard));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/role-summary", get(handlers::dashboard::get_role_summary))
        .route(
            "/procurement-chart",
            get(handlers::dashboard::get_procurement_chart),
        )
        .route("/top-products", get(handlers::dashboard::get_top_products));

    let export_routes = Router::new()
        .route("/full", get(handlers::export::export_full))
        .route("/{collection}", get(handlers::export::export_collection));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/farmers", farmer_routes)
        .nest("/api/orders", order_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/partners", partner_routes)
        .nest("/api/payments", payment_routes)
        .nest("/api/staff", staff_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/export", export_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    let app = create_router(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
