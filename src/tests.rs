//! Testes de integração da API (sobem o app real apontando para um
//! snapshot isolado em diretório temporário).

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::AppState;
use crate::create_router;
use crate::store::Store;

struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Falha ao criar tempdir");
        let store_path = temp_dir.path().join("store.json");

        let store = Arc::new(Store::open(store_path).await);
        let state = AppState::from_store(store);
        let app = create_router(state);

        // Porta aleatória para os testes rodarem em paralelo
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Falha no bind");
        let addr = listener.local_addr().expect("Falha ao obter o endereço");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Espera o servidor subir
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[tokio::test]
async fn health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn cadastro_de_produtor_entra_na_frente_da_lista() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/farmers"))
        .json(&json!({
            "name": "Ganesh Thorat",
            "phone": "+91 90000 12345",
            "village": "Chakan",
            "cluster": "Cluster Sul",
            "landSize": 2.5,
            "crops": ["Milho"],
            "shareCapital": 500.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let criado: Value = resp.json().await.unwrap();
    // Sem status explícito o cadastro entra como PENDING_KYC
    assert_eq!(criado["status"], "PENDING_KYC");

    let resp = fixture
        .client
        .get(fixture.url("/api/farmers"))
        .send()
        .await
        .unwrap();
    let lista: Vec<Value> = resp.json().await.unwrap();

    // Seed tem 6 produtores; o novo entra na posição 0
    assert_eq!(lista.len(), 7);
    assert_eq!(lista[0]["name"], "Ganesh Thorat");
    assert_eq!(lista[1]["name"], "Ramesh Patil");
}

#[tokio::test]
async fn payload_invalido_devolve_detalhes_por_campo() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/farmers"))
        .json(&json!({
            "name": "",
            "phone": "+91 90000 12345",
            "village": "Chakan",
            "cluster": "Cluster Sul",
            "landSize": 1.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn patch_de_produtor_inexistente_devolve_404() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .patch(fixture.url("/api/farmers/00000000-0000-0000-0000-000000000000"))
        .header("accept-language", "pt-BR")
        .json(&json!({ "outstandingDues": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Mensagem resolvida no idioma do cliente
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Recurso não encontrado"));
}

#[tokio::test]
async fn transicao_ilegal_de_pedido_devolve_422() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/orders"))
        .json(&json!({
            "farmerId": "f0000000-0000-0000-0000-000000000001",
            "farmerName": "Ramesh Patil",
            "items": [
                { "productId": "b0000000-0000-0000-0000-000000000001",
                  "productName": "Ureia 45kg", "quantity": 4.0, "unitPrice": 270.0 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let pedido: Value = resp.json().await.unwrap();
    assert_eq!(pedido["status"], "PENDING");
    assert_eq!(pedido["totalAmount"].as_f64().unwrap(), 1080.0);
    let pedido_id = pedido["id"].as_str().unwrap().to_string();

    // PENDING -> FULFILLED é um salto ilegal
    let resp = fixture
        .client
        .post(fixture.url(&format!("/api/orders/{}/status", pedido_id)))
        .json(&json!({ "status": "FULFILLED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    // PENDING -> APPROVED é legal
    let resp = fixture
        .client
        .post(fixture.url(&format!("/api/orders/{}/status", pedido_id)))
        .json(&json!({ "status": "APPROVED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let pedido: Value = resp.json().await.unwrap();
    assert_eq!(pedido["status"], "APPROVED");
}

#[tokio::test]
async fn estoque_e_substituido_pelo_valor_enviado() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/inventory/items"))
        .send()
        .await
        .unwrap();
    let itens: Vec<Value> = resp.json().await.unwrap();
    let item_id = itens[0]["id"].as_str().unwrap().to_string();

    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/inventory/items/{}/stock", item_id)))
        .json(&json!({ "currentStock": 7.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let item: Value = resp.json().await.unwrap();
    assert_eq!(item["currentStock"].as_f64().unwrap(), 7.0);
}

#[tokio::test]
async fn resumo_do_dashboard_deriva_do_seed() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/dashboard/summary"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resumo: Value = resp.json().await.unwrap();
    // Lançamentos COMPLETED do seed: 2800 + 10000 + 18000
    assert_eq!(resumo["totalRevenue"].as_f64().unwrap(), 30800.0);
    assert_eq!(resumo["pendingOrders"].as_u64().unwrap(), 1);
    // Soma de (estoque atual * custo médio) do seed
    assert_eq!(resumo["inventoryValue"].as_f64().unwrap(), 119750.0);
    assert_eq!(resumo["activeMembers"].as_u64().unwrap(), 3);
}

#[tokio::test]
async fn role_summary_exige_o_cabecalho_x_role() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/dashboard/role-summary"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = fixture
        .client
        .get(fixture.url("/api/dashboard/role-summary"))
        .header("x-role", "FIELD_MODERATOR")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resumo: Value = resp.json().await.unwrap();
    assert_eq!(resumo["registeredFarmers"].as_u64().unwrap(), 6);
    assert_eq!(resumo["pendingKyc"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn rotas_de_equipe_sao_exclusivas_do_super_admin() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/staff"))
        .header("x-role", "CEO")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    let resp = fixture
        .client
        .get(fixture.url("/api/staff"))
        .header("x-role", "SUPER_ADMIN")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let equipe: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(equipe.len(), 5);
}

#[tokio::test]
async fn conciliacao_conclui_o_lancamento() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/payments"))
        .send()
        .await
        .unwrap();
    let lancamentos: Vec<Value> = resp.json().await.unwrap();
    let pendente = lancamentos
        .iter()
        .find(|p| p["status"] == "PENDING")
        .expect("seed tem lançamento pendente");
    let id = pendente["id"].as_str().unwrap().to_string();

    let resp = fixture
        .client
        .post(fixture.url(&format!("/api/payments/{}/reconcile", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let conciliado: Value = resp.json().await.unwrap();
    assert_eq!(conciliado["status"], "COMPLETED");
}

#[tokio::test]
async fn liquidacao_de_fornecedor_abate_o_saldo() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url(
            "/api/partners/suppliers/c0000000-0000-0000-0000-000000000001/settle",
        ))
        .json(&json!({ "amount": 4000.0, "mode": "BANK_TRANSFER" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fornecedor: Value = resp.json().await.unwrap();
    assert_eq!(fornecedor["outstandingBalance"].as_f64().unwrap(), 14500.0);

    // A saída aparece no topo do livro-caixa
    let resp = fixture
        .client
        .get(fixture.url("/api/payments"))
        .send()
        .await
        .unwrap();
    let lancamentos: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(lancamentos[0]["direction"], "OUTBOUND");
    assert_eq!(lancamentos[0]["entityName"], "Krishna Agro Inputs");
}

#[tokio::test]
async fn export_csv_baixa_como_anexo() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/export/farmers"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("farmers.csv"));

    let corpo = resp.text().await.unwrap();
    let cabecalho = corpo.lines().next().unwrap();
    assert!(cabecalho.contains("village"));
    // Cabeçalho + 6 produtores do seed
    assert_eq!(corpo.lines().count(), 7);

    // Coleção desconhecida
    let resp = fixture
        .client
        .get(fixture.url("/api/export/documents"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn export_completo_traz_as_sete_colecoes_do_seed() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/export/full"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let documentos: Value = resp.json().await.unwrap();
    let mapa = documentos.as_object().unwrap();
    assert_eq!(mapa.len(), 7);
    assert!(mapa.contains_key("farmers"));
    assert!(mapa.contains_key("payments"));
}
