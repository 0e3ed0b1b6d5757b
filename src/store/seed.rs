// src/store/seed.rs

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::uuid;

use crate::models::{
    farmers::{Farmer, FarmerStatus},
    inventory::{InventoryItem, ItemStatus},
    operations::{Order, OrderLine, OrderPaymentStatus, OrderStatus},
    partners::{Buyer, PartnerStatus, Supplier},
    payments::{Payment, PaymentDirection, PaymentMode, PaymentStatus, PartyType},
    staff::{AttendanceStatus, StaffMember, StaffStatus},
};

use super::StoreSnapshot;

// Datas fixas: o snapshot de seed precisa ser determinístico para que
// duas chamadas produzam coleções idênticas (comparáveis nos testes).
fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("timestamp fixo de seed inválido")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data fixa de seed inválida")
}

// O conjunto inicial das sete coleções, usado quando não existe
// snapshot persistido (ou quando o existente não pôde ser lido).
pub fn seed_snapshot() -> StoreSnapshot {
    StoreSnapshot {
        farmers: seed_farmers(),
        orders: seed_orders(),
        inventory: seed_inventory(),
        suppliers: seed_suppliers(),
        buyers: seed_buyers(),
        staff: seed_staff(),
        payments: seed_payments(),
    }
}

fn seed_farmers() -> Vec<Farmer> {
    vec![
        Farmer {
            id: uuid!("f0000000-0000-0000-0000-000000000001"),
            name: "Ramesh Patil".to_string(),
            phone: "+91 98220 11223".to_string(),
            village: "Wagholi".to_string(),
            cluster: "Cluster Norte".to_string(),
            land_size: dec!(4.5),
            status: FarmerStatus::Active,
            outstanding_dues: dec!(1250.00),
            share_capital: dec!(500.00),
            crops: vec!["Soja".to_string(), "Algodão".to_string()],
            risk_score: 35,
            joined_at: ts(2023, 6, 12),
            updated_at: ts(2025, 4, 2),
        },
        Farmer {
            id: uuid!("f0000000-0000-0000-0000-000000000002"),
            name: "Sunita Jadhav".to_string(),
            phone: "+91 99230 44556".to_string(),
            village: "Shirur".to_string(),
            cluster: "Cluster Norte".to_string(),
            land_size: dec!(2.0),
            status: FarmerStatus::Active,
            outstanding_dues: dec!(0.00),
            share_capital: dec!(750.00),
            crops: vec!["Cebola".to_string()],
            risk_score: 18,
            joined_at: ts(2023, 8, 3),
            updated_at: ts(2025, 3, 18),
        },
        Farmer {
            id: uuid!("f0000000-0000-0000-0000-000000000003"),
            name: "Vilas Pawar".to_string(),
            phone: "+91 97650 77889".to_string(),
            village: "Ranjangaon".to_string(),
            cluster: "Cluster Leste".to_string(),
            land_size: dec!(6.25),
            status: FarmerStatus::Dormant,
            outstanding_dues: dec!(3400.00),
            share_capital: dec!(500.00),
            crops: vec!["Soja".to_string()],
            risk_score: 72,
            joined_at: ts(2022, 11, 20),
            updated_at: ts(2024, 12, 1),
        },
        Farmer {
            id: uuid!("f0000000-0000-0000-0000-000000000004"),
            name: "Kavita More".to_string(),
            phone: "+91 91120 33445".to_string(),
            village: "Koregaon".to_string(),
            cluster: "Cluster Leste".to_string(),
            land_size: dec!(1.75),
            status: FarmerStatus::PendingKyc,
            outstanding_dues: dec!(0.00),
            share_capital: dec!(0.00),
            crops: vec!["Tomate".to_string(), "Cebola".to_string()],
            risk_score: 50,
            joined_at: ts(2025, 2, 14),
            updated_at: ts(2025, 2, 14),
        },
        Farmer {
            id: uuid!("f0000000-0000-0000-0000-000000000005"),
            name: "Dnyaneshwar Shinde".to_string(),
            phone: "+91 98900 55667".to_string(),
            village: "Wagholi".to_string(),
            cluster: "Cluster Norte".to_string(),
            land_size: dec!(3.0),
            status: FarmerStatus::Active,
            outstanding_dues: dec!(820.00),
            share_capital: dec!(500.00),
            crops: vec!["Algodão".to_string()],
            risk_score: 44,
            joined_at: ts(2024, 1, 9),
            updated_at: ts(2025, 5, 22),
        },
        Farmer {
            id: uuid!("f0000000-0000-0000-0000-000000000006"),
            name: "Baban Kale".to_string(),
            phone: "+91 96570 88990".to_string(),
            village: "Talegaon".to_string(),
            cluster: "Cluster Sul".to_string(),
            land_size: dec!(5.5),
            status: FarmerStatus::Inactive,
            outstanding_dues: dec!(0.00),
            share_capital: dec!(250.00),
            crops: vec![],
            risk_score: 90,
            joined_at: ts(2022, 5, 30),
            updated_at: ts(2024, 8, 15),
        },
    ]
}

fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: uuid!("b0000000-0000-0000-0000-000000000001"),
            name: "Ureia 45kg".to_string(),
            category: "Fertilizantes".to_string(),
            current_stock: dec!(120),
            unit: "saco".to_string(),
            reorder_level: dec!(40),
            minimum_threshold: dec!(10),
            status: ItemStatus::InStock,
            average_cost: dec!(265.00),
            updated_at: ts(2025, 6, 1),
        },
        InventoryItem {
            id: uuid!("b0000000-0000-0000-0000-000000000002"),
            name: "DAP 50kg".to_string(),
            category: "Fertilizantes".to_string(),
            current_stock: dec!(35),
            unit: "saco".to_string(),
            reorder_level: dec!(40),
            minimum_threshold: dec!(10),
            status: ItemStatus::LowStock,
            average_cost: dec!(1350.00),
            updated_at: ts(2025, 6, 3),
        },
        InventoryItem {
            id: uuid!("b0000000-0000-0000-0000-000000000003"),
            name: "Semente de Soja JS-335".to_string(),
            category: "Sementes".to_string(),
            current_stock: dec!(80),
            unit: "pacote".to_string(),
            reorder_level: dec!(25),
            minimum_threshold: dec!(5),
            status: ItemStatus::InStock,
            average_cost: dec!(85.00),
            updated_at: ts(2025, 5, 28),
        },
        InventoryItem {
            id: uuid!("b0000000-0000-0000-0000-000000000004"),
            name: "Semente de Algodão BG-II".to_string(),
            category: "Sementes".to_string(),
            current_stock: dec!(0),
            unit: "pacote".to_string(),
            reorder_level: dec!(20),
            minimum_threshold: dec!(5),
            status: ItemStatus::OutOfStock,
            average_cost: dec!(730.00),
            updated_at: ts(2025, 6, 5),
        },
        InventoryItem {
            id: uuid!("b0000000-0000-0000-0000-000000000005"),
            name: "Clorpirifós 1L".to_string(),
            category: "Defensivos".to_string(),
            current_stock: dec!(54),
            unit: "frasco".to_string(),
            reorder_level: dec!(15),
            minimum_threshold: dec!(5),
            status: ItemStatus::InStock,
            average_cost: dec!(410.00),
            updated_at: ts(2025, 5, 20),
        },
        InventoryItem {
            id: uuid!("b0000000-0000-0000-0000-000000000006"),
            name: "Lona de Silagem 6x10m".to_string(),
            category: "Equipamentos".to_string(),
            current_stock: dec!(12),
            unit: "unidade".to_string(),
            reorder_level: dec!(10),
            minimum_threshold: dec!(2),
            status: ItemStatus::InStock,
            average_cost: dec!(980.00),
            updated_at: ts(2025, 4, 11),
        },
    ]
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: uuid!("a0000000-0000-0000-0000-000000000001"),
            farmer_id: uuid!("f0000000-0000-0000-0000-000000000001"),
            farmer_name: "Ramesh Patil".to_string(),
            order_date: date(2025, 6, 14),
            status: OrderStatus::Pending,
            items: vec![OrderLine {
                product_id: uuid!("b0000000-0000-0000-0000-000000000001"),
                product_name: "Ureia 45kg".to_string(),
                quantity: dec!(4),
                unit_price: dec!(270.00),
                total: dec!(1080.00),
            }],
            total_amount: dec!(1080.00),
            payment_status: OrderPaymentStatus::Unpaid,
            created_at: ts(2025, 6, 14),
            updated_at: ts(2025, 6, 14),
        },
        Order {
            id: uuid!("a0000000-0000-0000-0000-000000000002"),
            farmer_id: uuid!("f0000000-0000-0000-0000-000000000002"),
            farmer_name: "Sunita Jadhav".to_string(),
            order_date: date(2025, 6, 10),
            status: OrderStatus::Approved,
            items: vec![
                OrderLine {
                    product_id: uuid!("b0000000-0000-0000-0000-000000000003"),
                    product_name: "Semente de Soja JS-335".to_string(),
                    quantity: dec!(10),
                    unit_price: dec!(85.00),
                    total: dec!(850.00),
                },
                OrderLine {
                    product_id: uuid!("b0000000-0000-0000-0000-000000000005"),
                    product_name: "Clorpirifós 1L".to_string(),
                    quantity: dec!(2),
                    unit_price: dec!(425.00),
                    total: dec!(850.00),
                },
            ],
            total_amount: dec!(1700.00),
            payment_status: OrderPaymentStatus::PartiallyPaid,
            created_at: ts(2025, 6, 10),
            updated_at: ts(2025, 6, 12),
        },
        Order {
            id: uuid!("a0000000-0000-0000-0000-000000000003"),
            farmer_id: uuid!("f0000000-0000-0000-0000-000000000005"),
            farmer_name: "Dnyaneshwar Shinde".to_string(),
            order_date: date(2025, 5, 25),
            status: OrderStatus::Fulfilled,
            items: vec![OrderLine {
                product_id: uuid!("b0000000-0000-0000-0000-000000000002"),
                product_name: "DAP 50kg".to_string(),
                quantity: dec!(2),
                unit_price: dec!(1400.00),
                total: dec!(2800.00),
            }],
            total_amount: dec!(2800.00),
            payment_status: OrderPaymentStatus::Paid,
            created_at: ts(2025, 5, 25),
            updated_at: ts(2025, 6, 2),
        },
        Order {
            id: uuid!("a0000000-0000-0000-0000-000000000004"),
            farmer_id: uuid!("f0000000-0000-0000-0000-000000000003"),
            farmer_name: "Vilas Pawar".to_string(),
            order_date: date(2025, 6, 4),
            status: OrderStatus::PartiallyFulfilled,
            items: vec![OrderLine {
                product_id: uuid!("b0000000-0000-0000-0000-000000000006"),
                product_name: "Lona de Silagem 6x10m".to_string(),
                quantity: dec!(3),
                unit_price: dec!(1050.00),
                total: dec!(3150.00),
            }],
            total_amount: dec!(3150.00),
            payment_status: OrderPaymentStatus::Unpaid,
            created_at: ts(2025, 6, 4),
            updated_at: ts(2025, 6, 9),
        },
    ]
}

fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: uuid!("c0000000-0000-0000-0000-000000000001"),
            name: "Krishna Agro Inputs".to_string(),
            category: "Fertilizantes".to_string(),
            contact_person: "Suresh Kumar".to_string(),
            phone: "+91 99887 66554".to_string(),
            gst_number: "27AABCU9603R1ZM".to_string(),
            outstanding_balance: dec!(18500.00),
            status: PartnerStatus::Active,
        },
        Supplier {
            id: uuid!("c0000000-0000-0000-0000-000000000002"),
            name: "Deccan Seeds Pvt Ltd".to_string(),
            category: "Sementes".to_string(),
            contact_person: "Priya Nair".to_string(),
            phone: "+91 98765 11223".to_string(),
            gst_number: "27AAACD1234F1Z5".to_string(),
            outstanding_balance: dec!(0.00),
            status: PartnerStatus::Active,
        },
        Supplier {
            id: uuid!("c0000000-0000-0000-0000-000000000003"),
            name: "Bharat Crop Care".to_string(),
            category: "Defensivos".to_string(),
            contact_person: "Ajay Verma".to_string(),
            phone: "+91 91234 99880".to_string(),
            gst_number: "27AACCB4567K1Z9".to_string(),
            outstanding_balance: dec!(7300.00),
            status: PartnerStatus::Inactive,
        },
    ]
}

fn seed_buyers() -> Vec<Buyer> {
    vec![
        Buyer {
            id: uuid!("d0000000-0000-0000-0000-000000000001"),
            name: "Maharashtra Oils Ltd".to_string(),
            buyer_type: "Processadora".to_string(),
            phone: "+91 98111 22334".to_string(),
            gst_number: "27AALCS2781A1ZO".to_string(),
            outstanding_balance: dec!(42000.00),
            status: PartnerStatus::Active,
        },
        Buyer {
            id: uuid!("d0000000-0000-0000-0000-000000000002"),
            name: "Pune Agro Traders".to_string(),
            buyer_type: "Atacadista".to_string(),
            phone: "+91 97890 55667".to_string(),
            gst_number: "27AABCP8899M1Z2".to_string(),
            outstanding_balance: dec!(0.00),
            status: PartnerStatus::Active,
        },
        Buyer {
            id: uuid!("d0000000-0000-0000-0000-000000000003"),
            name: "Nagpur Cotton Mills".to_string(),
            buyer_type: "Fiação".to_string(),
            phone: "+91 90012 33445".to_string(),
            gst_number: "27AADCN5566P1Z7".to_string(),
            outstanding_balance: dec!(15750.00),
            status: PartnerStatus::Active,
        },
    ]
}

fn seed_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: uuid!("e0000000-0000-0000-0000-000000000001"),
            name: "Anita Deshmukh".to_string(),
            designation: "Gerente de Armazém".to_string(),
            phone: "+91 98500 44556".to_string(),
            attendance: AttendanceStatus::Present,
            status: StaffStatus::Active,
        },
        StaffMember {
            id: uuid!("e0000000-0000-0000-0000-000000000002"),
            name: "Prakash Gaikwad".to_string(),
            designation: "Contador".to_string(),
            phone: "+91 99600 77889".to_string(),
            attendance: AttendanceStatus::Present,
            status: StaffStatus::Active,
        },
        StaffMember {
            id: uuid!("e0000000-0000-0000-0000-000000000003"),
            name: "Sneha Kulkarni".to_string(),
            designation: "Moderadora de Campo".to_string(),
            phone: "+91 91700 11224".to_string(),
            attendance: AttendanceStatus::OnLeave,
            status: StaffStatus::Active,
        },
        StaffMember {
            id: uuid!("e0000000-0000-0000-0000-000000000004"),
            name: "Rahul Bhosale".to_string(),
            designation: "Motorista".to_string(),
            phone: "+91 96800 33446".to_string(),
            attendance: AttendanceStatus::Absent,
            status: StaffStatus::Active,
        },
        StaffMember {
            id: uuid!("e0000000-0000-0000-0000-000000000005"),
            name: "Meena Joshi".to_string(),
            designation: "Atendimento ao Associado".to_string(),
            phone: "+91 95900 55668".to_string(),
            attendance: AttendanceStatus::Absent,
            status: StaffStatus::Inactive,
        },
    ]
}

fn seed_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: uuid!("90000000-0000-0000-0000-000000000001"),
            payment_date: date(2025, 6, 2),
            entity_id: uuid!("f0000000-0000-0000-0000-000000000005"),
            entity_name: "Dnyaneshwar Shinde".to_string(),
            entity_type: PartyType::Farmer,
            direction: PaymentDirection::Inbound,
            amount: dec!(2800.00),
            mode: PaymentMode::Upi,
            reference_number: Some("UTR20250602A1".to_string()),
            status: PaymentStatus::Completed,
            purpose: "Pagamento do pedido de insumos".to_string(),
        },
        Payment {
            id: uuid!("90000000-0000-0000-0000-000000000002"),
            payment_date: date(2025, 6, 8),
            entity_id: uuid!("c0000000-0000-0000-0000-000000000001"),
            entity_name: "Krishna Agro Inputs".to_string(),
            entity_type: PartyType::Supplier,
            direction: PaymentDirection::Outbound,
            amount: dec!(10000.00),
            mode: PaymentMode::BankTransfer,
            reference_number: Some("NEFT8812345".to_string()),
            status: PaymentStatus::Completed,
            purpose: "Abatimento parcial de fatura".to_string(),
        },
        Payment {
            id: uuid!("90000000-0000-0000-0000-000000000003"),
            payment_date: date(2025, 6, 12),
            entity_id: uuid!("f0000000-0000-0000-0000-000000000002"),
            entity_name: "Sunita Jadhav".to_string(),
            entity_type: PartyType::Farmer,
            direction: PaymentDirection::Inbound,
            amount: dec!(850.00),
            mode: PaymentMode::Cash,
            reference_number: None,
            status: PaymentStatus::Pending,
            purpose: "Entrada do pedido de sementes".to_string(),
        },
        Payment {
            id: uuid!("90000000-0000-0000-0000-000000000004"),
            payment_date: date(2025, 6, 15),
            entity_id: uuid!("d0000000-0000-0000-0000-000000000001"),
            entity_name: "Maharashtra Oils Ltd".to_string(),
            entity_type: PartyType::Buyer,
            direction: PaymentDirection::Inbound,
            amount: dec!(25000.00),
            mode: PaymentMode::BankTransfer,
            reference_number: Some("RTGS5540021".to_string()),
            status: PaymentStatus::Processing,
            purpose: "Venda de soja agregada".to_string(),
        },
        Payment {
            id: uuid!("90000000-0000-0000-0000-000000000005"),
            payment_date: date(2025, 5, 28),
            entity_id: uuid!("e0000000-0000-0000-0000-000000000002"),
            entity_name: "Prakash Gaikwad".to_string(),
            entity_type: PartyType::Staff,
            direction: PaymentDirection::Outbound,
            amount: dec!(18000.00),
            mode: PaymentMode::BankTransfer,
            reference_number: Some("SAL202505-02".to_string()),
            status: PaymentStatus::Completed,
            purpose: "Salário de maio".to_string(),
        },
        Payment {
            id: uuid!("90000000-0000-0000-0000-000000000006"),
            payment_date: date(2025, 6, 18),
            entity_id: uuid!("c0000000-0000-0000-0000-000000000003"),
            entity_name: "Bharat Crop Care".to_string(),
            entity_type: PartyType::Supplier,
            direction: PaymentDirection::Outbound,
            amount: dec!(3000.00),
            mode: PaymentMode::Cheque,
            reference_number: Some("CHQ-004412".to_string()),
            status: PaymentStatus::Failed,
            purpose: "Cheque devolvido pelo banco".to_string(),
        },
    ]
}
