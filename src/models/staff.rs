// src/models/staff.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnLeave, // Vira "ON_LEAVE"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    Active,
    Inactive,
}

// --- Structs ---

// Funcionário da cooperativa. Usado principalmente para os
// agregados de headcount do painel do super-admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: Uuid,

    #[schema(example = "Anita Deshmukh")]
    pub name: String,

    #[schema(example = "Gerente de Armazém")]
    pub designation: String,

    #[schema(example = "+91 98500 44556")]
    pub phone: String,

    pub attendance: AttendanceStatus,
    pub status: StaffStatus,
}
