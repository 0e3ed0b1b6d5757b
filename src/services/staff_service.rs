// src/services/staff_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::staff::{AttendanceStatus, StaffMember, StaffStatus},
    store::Store,
};

#[derive(Clone)]
pub struct StaffService {
    store: Arc<Store>,
}

impl StaffService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn add_member(
        &self,
        name: &str,
        designation: &str,
        phone: &str,
    ) -> Result<StaffMember, AppError> {
        let member = StaffMember {
            id: Uuid::new_v4(),
            name: name.to_string(),
            designation: designation.to_string(),
            phone: phone.to_string(),
            attendance: AttendanceStatus::Present,
            status: StaffStatus::Active,
        };

        self.store.add_staff_member(member.clone()).await?;
        Ok(member)
    }

    pub async fn set_attendance(
        &self,
        id: Uuid,
        attendance: AttendanceStatus,
    ) -> Result<StaffMember, AppError> {
        self.store
            .update_staff_attendance(id, attendance)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("Funcionário {}", id)))
    }

    pub async fn list_members(&self) -> Result<Vec<StaffMember>, AppError> {
        Ok(self.store.snapshot().await.staff)
    }
}
