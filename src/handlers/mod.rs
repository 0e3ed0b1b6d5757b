pub mod dashboard;
pub mod export;
pub mod farmers;
pub mod inventory;
pub mod orders;
pub mod partners;
pub mod payments;
pub mod staff;

use rust_decimal::Decimal;
use validator::ValidationError;

// Validação compartilhada entre os payloads: valores monetários e
// quantidades não podem ser negativos.
pub(crate) fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("not_negative".into());
        return Err(err);
    }
    Ok(())
}
