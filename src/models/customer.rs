use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::car::Car;

/// Brazilian states the dealership operates in.
pub const STATES: [&str; 7] = ["DF", "ES", "GO", "MG", "PR", "RJ", "SP"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub ident_document: String,
    pub birth_date: Option<DateTime<Utc>>,
    pub street_name: String,
    pub house_number: String,
    pub complements: Option<String>,
    pub district: String,
    pub municipality: String,
    pub state: String,
    pub phone: String,
    pub email: String,
}

/// Listing row when the related cars were requested. The cars field is
/// always serialized, empty when the customer never bought one.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithCars {
    #[serde(flatten)]
    pub customer: Customer,
    pub cars: Vec<Car>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerData {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: String,

    #[validate(length(equal = 14, message = "identity document must have exactly 14 characters"))]
    pub ident_document: String,

    #[validate(custom(function = validate_birth_date))]
    pub birth_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 40, message = "street name must be 1 to 40 characters"))]
    pub street_name: String,

    #[validate(length(min = 1, max = 10, message = "house number must be 1 to 10 characters"))]
    pub house_number: String,

    #[validate(length(max = 20, message = "complements must have at most 20 characters"))]
    pub complements: Option<String>,

    #[validate(length(min = 1, max = 30, message = "district must be 1 to 30 characters"))]
    pub district: String,

    #[validate(length(min = 1, max = 40, message = "municipality must be 1 to 40 characters"))]
    pub municipality: String,

    #[validate(custom(function = validate_state))]
    pub state: String,

    #[validate(length(min = 14, max = 15, message = "phone must have 14 or 15 characters"))]
    pub phone: String,

    #[validate(email(message = "e-mail address is malformed"))]
    pub email: String,
}

impl CustomerData {
    /// Strips the placeholders the document and phone input masks leave on
    /// unfilled positions. Must run before `validate`.
    pub fn normalize(&mut self) {
        self.ident_document.retain(|c| c != '_');
        self.phone.retain(|c| c != '_');
    }
}

fn validate_birth_date(birth_date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *birth_date >= Utc::now() {
        let mut error = ValidationError::new("birth_date");
        error.message = Some("birth date must lie in the past".into());
        return Err(error);
    }
    Ok(())
}

fn validate_state(state: &str) -> Result<(), ValidationError> {
    if !STATES.contains(&state) {
        let mut error = ValidationError::new("state");
        error.message = Some(format!("state must be one of {}", STATES.join(", ")).into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer_data() -> CustomerData {
        CustomerData {
            name: "Maria da Silva".to_string(),
            ident_document: "123.456.789-00".to_string(),
            birth_date: Some("1985-03-20T00:00:00Z".parse().unwrap()),
            street_name: "Rua das Flores".to_string(),
            house_number: "123".to_string(),
            complements: None,
            district: "Centro".to_string(),
            municipality: "Franca".to_string(),
            state: "SP".to_string(),
            phone: "(16) 98765-4321".to_string(),
            email: "maria@example.com".to_string(),
        }
    }

    #[test]
    fn valid_data_passes_validation() {
        let mut data = valid_customer_data();
        data.normalize();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn normalize_strips_mask_placeholders_from_phone() {
        let mut data = valid_customer_data();
        data.phone = "(16) _9876-5432".to_string();
        data.normalize();
        assert_eq!(data.phone, "(16) 9876-5432");
        assert!(data.validate().is_ok());
    }

    #[test]
    fn incomplete_document_is_rejected() {
        let mut data = valid_customer_data();
        data.ident_document = "123.456.78_-__".to_string();
        data.normalize();
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("ident_document"));
    }

    #[test]
    fn unknown_state_is_rejected() {
        let mut data = valid_customer_data();
        data.state = "XX".to_string();
        data.normalize();
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("state"));
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let mut data = valid_customer_data();
        data.birth_date = Some(Utc::now() + chrono::Duration::days(365));
        data.normalize();
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("birth_date"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut data = valid_customer_data();
        data.email = "not-an-email".to_string();
        data.normalize();
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
