use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::customer::Customer;

pub const MIN_YEAR_MANUFACTURE: i32 = 1940;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year_manufacture: Option<i32>,
    pub imported: bool,
    pub plates: String,
    pub selling_date: Option<DateTime<Utc>>,
    pub selling_price: Option<f64>,
    pub customer_id: Option<i64>,
}

/// Listing row when the related customer was requested. The customer field
/// is always serialized, as `null` when the car has no buyer.
#[derive(Debug, Clone, Serialize)]
pub struct CarWithCustomer {
    #[serde(flatten)]
    pub car: Car,
    pub customer: Option<Customer>,
}

/// Incoming car payload for create and update. Identity is server-assigned
/// and never part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarData {
    #[validate(length(min = 1, max = 25, message = "brand must be 1 to 25 characters"))]
    pub brand: String,

    #[validate(length(min = 1, max = 25, message = "model must be 1 to 25 characters"))]
    pub model: String,

    #[validate(length(min = 4, max = 20, message = "color must be 4 to 20 characters"))]
    pub color: String,

    #[validate(custom(function = validate_year_manufacture))]
    pub year_manufacture: Option<i32>,

    #[serde(default)]
    pub imported: bool,

    #[validate(length(equal = 8, message = "plates must have exactly 8 characters"))]
    pub plates: String,

    pub selling_date: Option<DateTime<Utc>>,

    #[validate(range(min = 2000.0, message = "selling price must be at least 2000"))]
    pub selling_price: Option<f64>,

    #[validate(range(min = 1, message = "customer id must be a positive integer"))]
    pub customer_id: Option<i64>,
}

impl CarData {
    /// Strips the placeholders the plates input mask leaves on unfilled
    /// positions. Must run before `validate`, which checks the final length.
    pub fn normalize(&mut self) {
        self.plates.retain(|c| c != '_');
    }
}

fn validate_year_manufacture(year: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if year < MIN_YEAR_MANUFACTURE || year > current_year {
        let mut error = ValidationError::new("year_manufacture");
        error.message = Some(
            format!(
                "year of manufacture must be between {} and {}",
                MIN_YEAR_MANUFACTURE, current_year
            )
            .into(),
        );
        return Err(error);
    }
    Ok(())
}
