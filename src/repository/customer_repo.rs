use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::{Car, Customer, CustomerData, CustomerWithCars};

const CUSTOMER_COLUMNS: &str =
    "id, name, ident_document, birth_date, street_name, house_number, complements, district, municipality, state, phone, email";

#[derive(Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &CustomerData) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO customers (name, ident_document, birth_date, street_name, house_number, complements, district, municipality, state, phone, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&data.name)
        .bind(&data.ident_document)
        .bind(data.birth_date)
        .bind(&data.street_name)
        .bind(&data.house_number)
        .bind(&data.complements)
        .bind(&data.district)
        .bind(&data.municipality)
        .bind(&data.state)
        .bind(&data.phone)
        .bind(&data.email)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>, sqlx::Error> {
        let query =
            format!("SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY name ASC, ident_document ASC");
        sqlx::query_as::<_, Customer>(&query)
            .fetch_all(&self.pool)
            .await
    }

    /// Listing with each customer's cars attached, empty for customers
    /// without a purchase.
    pub async fn find_all_with_cars(&self) -> Result<Vec<CustomerWithCars>, sqlx::Error> {
        let customers = self.find_all().await?;

        let cars = sqlx::query_as::<_, Car>(
            "SELECT id, brand, model, color, year_manufacture, imported, plates, selling_date, selling_price, customer_id
             FROM cars
             WHERE customer_id IS NOT NULL
             ORDER BY brand ASC, model ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_customer: HashMap<i64, Vec<Car>> = HashMap::new();
        for car in cars {
            if let Some(customer_id) = car.customer_id {
                by_customer.entry(customer_id).or_default().push(car);
            }
        }

        Ok(customers
            .into_iter()
            .map(|customer| {
                let cars = by_customer.remove(&customer.id).unwrap_or_default();
                CustomerWithCars { customer, cars }
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Full-document replace. Returns false when no row matched the id.
    pub async fn update(&self, id: i64, data: &CustomerData) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE customers
             SET name = $1, ident_document = $2, birth_date = $3, street_name = $4,
                 house_number = $5, complements = $6, district = $7, municipality = $8,
                 state = $9, phone = $10, email = $11
             WHERE id = $12",
        )
        .bind(&data.name)
        .bind(&data.ident_document)
        .bind(data.birth_date)
        .bind(&data.street_name)
        .bind(&data.house_number)
        .bind(&data.complements)
        .bind(&data.district)
        .bind(&data.municipality)
        .bind(&data.state)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
