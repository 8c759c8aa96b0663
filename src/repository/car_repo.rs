use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::{Car, CarData, CarWithCustomer, Customer};

const CAR_COLUMNS: &str =
    "id, brand, model, color, year_manufacture, imported, plates, selling_date, selling_price, customer_id";

#[derive(Clone)]
pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &CarData) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO cars (brand, model, color, year_manufacture, imported, plates, selling_date, selling_price, customer_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.color)
        .bind(data.year_manufacture)
        .bind(data.imported)
        .bind(&data.plates)
        .bind(data.selling_date)
        .bind(data.selling_price)
        .bind(data.customer_id)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("SELECT {CAR_COLUMNS} FROM cars ORDER BY brand ASC, model ASC");
        sqlx::query_as::<_, Car>(&query).fetch_all(&self.pool).await
    }

    /// Listing with each car's buyer attached, `None` for unsold cars.
    pub async fn find_all_with_customers(&self) -> Result<Vec<CarWithCustomer>, sqlx::Error> {
        let cars = self.find_all().await?;

        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, ident_document, birth_date, street_name, house_number, complements, district, municipality, state, phone, email
             FROM customers
             WHERE id IN (SELECT customer_id FROM cars WHERE customer_id IS NOT NULL)",
        )
        .fetch_all(&self.pool)
        .await?;

        let by_id: HashMap<i64, Customer> =
            customers.into_iter().map(|c| (c.id, c)).collect();

        Ok(cars
            .into_iter()
            .map(|car| {
                let customer = car.customer_id.and_then(|id| by_id.get(&id).cloned());
                CarWithCustomer { car, customer }
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Full-document replace. Returns false when no row matched the id.
    pub async fn update(&self, id: i64, data: &CarData) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars
             SET brand = $1, model = $2, color = $3, year_manufacture = $4, imported = $5,
                 plates = $6, selling_date = $7, selling_price = $8, customer_id = $9
             WHERE id = $10",
        )
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.color)
        .bind(data.year_manufacture)
        .bind(data.imported)
        .bind(&data.plates)
        .bind(data.selling_date)
        .bind(data.selling_price)
        .bind(data.customer_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
