use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarData, CarWithCustomer};
use crate::repository::CarRepository;

#[derive(Clone)]
pub struct CarService {
    repo: CarRepository,
}

impl CarService {
    pub fn new(repo: CarRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, mut data: CarData) -> Result<(), AppError> {
        data.normalize();
        data.validate()?;

        let id = self.repo.create(&data).await?;
        tracing::info!("{} Created car {}", API_NAME, id);
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn list_with_customers(&self) -> Result<Vec<CarWithCustomer>, AppError> {
        Ok(self.repo.find_all_with_customers().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Car>, AppError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Replaces the whole record. Returns false when the id is unknown;
    /// callers decide how to report that.
    pub async fn update(&self, id: i64, mut data: CarData) -> Result<bool, AppError> {
        data.normalize();
        data.validate()?;

        let updated = self.repo.update(id, &data).await?;
        if updated {
            tracing::info!("{} Updated car {}", API_NAME, id);
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("{} Deleted car {}", API_NAME, id);
        }
        Ok(deleted)
    }
}
