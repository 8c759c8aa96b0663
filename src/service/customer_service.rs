use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Customer, CustomerData, CustomerWithCars};
use crate::repository::CustomerRepository;

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, mut data: CustomerData) -> Result<(), AppError> {
        data.normalize();
        data.validate()?;

        let id = self.repo.create(&data).await?;
        tracing::info!("{} Created customer {}", API_NAME, id);
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn list_with_cars(&self) -> Result<Vec<CustomerWithCars>, AppError> {
        Ok(self.repo.find_all_with_cars().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn update(&self, id: i64, mut data: CustomerData) -> Result<bool, AppError> {
        data.normalize();
        data.validate()?;

        let updated = self.repo.update(id, &data).await?;
        if updated {
            tracing::info!("{} Updated customer {}", API_NAME, id);
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("{} Deleted customer {}", API_NAME, id);
        }
        Ok(deleted)
    }
}
