use sqlx::SqlitePool;

use crate::repository::{CarRepository, CustomerRepository};
use crate::service::{CarService, CustomerService};

#[derive(Clone)]
pub struct AppState {
    pub cars: CarService,
    pub customers: CustomerService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            cars: CarService::new(CarRepository::new(pool.clone())),
            customers: CustomerService::new(CustomerRepository::new(pool)),
        }
    }
}
