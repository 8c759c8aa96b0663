pub mod car_service;
pub mod customer_service;

pub use car_service::CarService;
pub use customer_service::CustomerService;
