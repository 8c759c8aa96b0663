pub mod car;
pub mod customer;

pub use car::{Car, CarData, CarWithCustomer};
pub use customer::{Customer, CustomerData, CustomerWithCars};
