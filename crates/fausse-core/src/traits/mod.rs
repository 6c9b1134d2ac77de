//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    CategoryRepository, CustomerRepository, EmployeeRepository, MenuItemRepository,
    NewsletterRepository, RepoResult, ReservationRepository,
};
