//! Customer repository trait definition.

use clientele_types::customer::{Customer, CustomerId};
use clientele_types::error::RepositoryError;

/// Repository trait for customer persistence.
///
/// Implementations live in clientele-infra (e.g., SqliteCustomerRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer. Returns the stored customer.
    fn create(
        &self,
        customer: &Customer,
    ) -> impl std::future::Future<Output = Result<Customer, RepositoryError>> + Send;

    /// Get a customer by its unique ID.
    fn get_by_id(
        &self,
        id: &CustomerId,
    ) -> impl std::future::Future<Output = Result<Option<Customer>, RepositoryError>> + Send;

    /// List every customer in insertion order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Customer>, RepositoryError>> + Send;

    /// Overwrite an existing customer. Returns `RepositoryError::NotFound`
    /// if no row has the customer's ID.
    fn update(
        &self,
        customer: &Customer,
    ) -> impl std::future::Future<Output = Result<Customer, RepositoryError>> + Send;

    /// Remove a customer by ID. Removing an absent ID is not an error.
    fn delete(
        &self,
        id: &CustomerId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
