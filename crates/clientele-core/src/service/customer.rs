//! Customer management service.
//!
//! Every operation is a single attempt against the repository. Writes are
//! validated before the store is touched, so a rejected payload never
//! persists anything.

use clientele_types::customer::{Customer, CustomerId, CustomerInput};
use clientele_types::error::{CustomerError, RepositoryError};

use crate::repository::customer::CustomerRepository;
use crate::validation::validate_customer;

/// Service orchestrating the customer lifecycle.
///
/// Generic over the repository trait to maintain clean architecture --
/// clientele-core never depends on clientele-infra.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every customer in insertion order.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        self.repo.list().await.map_err(storage)
    }

    /// Validate `input`, assign an ID and timestamps, and persist.
    pub async fn create_customer(&self, input: CustomerInput) -> Result<Customer, CustomerError> {
        let fields = validate_customer(&input).map_err(CustomerError::Validation)?;

        let customer = Customer::from_fields(CustomerId::new(), fields, chrono::Utc::now());
        let customer = self.repo.create(&customer).await.map_err(storage)?;

        tracing::info!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Get a customer by ID.
    pub async fn get_customer(&self, id: &CustomerId) -> Result<Customer, CustomerError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(storage)?
            .ok_or(CustomerError::NotFound)
    }

    /// Replace every mutable field of an existing customer.
    ///
    /// This is a full overwrite: an omitted `midName` clears the stored one.
    /// Validation runs before the lookup, so a bad payload for a missing ID
    /// reports the validation failure. There is no version check; the last
    /// writer wins.
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, CustomerError> {
        let fields = validate_customer(&input).map_err(CustomerError::Validation)?;

        let mut customer = self.get_customer(id).await?;
        customer.overwrite(fields, chrono::Utc::now());

        let customer = self.repo.update(&customer).await.map_err(|e| match e {
            // Deleted between the read and the write.
            RepositoryError::NotFound => CustomerError::NotFound,
            other => storage(other),
        })?;

        tracing::info!(customer_id = %customer.id, "customer updated");
        Ok(customer)
    }

    /// Remove a customer. Deleting an ID that does not exist succeeds.
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<(), CustomerError> {
        self.repo.delete(id).await.map_err(storage)?;
        tracing::info!(customer_id = %id, "customer deleted");
        Ok(())
    }
}

fn storage(e: RepositoryError) -> CustomerError {
    CustomerError::StorageError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // --- Mock repository for testing ---

    /// In-memory repository backed by a Vec, optionally failing every call.
    #[derive(Default)]
    struct MockRepository {
        rows: Mutex<Vec<Customer>>,
        unavailable: bool,
    }

    impl MockRepository {
        fn unavailable() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                unavailable: true,
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.unavailable {
                Err(RepositoryError::Connection)
            } else {
                Ok(())
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    impl CustomerRepository for MockRepository {
        async fn create(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
            self.check()?;
            self.rows.lock().unwrap().push(customer.clone());
            Ok(customer.clone())
        }

        async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|c| &c.id == id).cloned())
        }

        async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn update(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|c| c.id == customer.id) {
                Some(row) => {
                    *row = customer.clone();
                    Ok(customer.clone())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        async fn delete(&self, id: &CustomerId) -> Result<(), RepositoryError> {
            self.check()?;
            self.rows.lock().unwrap().retain(|c| &c.id != id);
            Ok(())
        }
    }

    fn john() -> CustomerInput {
        CustomerInput {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            middle_name: None,
            phone_number: Some("1234567890".to_string()),
            email: Some("john@example.com".to_string()),
            address: Some("123 Main St".to_string()),
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_then_get_returns_input_fields() {
        let service = CustomerService::new(MockRepository::default());

        let created = service.create_customer(john()).await.unwrap();
        assert!(!created.id.to_string().is_empty());
        assert_eq!(created.created_at, created.updated_at);

        let found = service.get_customer(&created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.first_name, "John");
        assert_eq!(found.last_name, "Doe");
        assert_eq!(found.phone_number, "1234567890");
        assert_eq!(found.email, "john@example.com");
        assert_eq!(found.address, "123 Main St");
        assert!(found.middle_name.is_none());
    }

    #[tokio::test]
    async fn test_create_invalid_never_persists() {
        let repo = MockRepository::default();
        let service = CustomerService::new(repo);

        let mut bad_phone = john();
        bad_phone.phone_number = Some("12ab".to_string());
        let err = service.create_customer(bad_phone).await.unwrap_err();
        assert!(matches!(err, CustomerError::Validation(ref r) if r.fields() == vec!["phoneNumber"]));

        let mut bad_email = john();
        bad_email.email = Some("john.example.com".to_string());
        let err = service.create_customer(bad_email).await.unwrap_err();
        assert!(matches!(err, CustomerError::Validation(ref r) if r.fields() == vec!["email"]));

        assert_eq!(service.repo.len(), 0);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = CustomerService::new(MockRepository::default());
        service.create_customer(john()).await.unwrap();

        let err = service.get_customer(&CustomerId::new()).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound));
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let service = CustomerService::new(MockRepository::default());

        let mut input = john();
        input.middle_name = Some("Quincy".to_string());
        let created = service.create_customer(input).await.unwrap();
        assert_eq!(created.middle_name.as_deref(), Some("Quincy"));

        let replacement = CustomerInput {
            first_name: Some("Jane".to_string()),
            last_name: Some("Roe".to_string()),
            middle_name: None,
            phone_number: Some(" 5550001 ".to_string()),
            email: Some("jane@example.org".to_string()),
            address: Some("1 Elm Rd".to_string()),
        };
        let updated = service
            .update_customer(&created.id, replacement)
            .await
            .unwrap();

        let found = service.get_customer(&created.id).await.unwrap();
        assert_eq!(found, updated);
        assert_eq!(found.id, created.id);
        assert_eq!(found.created_at, created.created_at);
        assert!(found.updated_at >= created.updated_at);
        assert_eq!(found.first_name, "Jane");
        assert_eq!(found.last_name, "Roe");
        assert_eq!(found.phone_number, "5550001");
        assert_eq!(found.email, "jane@example.org");
        assert_eq!(found.address, "1 Elm Rd");
        // Omitted optional field is cleared, not kept.
        assert!(found.middle_name.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = CustomerService::new(MockRepository::default());
        let err = service
            .update_customer(&CustomerId::new(), john())
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::NotFound));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = CustomerService::new(MockRepository::default());
        let mut input = john();
        input.email = Some("bad".to_string());

        let err = service
            .update_customer(&CustomerId::new(), input)
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_missing_required_field() {
        let service = CustomerService::new(MockRepository::default());
        let created = service.create_customer(john()).await.unwrap();

        let mut partial = john();
        partial.address = None;
        let err = service
            .update_customer(&created.id, partial)
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::Validation(ref r) if r.fields() == vec!["address"]));

        let found = service.get_customer(&created.id).await.unwrap();
        assert_eq!(found.address, "123 Main St");
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let service = CustomerService::new(MockRepository::default());
        let id = CustomerId::new();

        service.delete_customer(&id).await.unwrap();
        let err = service.get_customer(&id).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_customer() {
        let service = CustomerService::new(MockRepository::default());
        let created = service.create_customer(john()).await.unwrap();

        service.delete_customer(&created.id).await.unwrap();
        let err = service.get_customer(&created.id).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound));
    }

    #[tokio::test]
    async fn test_list_returns_every_created_customer() {
        let service = CustomerService::new(MockRepository::default());
        let mut ids = Vec::new();
        for i in 0..4 {
            let mut input = john();
            input.first_name = Some(format!("John{i}"));
            ids.push(service.create_customer(input).await.unwrap().id);
        }

        let all = service.list_customers().await.unwrap();
        assert_eq!(all.len(), 4);
        for (customer, id) in all.iter().zip(&ids) {
            assert_eq!(&customer.id, id);
            assert_eq!(&service.get_customer(id).await.unwrap(), customer);
        }
    }

    #[tokio::test]
    async fn test_store_unavailable_is_storage_error() {
        let service = CustomerService::new(MockRepository::unavailable());

        assert!(matches!(
            service.list_customers().await.unwrap_err(),
            CustomerError::StorageError(_)
        ));
        assert!(matches!(
            service.create_customer(john()).await.unwrap_err(),
            CustomerError::StorageError(_)
        ));
        assert!(matches!(
            service.get_customer(&CustomerId::new()).await.unwrap_err(),
            CustomerError::StorageError(_)
        ));
        assert!(matches!(
            service.delete_customer(&CustomerId::new()).await.unwrap_err(),
            CustomerError::StorageError(_)
        ));
    }
}
