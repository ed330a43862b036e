//! SQLite customer repository implementation.
//!
//! Implements `CustomerRepository` from `clientele-core` using sqlx with split read/write pools.

use clientele_core::repository::customer::CustomerRepository;
use clientele_types::customer::{Customer, CustomerId};
use clientele_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `CustomerRepository`.
pub struct SqliteCustomerRepository {
    pool: DatabasePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Customer.
struct CustomerRow {
    id: String,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    phone_number: String,
    email: String,
    address: String,
    created_at: String,
    updated_at: String,
}

impl CustomerRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            middle_name: row.try_get("middle_name")?,
            phone_number: row.try_get("phone_number")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_customer(self) -> Result<Customer, RepositoryError> {
        let id = self
            .id
            .parse::<CustomerId>()
            .map_err(|e| RepositoryError::Query(format!("invalid customer id: {e}")))?;

        Ok(Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
            phone_number: self.phone_number,
            email: self.email,
            address: self.address,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Result<Customer, RepositoryError> {
    CustomerRow::from_row(row)
        .map_err(|e| RepositoryError::Query(e.to_string()))?
        .into_customer()
}

impl CustomerRepository for SqliteCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        sqlx::query(
            "INSERT INTO customers (id, first_name, last_name, middle_name, phone_number, email, address, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(customer.id.to_string())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.middle_name)
        .bind(&customer.phone_number)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(format_datetime(&customer.created_at))
        .bind(format_datetime(&customer.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(customer.clone())
    }

    async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM customers WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(map_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM customers ORDER BY rowid ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(map_row).collect()
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        let result = sqlx::query(
            "UPDATE customers SET first_name = ?, last_name = ?, middle_name = ?, phone_number = ?, email = ?, address = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.middle_name)
        .bind(&customer.phone_number)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(format_datetime(&customer.updated_at))
        .bind(customer.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(customer.clone())
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(customer_id = %id, "delete matched no rows");
        }

        Ok(())
    }
}
