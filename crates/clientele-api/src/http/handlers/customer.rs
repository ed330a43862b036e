//! Customer CRUD handlers for the REST API.
//!
//! Path IDs that are not UUIDs cannot match any stored customer: lookups and
//! updates answer 404, deletes succeed without touching the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use clientele_core::validation::validate_customer;
use clientele_types::customer::{CustomerId, CustomerInput};
use clientele_types::error::CustomerError;

use crate::http::error::AppError;
use crate::http::extractors::json::AppJson;
use crate::http::response::{CreatedCustomerBody, CustomerBody, CustomerListBody, MessageBody};
use crate::state::AppState;

fn parse_id(raw: &str) -> Option<CustomerId> {
    raw.parse::<CustomerId>().ok()
}

fn unknown_id(raw: &str) -> AppError {
    tracing::debug!(id = raw, "path id is not a customer id");
    AppError::Customer(CustomerError::NotFound)
}

/// GET /customer/getAll - List every customer in insertion order.
pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<CustomerListBody>, AppError> {
    let customers = state.customer_service.list_customers().await?;

    Ok(Json(CustomerListBody {
        message: "Customers found.",
        customers,
    }))
}

/// POST /customer/create - Validate and store a new customer.
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(body): AppJson<CustomerInput>,
) -> Result<(StatusCode, Json<CreatedCustomerBody>), AppError> {
    let customer = state.customer_service.create_customer(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedCustomerBody {
            message: "Customer created successfully!",
            post: customer,
        }),
    ))
}

/// GET /customer/get/{id} - Fetch one customer.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerBody>, AppError> {
    let id = parse_id(&id).ok_or_else(|| unknown_id(&id))?;
    let customer = state.customer_service.get_customer(&id).await?;

    Ok(Json(CustomerBody {
        message: "Customer found.",
        customer,
    }))
}

/// PATCH /customer/update/{id} - Overwrite every attribute of a customer.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<CustomerInput>,
) -> Result<Json<CustomerBody>, AppError> {
    let Some(customer_id) = parse_id(&id) else {
        // A bad payload is reported ahead of an unknown id.
        validate_customer(&body).map_err(CustomerError::Validation)?;
        return Err(unknown_id(&id));
    };
    let customer = state
        .customer_service
        .update_customer(&customer_id, body)
        .await?;

    Ok(Json(CustomerBody {
        message: "Customer updated.",
        customer,
    }))
}

/// DELETE /customer/delete/{id} - Remove a customer. Missing ids succeed.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    match parse_id(&id) {
        Some(id) => state.customer_service.delete_customer(&id).await?,
        None => tracing::debug!(id = %id, "delete with non-uuid id is a no-op"),
    }

    Ok(Json(MessageBody {
        message: "Customer deleted.",
    }))
}
