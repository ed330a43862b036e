//! JSON response bodies for the customer API.
//!
//! Every body carries a human-readable `message`; success bodies add the
//! payload under the key clients of the API already read:
//! ```json
//! { "message": "Customers found.", "Customers": [ ... ] }
//! { "message": "Customer created successfully!", "post": { ... } }
//! { "message": "Customer found.", "customer": { ... } }
//! ```

use serde::Serialize;

use clientele_types::customer::Customer;
use clientele_types::validation::FieldViolation;

/// `GET /customer/getAll`.
#[derive(Debug, Serialize)]
pub struct CustomerListBody {
    pub message: &'static str,
    #[serde(rename = "Customers")]
    pub customers: Vec<Customer>,
}

/// `POST /customer/create`.
#[derive(Debug, Serialize)]
pub struct CreatedCustomerBody {
    pub message: &'static str,
    pub post: Customer,
}

/// `GET /customer/get/{id}` and `PATCH /customer/update/{id}`.
#[derive(Debug, Serialize)]
pub struct CustomerBody {
    pub message: &'static str,
    pub customer: Customer,
}

/// Body with only a message (`DELETE /customer/delete/{id}`).
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Error body. `errors` is present only for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_violations(message: impl Into<String>, errors: Vec<FieldViolation>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}
