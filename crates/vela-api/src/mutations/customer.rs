//! # Customer Mutations

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use vela_core::validation::{validate_customer_name, validate_email, validate_phone};
use vela_core::{CoreError, Customer};

use crate::dto::{BulkCreateCustomersResponse, CustomerInput, CustomerResponse};
use crate::error::ApiError;
use crate::store::EntityStore;

/// Creates a single customer.
///
/// Validation runs before any store access; a duplicate email is
/// rejected by the pre-check, and a concurrent insert slipping past it
/// is still caught by the store's unique constraint.
pub async fn create_customer<S: EntityStore>(
    store: &S,
    input: CustomerInput,
) -> Result<CustomerResponse, ApiError> {
    debug!(email = %input.email, "create_customer");

    let customer = validate_and_build(&input)?;

    if store.customer_email_exists(&customer.email).await? {
        return Err(CoreError::DuplicateEmail(customer.email).into());
    }

    match store.insert_customer(&customer).await {
        Ok(()) => {}
        Err(e) if e.is_unique_violation_on("customers.email") => {
            return Err(CoreError::DuplicateEmail(customer.email).into());
        }
        Err(e) => return Err(e.into()),
    }

    info!(customer_id = %customer.id, "Customer created");
    Ok(customer.into())
}

/// Creates a batch of customers, one record at a time.
///
/// Each record succeeds or fails on its own: invalid or duplicate
/// records land in `errors` while the rest persist. The call itself
/// never fails; an empty input yields an empty response.
pub async fn bulk_create_customers<S: EntityStore>(
    store: &S,
    inputs: Vec<CustomerInput>,
) -> BulkCreateCustomersResponse {
    debug!(count = inputs.len(), "bulk_create_customers");

    let mut customers = Vec::new();
    let mut errors = Vec::new();

    for input in inputs {
        match create_one(store, &input).await {
            Ok(customer) => customers.push(customer.into()),
            Err(message) => {
                warn!(email = %input.email, error = %message, "Bulk record rejected");
                errors.push(message);
            }
        }
    }

    info!(
        created = customers.len(),
        rejected = errors.len(),
        "Bulk customer creation finished"
    );

    BulkCreateCustomersResponse { customers, errors }
}

// Uniqueness is checked before format validation, so a duplicate email
// on a record with other problems still reports the duplicate. Error
// strings carry the record's email so the caller can tell which record
// of the batch was rejected.
async fn create_one<S: EntityStore>(store: &S, input: &CustomerInput) -> Result<Customer, String> {
    let email = input.email.trim();
    match store.customer_email_exists(email).await {
        Ok(true) => {
            return Err(CoreError::DuplicateEmail(email.to_string()).to_string());
        }
        Ok(false) => {}
        Err(e) => return Err(format!("{}: {}", input.email, ApiError::from(e).message)),
    }

    let customer =
        validate_and_build(input).map_err(|e| format!("{}: {}", input.email, e.message))?;

    match store.insert_customer(&customer).await {
        Ok(()) => Ok(customer),
        Err(e) if e.is_unique_violation_on("customers.email") => {
            Err(CoreError::DuplicateEmail(customer.email).to_string())
        }
        Err(e) => Err(format!("{}: {}", input.email, ApiError::from(e).message)),
    }
}

fn validate_and_build(input: &CustomerInput) -> Result<Customer, ApiError> {
    validate_customer_name(&input.name)?;
    validate_email(&input.email)?;

    let phone = match input.phone.as_deref() {
        Some(raw) => {
            validate_phone(raw)?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    };

    Ok(Customer {
        id: Uuid::new_v4().to_string(),
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use vela_db::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    fn input(name: &str, email: &str, phone: Option<&str>) -> CustomerInput {
        CustomerInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(|p| p.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_customer() {
        let db = test_db().await;

        let resp = create_customer(&db, input("Ada Lovelace", "ada@example.com", Some("123-456-7890")))
            .await
            .unwrap();

        assert_eq!(resp.name, "Ada Lovelace");
        assert_eq!(resp.email, "ada@example.com");
        assert_eq!(resp.phone.as_deref(), Some("123-456-7890"));
        assert_eq!(db.customers().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_customer_rejects_blank_name() {
        let db = test_db().await;

        let err = create_customer(&db, input("   ", "ada@example.com", None))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_customer_rejects_bad_phone() {
        let db = test_db().await;

        let err = create_customer(&db, input("Ada", "ada@example.com", Some("not-a-phone")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_customer_duplicate_email() {
        let db = test_db().await;

        create_customer(&db, input("Ada", "ada@example.com", None))
            .await
            .unwrap();
        let err = create_customer(&db, input("Other Ada", "ada@example.com", None))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("ada@example.com"));
        assert_eq!(db.customers().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_customer_blank_phone_stored_as_none() {
        let db = test_db().await;

        let resp = create_customer(&db, input("Ada", "ada@example.com", Some("   ")))
            .await
            .unwrap();

        assert!(resp.phone.is_none());
    }

    #[tokio::test]
    async fn test_bulk_partial_success() {
        let db = test_db().await;

        let resp = bulk_create_customers(
            &db,
            vec![
                input("Ada", "shared@example.com", None),
                input("Grace", "shared@example.com", None),
                input("Edsger", "edsger@example.com", None),
            ],
        )
        .await;

        assert_eq!(resp.customers.len(), 2);
        assert_eq!(resp.errors.len(), 1);
        assert!(resp.errors[0].contains("shared@example.com"));
        assert_eq!(db.customers().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_bulk_invalid_records_do_not_block_valid_ones() {
        let db = test_db().await;

        let resp = bulk_create_customers(
            &db,
            vec![
                input("", "blank@example.com", None),
                input("Bad Phone", "badphone@example.com", Some("12x")),
                input("Fine", "fine@example.com", Some("+1234567890")),
            ],
        )
        .await;

        assert_eq!(resp.customers.len(), 1);
        assert_eq!(resp.customers[0].email, "fine@example.com");
        assert_eq!(resp.errors.len(), 2);
        assert!(resp.errors[0].contains("blank@example.com"));
        assert!(resp.errors[1].contains("badphone@example.com"));
        assert_eq!(db.customers().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bulk_duplicate_wins_over_bad_phone() {
        let db = test_db().await;

        let resp = bulk_create_customers(
            &db,
            vec![
                input("Ada", "ada@example.com", None),
                input("Other Ada", "ada@example.com", Some("not-a-phone")),
            ],
        )
        .await;

        assert_eq!(resp.customers.len(), 1);
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0], "Email 'ada@example.com' already exists");
    }

    #[tokio::test]
    async fn test_bulk_empty_input() {
        let db = test_db().await;

        let resp = bulk_create_customers(&db, vec![]).await;

        assert!(resp.customers.is_empty());
        assert!(resp.errors.is_empty());
    }
}
