//! # Validation Module
//!
//! Input validation rules for Vela CRM.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: API adapter (deserialization)                                 │
//! │  └── Type validation (required fields, shapes)                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                        │
//! │  ├── Phone / email format, price positivity, stock floor                │
//! │  └── Pure functions, no store access                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  ├── NOT NULL / CHECK constraints                                       │
//! │  ├── UNIQUE constraint on customer email                                │
//! │  └── Foreign key constraints                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Email *uniqueness* is deliberately not here: it needs a store query and
//! lives in the workflows.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for customer and product names.
const MAX_NAME_LEN: usize = 255;

/// Maximum length for email addresses (RFC 5321 limit).
const MAX_EMAIL_LEN: usize = 254;

// =============================================================================
// Phone Validation
// =============================================================================

/// Validates a phone number.
///
/// ## Accepted Shape
/// An optional leading `+`, then digit groups of 1–4, 1–4, and 1–9
/// digits, separated by at most one `-`, `.`, or whitespace character
/// each. Empty or whitespace-only input is valid: the field is optional.
///
/// ## Example
/// ```rust
/// use vela_core::validation::validate_phone;
///
/// assert!(validate_phone("+1234567890").is_ok());
/// assert!(validate_phone("123-456-7890").is_ok());
/// assert!(validate_phone("").is_ok());           // optional field
/// assert!(validate_phone("12ab34").is_err());
/// assert!(validate_phone("123--456").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    // Absent phone is always valid.
    if phone.is_empty() {
        return Ok(());
    }

    if phone_shape_ok(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be like '+1234567890' or '123-456-7890'".to_string(),
        })
    }
}

/// Scans the phone string into digit runs and checks the run lengths
/// against the three allowed groups (1–4, 1–4, 1–9 digits).
///
/// With fewer separators than groups, adjacent groups merge, so the
/// allowed run lengths widen accordingly:
/// - one run: 3–17 digits
/// - two runs: 1–4 then 2–13, or 2–8 then 1–9
/// - three runs: 1–4, 1–4, 1–9
fn phone_shape_ok(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    // Collect run lengths; a separator with no digits before or after it
    // (leading, trailing, or doubled) produces an empty run and fails.
    let mut runs: Vec<usize> = vec![0];
    for c in digits.chars() {
        if c.is_ascii_digit() {
            if let Some(last) = runs.last_mut() {
                *last += 1;
            }
        } else if c == '-' || c == '.' || c.is_whitespace() {
            if runs.last() == Some(&0) {
                return false;
            }
            runs.push(0);
        } else {
            return false;
        }
    }
    if runs.last() == Some(&0) {
        return false;
    }

    match runs.as_slice() {
        [n] => (3..=17).contains(n),
        [a, b] => {
            ((1..=4).contains(a) && (2..=13).contains(b))
                || ((2..=8).contains(a) && (1..=9).contains(b))
        }
        [a, b, c] => (1..=4).contains(a) && (1..=4).contains(b) && (1..=9).contains(c),
        _ => false,
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 255 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_name(name)
}

/// Validates a product name.
///
/// Same rules as customer names.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name(name)
}

fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// Loose structural check only: non-empty, a single `@` with non-empty
/// local and domain parts, no whitespace, length-capped. Uniqueness is a
/// store-level concern checked by the workflows.
///
/// ## Example
/// ```rust
/// use vela_core::validation::validate_email;
///
/// assert!(validate_email("a@x.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && parts.next().is_none()
        && !email.chars().any(char::is_whitespace);

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive (free products are not a thing here)
///
/// ## Example
/// ```rust
/// use vela_core::money::Money;
/// use vela_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (zero is fine)
///
/// The CHECK constraint on the products table enforces the same floor;
/// this check runs first so the caller gets a validation error instead
/// of a constraint violation.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
