//! # Domain Types
//!
//! Core domain types used throughout Vela CRM.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Customer     │   │     Product     │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id (UUID)      │   │  id (UUID)      │                              │
//! │  │  name           │   │  name           │                              │
//! │  │  email (UNIQUE) │   │  price_cents    │                              │
//! │  │  phone (opt)    │   │  stock          │                              │
//! │  └────────┬────────┘   └────────┬────────┘                              │
//! │           │ 1                   │ snapshot                              │
//! │           │                     │                                       │
//! │  ┌────────┴────────┐   ┌────────┴────────┐                              │
//! │  │      Order      │ 1 │    OrderItem    │                              │
//! │  │  ─────────────  │───│  ─────────────  │                              │
//! │  │  customer_id    │ * │  order_id       │                              │
//! │  │  order_date     │   │  product_id     │                              │
//! │  │  total_cents    │   │  quantity       │                              │
//! │  └─────────────────┘   │  price_at_order │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderItem.price_at_order_cents` freezes the product price at order
//! creation time. Later price changes never alter a persisted order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer in the CRM.
///
/// Customers are created by the single or bulk creation workflow and are
/// never mutated by the core; deletion is an external administrative action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, non-empty.
    pub name: String,

    /// Email address, globally unique across the store.
    pub email: String,

    /// Optional phone number; must match the loose grouped-digit pattern
    /// when present (see `validation::validate_phone`).
    pub phone: Option<String>,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, non-empty.
    pub name: String,

    /// Price in cents (smallest currency unit), strictly positive.
    pub price_cents: i64,

    /// Current stock level, never negative.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (price maintenance).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// `total_cents` is computed at creation time from the line-item price
/// snapshots and is never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The customer this order belongs to (must pre-exist).
    pub customer_id: String,

    /// Order timestamp; defaults to creation time when unspecified.
    pub order_date: DateTime<Utc>,

    /// Order total in cents, the sum of `price_at_order * quantity`
    /// over the order's line items.
    pub total_cents: i64,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
///
/// Owned exclusively by its order (cascades on order deletion) and
/// immutable once created. Uses the snapshot pattern to freeze the
/// product price at the time of ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The order this line belongs to.
    pub order_id: String,

    /// The product this line references.
    pub product_id: String,

    /// Quantity ordered, at least 1. The current order input format
    /// carries one product reference per line, so this is always 1;
    /// the column exists so a richer input format needs no migration.
    pub quantity: i64,

    /// Product price in cents at the moment of order creation (frozen).
    pub price_at_order_cents: i64,
}

impl OrderItem {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn price_at_order(&self) -> Money {
        Money::from_cents(self.price_at_order_cents)
    }

    /// Returns the line total (frozen price × quantity) as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price_at_order().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
