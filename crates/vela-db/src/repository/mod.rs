//! # Repository Module
//!
//! Database repository implementations for Vela CRM.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Workflow (vela-api)                                                    │
//! │       │                                                                 │
//! │       │  db.customers().email_exists("a@x.com")                         │
//! │       │  db.orders().create_with_items(&order, &items)                  │
//! │       ▼                                                                 │
//! │  CustomerRepository / ProductRepository / OrderRepository               │
//! │       │                                                                 │
//! │       │  SQL Query (single statement or transaction)                    │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                         │
//! │  • Transactions owned by the layer that guarantees atomicity            │
//! │  • Workflows depend on an injectable store seam, not on SQL             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - Customer CRUD and email uniqueness
//! - [`product::ProductRepository`] - Product CRUD and batch resolution
//! - [`order::OrderRepository`] - Atomic order + line-item persistence

pub mod customer;
pub mod order;
pub mod product;
