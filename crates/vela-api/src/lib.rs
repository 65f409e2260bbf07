//! # Vela API
//!
//! Write-side service layer for the Vela CRM. Wires the pure rules in
//! `vela-core` to the SQLite persistence in `vela-db` behind an
//! injectable [`EntityStore`] seam, and exposes the mutation workflows
//! with serializable request/response payloads.
//!
//! ## Workflows
//!
//! - [`mutations::customer::create_customer`] / [`mutations::customer::bulk_create_customers`]
//! - [`mutations::product::create_product`]
//! - [`mutations::order::create_order`]

pub mod dto;
pub mod error;
pub mod mutations;
pub mod store;

pub use dto::{
    BulkCreateCustomersResponse, CreateOrderInput, CustomerInput, CustomerResponse,
    OrderLineResponse, OrderResponse, ProductInput, ProductResponse,
};
pub use error::{ApiError, ErrorCode};
pub use store::EntityStore;
