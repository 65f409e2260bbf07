//! # Mutations
//!
//! Write-side workflows. Each function validates its input against the
//! pure rules in `vela_core`, then drives the injected [`EntityStore`]
//! to persist the result.
//!
//! [`EntityStore`]: crate::store::EntityStore

pub mod customer;
pub mod order;
pub mod product;
