//! # Entity Store Seam
//!
//! The injectable store abstraction the workflows run against.
//!
//! ## Why a Trait?
//! The workflows (order assembly, bulk customer creation) are business
//! logic; the store is a collaborator. Injecting it as a trait keeps the
//! workflows testable against substitutes and keeps SQL out of the
//! orchestration layer. `vela_db::Database` is the production
//! implementation, delegating to its repositories.
//!
//! ## Atomicity at the Seam
//! `create_order` takes the complete order plus all of its line items in
//! one call, so the store owns the all-or-nothing guarantee. The SQLite
//! implementation runs one transaction; a substitute must apply all rows
//! or none.

use vela_core::{Customer, Order, OrderItem, Product};
use vela_db::{Database, DbResult};

/// Store operations required by the workflows.
///
/// All methods are request-scoped and stateless between invocations;
/// the only shared state is the store itself.
#[allow(async_fn_in_trait)]
pub trait EntityStore {
    /// Resolves a customer by id.
    async fn get_customer(&self, id: &str) -> DbResult<Option<Customer>>;

    /// Checks whether any customer already has the given email.
    async fn customer_email_exists(&self, email: &str) -> DbResult<bool>;

    /// Persists a customer. Fails with a unique violation on a
    /// duplicate email.
    async fn insert_customer(&self, customer: &Customer) -> DbResult<()>;

    /// Resolves a batch of product ids in one lookup. Missing ids are
    /// simply absent from the result.
    async fn get_products_by_ids(&self, ids: &[String]) -> DbResult<Vec<Product>>;

    /// Persists a product.
    async fn insert_product(&self, product: &Product) -> DbResult<()>;

    /// Persists an order with its line items atomically: every row
    /// commits or none does.
    async fn create_order(&self, order: &Order, items: &[OrderItem]) -> DbResult<()>;
}

impl EntityStore for Database {
    async fn get_customer(&self, id: &str) -> DbResult<Option<Customer>> {
        self.customers().get_by_id(id).await
    }

    async fn customer_email_exists(&self, email: &str) -> DbResult<bool> {
        self.customers().email_exists(email).await
    }

    async fn insert_customer(&self, customer: &Customer) -> DbResult<()> {
        self.customers().insert(customer).await
    }

    async fn get_products_by_ids(&self, ids: &[String]) -> DbResult<Vec<Product>> {
        self.products().get_by_ids(ids).await
    }

    async fn insert_product(&self, product: &Product) -> DbResult<()> {
        self.products().insert(product).await
    }

    async fn create_order(&self, order: &Order, items: &[OrderItem]) -> DbResult<()> {
        self.orders().create_with_items(order, items).await
    }
}
