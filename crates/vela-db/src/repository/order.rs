//! # Order Repository
//!
//! Database operations for orders and their line items.
//!
//! ## Atomicity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Persistence                                    │
//! │                                                                         │
//! │  create_with_items(order, items)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN TRANSACTION                                                      │
//! │       ├── INSERT INTO orders ...                                        │
//! │       ├── INSERT INTO order_items ...   (one per line)                  │
//! │       │                                                                 │
//! │       ├── any failure ──► ROLLBACK (transaction drop)                   │
//! │       │                   zero orders, zero items persisted             │
//! │       ▼                                                                 │
//! │  COMMIT                                                                 │
//! │       └── a concurrent reader never observes an order without           │
//! │           its items, or a total inconsistent with them                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use vela_core::{Order, OrderItem};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists an order together with its line items atomically.
    ///
    /// Either the order row and every item row commit, or none do. A
    /// failure on any statement (constraint violation, connection loss)
    /// rolls the whole transaction back.
    pub async fn create_with_items(&self, order: &Order, items: &[OrderItem]) -> DbResult<()> {
        debug!(
            id = %order.id,
            customer_id = %order.customer_id,
            items = items.len(),
            "Creating order"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, order_date, total_cents)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&order.id)
        .bind(&order.customer_id)
        .bind(order.order_date)
        .bind(order.total_cents)
        .execute(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, quantity, price_at_order_cents)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&item.id)
            .bind(&item.order_id)
            .bind(&item.product_id)
            .bind(item.quantity)
            .bind(item.price_at_order_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date, total_cents
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Lists a customer's orders, newest first.
    pub async fn get_by_customer(&self, customer_id: &str) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date, total_cents
            FROM orders
            WHERE customer_id = ?1
            ORDER BY order_date DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Gets all line items for an order.
    pub async fn get_items(&self, order_id: &str) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, quantity, price_at_order_cents
            FROM order_items
            WHERE order_id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Counts orders (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts order items across all orders (for diagnostics and tests).
    pub async fn count_items(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use uuid::Uuid;
    use vela_core::{Customer, Product, DEFAULT_LINE_QUANTITY};

    async fn setup() -> (Database, Customer, Product) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let customer = Customer {
            id: "c1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            created_at: Utc::now(),
        };
        db.customers().insert(&customer).await.unwrap();

        let now = Utc::now();
        let product = Product {
            id: "p1".to_string(),
            name: "Laptop".to_string(),
            price_cents: 120050,
            stock: 5,
            created_at: now,
            updated_at: now,
        };
        db.products().insert(&product).await.unwrap();

        (db, customer, product)
    }

    fn line(order_id: &str, product_id: &str, price_cents: i64) -> OrderItem {
        OrderItem {
            id: Uuid::new_v4().to_string(),
            order_id: order_id.to_string(),
            product_id: product_id.to_string(),
            quantity: DEFAULT_LINE_QUANTITY,
            price_at_order_cents: price_cents,
        }
    }

    #[tokio::test]
    async fn test_create_with_items_commits() {
        let (db, customer, product) = setup().await;
        let repo = db.orders();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            order_date: Utc::now(),
            total_cents: product.price_cents,
        };
        let items = vec![line(&order.id, &product.id, product.price_cents)];

        repo.create_with_items(&order, &items).await.unwrap();

        let fetched = repo.get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.total_cents, 120050);

        let fetched_items = repo.get_items(&order.id).await.unwrap();
        assert_eq!(fetched_items.len(), 1);
        assert_eq!(fetched_items[0].price_at_order_cents, 120050);
        assert_eq!(fetched_items[0].quantity, 1);

        let by_customer = repo.get_by_customer(&customer.id).await.unwrap();
        assert_eq!(by_customer.len(), 1);
        assert!(repo.get_by_customer("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_items_rolls_back_on_bad_reference() {
        let (db, customer, product) = setup().await;
        let repo = db.orders();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            order_date: Utc::now(),
            total_cents: product.price_cents * 2,
        };
        // Second item references a product that doesn't exist; the FK
        // constraint fires mid-transaction.
        let items = vec![
            line(&order.id, &product.id, product.price_cents),
            line(&order.id, "no-such-product", product.price_cents),
        ];

        let result = repo.create_with_items(&order, &items).await;
        assert!(result.is_err());

        // Nothing committed: no order row, no item rows.
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.count_items().await.unwrap(), 0);
        assert!(repo.get_by_id(&order.id).await.unwrap().is_none());
    }
}
