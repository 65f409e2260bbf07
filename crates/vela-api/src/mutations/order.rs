//! # Order Assembly
//!
//! The order workflow resolves every reference up front, prices each
//! line from the product's current price, and persists the order with
//! all of its lines in one atomic store call. Any failure before the
//! store call leaves nothing behind; any failure inside it rolls the
//! whole order back.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use vela_core::{CoreError, Money, Order, OrderItem, Product, DEFAULT_LINE_QUANTITY};

use crate::dto::{CreateOrderInput, OrderResponse};
use crate::error::ApiError;
use crate::store::EntityStore;

/// Creates an order for an existing customer from a list of product
/// references.
///
/// Each reference becomes one line at [`DEFAULT_LINE_QUANTITY`], priced
/// at the product's price at this moment; later price changes do not
/// touch persisted lines. A repeated product id yields a repeated line.
/// The order date defaults to now when the input carries none.
pub async fn create_order<S: EntityStore>(
    store: &S,
    input: CreateOrderInput,
) -> Result<OrderResponse, ApiError> {
    debug!(
        customer_id = %input.customer_id,
        product_refs = input.product_ids.len(),
        "create_order"
    );

    // The customer resolves first; an empty product list on top of a bad
    // customer reports the bad customer.
    store
        .get_customer(&input.customer_id)
        .await?
        .ok_or_else(|| CoreError::CustomerNotFound(input.customer_id.clone()))?;

    if input.product_ids.is_empty() {
        return Err(CoreError::NoProductsSelected.into());
    }

    let products = store.get_products_by_ids(&input.product_ids).await?;
    let by_id: HashMap<&str, &Product> =
        products.iter().map(|p| (p.id.as_str(), p)).collect();

    let order_id = Uuid::new_v4().to_string();
    let mut items = Vec::with_capacity(input.product_ids.len());
    for product_id in &input.product_ids {
        let product = by_id
            .get(product_id.as_str())
            .ok_or_else(|| CoreError::ProductNotFound(product_id.clone()))?;
        items.push(OrderItem {
            id: Uuid::new_v4().to_string(),
            order_id: order_id.clone(),
            product_id: product.id.clone(),
            quantity: DEFAULT_LINE_QUANTITY,
            price_at_order_cents: product.price_cents,
        });
    }

    let total: Money = items.iter().map(|i| i.line_total()).sum();
    let order = Order {
        id: order_id,
        customer_id: input.customer_id,
        order_date: input.order_date.unwrap_or_else(Utc::now),
        total_cents: total.cents(),
    };

    store.create_order(&order, &items).await?;

    info!(
        order_id = %order.id,
        customer_id = %order.customer_id,
        total_cents = order.total_cents,
        lines = items.len(),
        "Order created"
    );

    Ok(OrderResponse::from_parts(order, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CustomerInput, ProductInput};
    use crate::error::ErrorCode;
    use crate::mutations::{customer::create_customer, product::create_product};
    use vela_db::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    async fn seed_customer(db: &Database) -> String {
        create_customer(
            db,
            CustomerInput {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn seed_product(db: &Database, name: &str, price_cents: i64) -> String {
        create_product(
            db,
            ProductInput {
                name: name.to_string(),
                price_cents,
                stock: 10,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_create_order_totals_snapshot_prices() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let laptop = seed_product(&db, "Laptop", 120_050).await;
        let mouse = seed_product(&db, "Mouse", 2_599).await;

        let resp = create_order(
            &db,
            CreateOrderInput {
                customer_id: customer_id.clone(),
                product_ids: vec![laptop.clone(), mouse.clone()],
                order_date: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.customer_id, customer_id);
        assert_eq!(resp.total_cents, 122_649);
        assert_eq!(resp.items.len(), 2);
        assert!(resp.items.iter().all(|i| i.quantity == 1));
        assert_eq!(db.orders().count().await.unwrap(), 1);
        assert_eq!(db.orders().count_items().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_order_rejects_empty_product_list() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;

        let err = create_order(
            &db,
            CreateOrderInput {
                customer_id,
                product_ids: vec![],
                order_date: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_customer_wins_over_empty_product_list() {
        let db = test_db().await;

        let err = create_order(
            &db,
            CreateOrderInput {
                customer_id: "no-such-customer".to_string(),
                product_ids: vec![],
                order_date: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("no-such-customer"));
    }

    #[tokio::test]
    async fn test_create_order_unknown_customer() {
        let db = test_db().await;
        let laptop = seed_product(&db, "Laptop", 120_050).await;

        let err = create_order(
            &db,
            CreateOrderInput {
                customer_id: "no-such-customer".to_string(),
                product_ids: vec![laptop],
                order_date: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("no-such-customer"));
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_order_one_bad_product_persists_nothing() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let laptop = seed_product(&db, "Laptop", 120_050).await;

        let err = create_order(
            &db,
            CreateOrderInput {
                customer_id,
                product_ids: vec![laptop, "no-such-product".to_string()],
                order_date: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("no-such-product"));
        assert_eq!(db.orders().count().await.unwrap(), 0);
        assert_eq!(db.orders().count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_order_lines_survive_price_change() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let laptop = seed_product(&db, "Laptop", 120_050).await;

        let resp = create_order(
            &db,
            CreateOrderInput {
                customer_id,
                product_ids: vec![laptop.clone()],
                order_date: None,
            },
        )
        .await
        .unwrap();

        db.products().update_price(&laptop, 99_999).await.unwrap();

        let stored = db.orders().get_by_id(&resp.order_id).await.unwrap().unwrap();
        let items = db.orders().get_items(&resp.order_id).await.unwrap();
        assert_eq!(stored.total_cents, 120_050);
        assert_eq!(items[0].price_at_order_cents, 120_050);
    }

    #[tokio::test]
    async fn test_explicit_order_date_is_kept() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let mouse = seed_product(&db, "Mouse", 2_599).await;
        let when = chrono::DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);

        let resp = create_order(
            &db,
            CreateOrderInput {
                customer_id,
                product_ids: vec![mouse],
                order_date: Some(when),
            },
        )
        .await
        .unwrap();

        let stored = db.orders().get_by_id(&resp.order_id).await.unwrap().unwrap();
        assert_eq!(stored.order_date, when);
    }

    #[tokio::test]
    async fn test_repeated_product_id_yields_repeated_line() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let mouse = seed_product(&db, "Mouse", 2_599).await;

        let resp = create_order(
            &db,
            CreateOrderInput {
                customer_id,
                product_ids: vec![mouse.clone(), mouse.clone()],
                order_date: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.total_cents, 5_198);
        assert_eq!(db.orders().count_items().await.unwrap(), 2);
    }
}
