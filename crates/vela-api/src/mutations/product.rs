//! # Product Mutations

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use vela_core::validation::{validate_price, validate_product_name, validate_stock};
use vela_core::{Money, Product};

use crate::dto::{ProductInput, ProductResponse};
use crate::error::ApiError;
use crate::store::EntityStore;

/// Creates a product. Price must be strictly positive, stock
/// non-negative; both are checked before the store is touched.
pub async fn create_product<S: EntityStore>(
    store: &S,
    input: ProductInput,
) -> Result<ProductResponse, ApiError> {
    debug!(name = %input.name, price_cents = input.price_cents, "create_product");

    validate_product_name(&input.name)?;
    validate_price(Money::from_cents(input.price_cents))?;
    validate_stock(input.stock)?;

    let now = Utc::now();
    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: input.name.trim().to_string(),
        price_cents: input.price_cents,
        stock: input.stock,
        created_at: now,
        updated_at: now,
    };

    store.insert_product(&product).await?;

    info!(product_id = %product.id, "Product created");
    Ok(product.into())
}
