//! # Request and Response Payloads
//!
//! Wire types for the mutation layer. Inputs deserialize from the
//! client, responses serialize back; all use camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vela_core::{Customer, Order, OrderItem, Product};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub customer_id: String,
    pub product_ids: Vec<String>,
    /// Defaults to the current time when absent.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price_cents: p.price_cents,
            stock: p.stock,
        }
    }
}

/// Outcome of a bulk customer submission. Creation is per-record:
/// `customers` holds everything that persisted, `errors` one message
/// per rejected record, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateCustomersResponse {
    pub customers: Vec<CustomerResponse>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub customer_id: String,
    pub order_date: String,
    pub total_cents: i64,
    pub items: Vec<OrderLineResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product_id: String,
    pub quantity: i64,
    pub price_at_order_cents: i64,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        Self {
            order_id: order.id,
            customer_id: order.customer_id,
            order_date: order.order_date.to_rfc3339(),
            total_cents: order.total_cents,
            items: items
                .into_iter()
                .map(|i| OrderLineResponse {
                    product_id: i.product_id,
                    quantity: i.quantity,
                    price_at_order_cents: i.price_at_order_cents,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_customer_response_serializes_camel_case() {
        let resp = CustomerResponse::from(Customer {
            id: "c1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            created_at: Utc::now(),
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"ada@example.com\""));
    }

    #[test]
    fn test_order_response_from_parts() {
        let now = Utc::now();
        let order = Order {
            id: "o1".to_string(),
            customer_id: "c1".to_string(),
            order_date: now,
            total_cents: 122_649,
        };
        let items = vec![OrderItem {
            id: "oi1".to_string(),
            order_id: "o1".to_string(),
            product_id: "p1".to_string(),
            quantity: 1,
            price_at_order_cents: 120_050,
        }];
        let resp = OrderResponse::from_parts(order, items);
        assert_eq!(resp.total_cents, 122_649);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].price_at_order_cents, 120_050);
    }

    #[test]
    fn test_customer_input_phone_defaults_to_none() {
        let input: CustomerInput =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert!(input.phone.is_none());
    }
}
