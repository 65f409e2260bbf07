//! # Seed Data Generator
//!
//! Populates the database with development customers, products, and a
//! couple of demo orders.
//!
//! ## Usage
//! ```bash
//! # Seed with defaults (50 customers, 200 products)
//! cargo run -p vela-db --bin seed
//!
//! # Custom amounts
//! cargo run -p vela-db --bin seed -- --customers 100 --products 500
//!
//! # Specify database path
//! cargo run -p vela-db --bin seed -- --db ./data/vela.db
//! ```
//!
//! Each customer gets a unique email (`firstname.lastname.N@example.com`)
//! and roughly half get a phone number in one of the accepted formats.
//! Products get deterministic pseudo-random prices ($0.99 - $1999.99)
//! and stock levels (0 - 100).

use chrono::Utc;
use std::env;
use uuid::Uuid;

use vela_core::{Customer, Order, OrderItem, Product, DEFAULT_LINE_QUANTITY};
use vela_db::{Database, DbConfig};

/// First names for generated customers.
const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Erin", "Frank", "Grace", "Henry", "Ivy", "Jack", "Karen",
    "Liam", "Mona", "Nate", "Olga", "Paul", "Quinn", "Rosa", "Sam", "Tina",
];

/// Last names for generated customers.
const LAST_NAMES: &[&str] = &[
    "Johnson", "Smith", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor", "Anderson",
    "Thomas", "Jackson", "White", "Harris", "Martin", "Garcia", "Clark",
];

/// Product families with a base price in cents.
const PRODUCT_FAMILIES: &[(&str, i64)] = &[
    ("Laptop", 120050),
    ("Monitor", 32900),
    ("Keyboard", 7999),
    ("Mouse", 2599),
    ("Headset", 8950),
    ("Webcam", 6499),
    ("Docking Station", 18900),
    ("USB-C Cable", 1299),
    ("External SSD", 14900),
    ("Desk Lamp", 3450),
];

/// Phone formats cycled across seeded customers; empty means no phone.
const PHONE_PATTERNS: &[fn(usize) -> Option<String>] = &[
    |i| Some(format!("+1{:03}555{:04}", 200 + i % 700, i % 10000)),
    |i| Some(format!("{:03}-555-{:04}", 200 + i % 700, i % 10000)),
    |_| None,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut customer_count: usize = 50;
    let mut product_count: usize = 200;
    let mut db_path = String::from("./vela_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    customer_count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--products" | "-p" => {
                if i + 1 < args.len() {
                    product_count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Vela CRM Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>  Number of customers to generate (default: 50)");
                println!("  -p, --products <N>   Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>      Database file path (default: ./vela_dev.db)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Vela CRM Seed Data Generator");
    println!("===============================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", customer_count);
    println!("Products:  {}", product_count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate customers
    println!();
    println!("Generating customers...");
    let start = std::time::Instant::now();

    let mut customers = Vec::with_capacity(customer_count);
    for i in 0..customer_count {
        let customer = generate_customer(i);
        db.customers().insert(&customer).await?;
        customers.push(customer);
    }
    println!("✓ Generated {} customers", customers.len());

    // Generate products
    println!("Generating products...");
    let mut products = Vec::with_capacity(product_count);
    for i in 0..product_count {
        let product = generate_product(i);
        db.products().insert(&product).await?;
        products.push(product);

        if (i + 1) % 500 == 0 {
            println!("  Generated {} products...", i + 1);
        }
    }
    println!("✓ Generated {} products", products.len());

    // A couple of demo orders so the order tables aren't empty
    println!("Generating demo orders...");
    let mut order_count = 0;
    for (i, customer) in customers.iter().take(5).enumerate() {
        let picks: Vec<&Product> = products.iter().skip(i * 3).take(2 + i % 3).collect();
        if picks.is_empty() {
            break;
        }

        let order_id = Uuid::new_v4().to_string();
        let total_cents: i64 = picks.iter().map(|p| p.price_cents).sum();
        let order = Order {
            id: order_id.clone(),
            customer_id: customer.id.clone(),
            order_date: Utc::now(),
            total_cents,
        };
        let items: Vec<OrderItem> = picks
            .iter()
            .map(|p| OrderItem {
                id: Uuid::new_v4().to_string(),
                order_id: order_id.clone(),
                product_id: p.id.clone(),
                quantity: DEFAULT_LINE_QUANTITY,
                price_at_order_cents: p.price_cents,
            })
            .collect();

        db.orders().create_with_items(&order, &items).await?;
        order_count += 1;
    }
    println!("✓ Generated {} demo orders", order_count);

    let elapsed = start.elapsed();
    println!();
    println!("✓ Seed complete in {:?}", elapsed);

    Ok(())
}

/// Generates a single customer with a unique email.
fn generate_customer(seed: usize) -> Customer {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len() + seed) % LAST_NAMES.len()];
    let phone = PHONE_PATTERNS[seed % PHONE_PATTERNS.len()](seed);

    Customer {
        id: Uuid::new_v4().to_string(),
        name: format!("{} {}", first, last),
        // Seed index keeps emails unique even when names repeat
        email: format!(
            "{}.{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            seed
        ),
        phone,
        created_at: Utc::now(),
    }
}

/// Generates a single product with a deterministic pseudo-random price.
fn generate_product(seed: usize) -> Product {
    let (family, base_price) = PRODUCT_FAMILIES[seed % PRODUCT_FAMILIES.len()];
    let variant = seed / PRODUCT_FAMILIES.len() + 1;

    // Vary price around the family base, floor at $0.99
    let jitter = ((seed * 37) % 2000) as i64 - 1000;
    let price_cents = (base_price + jitter).max(99);

    let now = Utc::now();
    Product {
        id: Uuid::new_v4().to_string(),
        name: format!("{} v{}", family, variant),
        price_cents,
        stock: ((seed * 13) % 101) as i64,
        created_at: now,
        updated_at: now,
    }
}
