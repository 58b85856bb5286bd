//! Sample Catalog
//!
//! The demo data set: three smartphones, ten variants and six EMI plans.
//! Mirrors `migrations/*_seed_catalog.sql` so the in-memory backend and a
//! freshly migrated database serve the same catalog.

use rust_decimal::Decimal;

use super::models::{EmiPlan, Product, Variant};

const IPHONE_IMAGE: &str = "https://images.unsplash.com/photo-1592899677977-9c10ca588bbd?w=500";
const GALAXY_IMAGE: &str = "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=500";
const ONEPLUS_IMAGE: &str = "https://images.unsplash.com/photo-1601784551446-20c9e07cdbdb?w=500";

const SEED_STOCK: i32 = 10;

pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Apple iPhone 17 Pro",
            "apple-iphone-17-pro",
            "The latest iPhone with advanced features and cutting-edge technology",
            "Apple",
        ),
        product(
            2,
            "Samsung Galaxy S24 Ultra",
            "samsung-galaxy-s24-ultra",
            "Premium Android smartphone with S Pen and advanced camera system",
            "Samsung",
        ),
        product(
            3,
            "OnePlus 12",
            "oneplus-12",
            "Flagship killer with blazing fast performance and premium design",
            "OnePlus",
        ),
    ]
}

pub fn variants() -> Vec<Variant> {
    vec![
        variant(1, 1, "Silver", "256GB", 134900, 124900, IPHONE_IMAGE),
        variant(2, 1, "Space Black", "256GB", 134900, 124900, IPHONE_IMAGE),
        variant(3, 1, "Silver", "512GB", 154900, 144900, IPHONE_IMAGE),
        variant(4, 1, "Space Black", "512GB", 154900, 144900, IPHONE_IMAGE),
        variant(5, 2, "Titanium Black", "256GB", 124999, 114999, GALAXY_IMAGE),
        variant(6, 2, "Titanium Gray", "256GB", 124999, 114999, GALAXY_IMAGE),
        variant(7, 2, "Titanium Black", "512GB", 134999, 124999, GALAXY_IMAGE),
        variant(8, 3, "Silky Black", "256GB", 64999, 59999, ONEPLUS_IMAGE),
        variant(9, 3, "Flowy Emerald", "256GB", 64999, 59999, ONEPLUS_IMAGE),
        variant(10, 3, "Silky Black", "512GB", 69999, 64999, ONEPLUS_IMAGE),
    ]
}

pub fn emi_plans() -> Vec<EmiPlan> {
    vec![
        emi_plan(1, 3, Decimal::ZERO, 0),
        emi_plan(2, 6, Decimal::ZERO, 0),
        emi_plan(3, 9, Decimal::new(105, 1), 0),
        emi_plan(4, 12, Decimal::new(105, 1), 500),
        emi_plan(5, 18, Decimal::from(12), 1000),
        emi_plan(6, 24, Decimal::from(12), 2000),
    ]
}

fn product(id: i32, name: &str, slug: &str, description: &str, brand: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        category: Some("Smartphones".to_string()),
        brand: Some(brand.to_string()),
        created_at: None,
    }
}

fn variant(
    id: i32,
    product_id: i32,
    color: &str,
    storage: &str,
    mrp: i64,
    price: i64,
    image_url: &str,
) -> Variant {
    Variant {
        id,
        product_id,
        name: format!("{} - {}", storage, color),
        color: Some(color.to_string()),
        storage: Some(storage.to_string()),
        mrp: Decimal::from(mrp),
        price: Decimal::from(price),
        image_url: Some(image_url.to_string()),
        stock: Some(SEED_STOCK),
        created_at: None,
    }
}

fn emi_plan(id: i32, tenure_months: i32, interest_rate: Decimal, cashback: i64) -> EmiPlan {
    let cashback_description = (cashback > 0).then(|| format!("Get ₹{} cashback", cashback));

    EmiPlan {
        id,
        name: format!("{} Months - {}% Interest", tenure_months, interest_rate),
        tenure_months,
        interest_rate,
        cashback: Some(Decimal::from(cashback)),
        cashback_description,
        min_amount: Some(Decimal::ZERO),
        max_amount: None,
        created_at: None,
    }
}
