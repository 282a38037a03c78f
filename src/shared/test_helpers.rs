//! Fixtures shared by unit and handler tests.

use rust_decimal::Decimal;

use crate::features::catalog::models::{Product, Variant};
use crate::features::categories::models::Category;

pub fn category(id: i64, code: &str, name: &str) -> Category {
    Category {
        id,
        code: code.to_string(),
        name: name.to_string(),
    }
}

pub fn variant(id: i64, product_id: i64, name: &str, sku: &str, price: Option<Decimal>) -> Variant {
    Variant {
        id,
        product_id,
        name: name.to_string(),
        sku: sku.to_string(),
        price,
    }
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        category(1, "clothing", "Clothing"),
        category(2, "shoes", "Shoes"),
        category(3, "accessories", "Accessories"),
    ]
}

/// Four products in insertion order:
///
/// | code | price | category |
/// |------|-------|----------|
/// | PROD001 | 100.00 | clothing |
/// | PROD002 | 50.00 | shoes |
/// | PROD003 | 75.00 | accessories |
/// | PROD004 | 150.00 | clothing |
///
/// PROD001 has three variants: Small priced at zero, Medium at 110.00 and
/// Large without a price.
pub fn sample_catalog() -> Vec<Product> {
    let [clothing, shoes, accessories]: [Category; 3] = sample_categories()
        .try_into()
        .expect("three sample categories");

    vec![
        Product {
            id: 1,
            code: "PROD001".to_string(),
            price: Decimal::new(10000, 2),
            category: clothing.clone(),
            variants: vec![
                variant(1, 1, "Small", "PROD001-S", Some(Decimal::new(0, 2))),
                variant(2, 1, "Medium", "PROD001-M", Some(Decimal::new(11000, 2))),
                variant(3, 1, "Large", "PROD001-L", None),
            ],
        },
        Product {
            id: 2,
            code: "PROD002".to_string(),
            price: Decimal::new(5000, 2),
            category: shoes,
            variants: vec![],
        },
        Product {
            id: 3,
            code: "PROD003".to_string(),
            price: Decimal::new(7500, 2),
            category: accessories,
            variants: vec![],
        },
        Product {
            id: 4,
            code: "PROD004".to_string(),
            price: Decimal::new(15000, 2),
            category: clothing,
            variants: vec![variant(4, 4, "One Size", "PROD004-OS", None)],
        },
    ]
}
