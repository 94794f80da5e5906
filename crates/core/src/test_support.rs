//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use crate::catalog::Catalog;
use crate::types::{CurrencyCode, Price, Product, ProductId};

pub fn product(id: i32, name: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        price: Price::from_cents(1000, CurrencyCode::USD),
        image: None,
    }
}

pub fn blue_tee() -> Product {
    Product {
        id: ProductId::new(1),
        name: "Blue Tee".to_string(),
        description: "Soft cotton tee".to_string(),
        category: "Shirts".to_string(),
        price: Price::from_cents(1999, CurrencyCode::USD),
        image: None,
    }
}

pub fn red_mug() -> Product {
    Product {
        id: ProductId::new(2),
        name: "Red Mug".to_string(),
        description: "Ceramic coffee mug".to_string(),
        category: "Mugs".to_string(),
        price: Price::from_cents(1250, CurrencyCode::USD),
        image: None,
    }
}

#[allow(clippy::unwrap_used)]
pub fn example_catalog() -> Catalog {
    Catalog::new(vec![blue_tee(), red_mug()]).unwrap()
}
