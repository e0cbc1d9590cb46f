use chrono::Utc;
use log::info;
use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};
use crate::models::{Order, Product, ProductCategory};
use crate::store::{Collection, Store};

pub const CATALOG: [Product; 8] = [
    Product { id: "1", name: "Coca Cola", price: 2.5, category: ProductCategory::Drinks },
    Product { id: "2", name: "Water", price: 1.5, category: ProductCategory::Drinks },
    Product { id: "3", name: "Red Bull", price: 3.5, category: ProductCategory::Drinks },
    Product { id: "4", name: "Coffee", price: 2.0, category: ProductCategory::Drinks },
    Product { id: "5", name: "French Fries", price: 2.0, category: ProductCategory::Snacks },
    Product { id: "6", name: "Doritos", price: 2.5, category: ProductCategory::Snacks },
    Product { id: "7", name: "Chocolate", price: 1.5, category: ProductCategory::Snacks },
    Product { id: "8", name: "Sandwich", price: 5.0, category: ProductCategory::Snacks },
];

pub fn get_products() -> &'static [Product] {
    &CATALOG
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Product id to quantity. Quantities never drop to zero; the entry goes instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product_id: &str) {
        *self.items.entry(product_id.to_string()).or_insert(0) += 1;
    }

    pub fn remove(&mut self, product_id: &str) {
        if let Some(qty) = self.items.get_mut(product_id) {
            if *qty > 1 {
                *qty -= 1;
            } else {
                self.items.remove(product_id);
            }
        }
    }

    pub fn quantity(&self, product_id: &str) -> u32 {
        self.items.get(product_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &BTreeMap<String, u32> {
        &self.items
    }

    /// Ids missing from the catalog contribute nothing.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|(id, qty)| find_product(id).map_or(0.0, |p| p.price * *qty as f64))
            .sum()
    }
}

/// Records the order and empties the cart.
pub fn place_order(store: &Store, cart: &mut Cart) -> StoreResult<Order> {
    if cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }

    let order = Order {
        cart: cart.items.clone(),
        total: cart.total(),
        date: Utc::now(),
    };

    store.initialize()?;
    let stored = order.clone();
    store.modify_collection(Collection::Orders, |all: &mut Vec<Order>| all.push(stored))?;

    info!("Order placed: {} items, total {:.2}", order.cart.len(), order.total);
    *cart = Cart::new();
    Ok(order)
}

pub fn get_orders(store: &Store) -> StoreResult<Vec<Order>> {
    store.initialize()?;
    store.read_collection(Collection::Orders)
}
