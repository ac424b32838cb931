use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::BasketError;

/// Deserializing goes through [`BasketItem::new`], so a loaded item is as valid as a built one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBasketItem")]
pub struct BasketItem {
    name: String,
    price: f64,
}

#[derive(Deserialize)]
struct RawBasketItem {
    name: String,
    price: f64,
}

impl TryFrom<RawBasketItem> for BasketItem {
    type Error = BasketError;

    fn try_from(raw: RawBasketItem) -> Result<Self, Self::Error> { BasketItem::new(raw.name, raw.price) }
}

impl BasketItem {
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, BasketError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BasketError::EmptyName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(BasketError::InvalidPrice(price));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> f64 { self.price }
}

/// A shopping basket. The item list is private; callers only get the operations below.
#[derive(Debug, Default, Clone)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    pub fn new() -> Self { Self::default() }

    pub fn add_item(&mut self, item: BasketItem) {
        debug!("basket add {} ({})", item.name, item.price);
        self.items.push(item);
    }

    pub fn item_count(&self) -> usize { self.items.len() }

    pub fn total(&self) -> f64 { self.items.iter().map(|item| item.price).sum() }

    pub fn items(&self) -> &[BasketItem] { &self.items }
}
