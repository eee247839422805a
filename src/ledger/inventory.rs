use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::format_money;

/// A stocked item with a quantity and a unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`.
    pub fn total_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item: {}, Quantity: {}, Unit Price: {}, Total Value: {}",
            self.name,
            self.quantity,
            format_money(self.unit_price),
            format_money(self.total_value())
        )
    }
}

/// Result of adding stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockChange {
    /// A new item was created.
    Added,
    /// An existing item was topped up; holds the new quantity.
    Restocked { quantity: u32 },
}

/// Result of a successful removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub removed: u32,
    pub remaining: u32,
    /// True when the item ran out and was dropped from the inventory.
    pub exhausted: bool,
}
