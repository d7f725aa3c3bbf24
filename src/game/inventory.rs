//! Carried items.
//!
//! With the `inventory` session the pack holds at most
//! [`DEFAULT_CAPACITY`] items. Without it the fallback list never fills up.

use serde::{Deserialize, Serialize};

use crate::game::Rarity;

/// Capacity of the session-02 inventory.
pub const DEFAULT_CAPACITY: usize = 20;

/// An item in the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Worth in gold.
    pub value: u32,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(name: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Rarity tier for this item.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        Rarity::from_value(self.value)
    }
}

/// Error returned when an item does not fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("inventory is full ({capacity} items)")]
pub struct InventoryFull {
    /// The configured capacity.
    pub capacity: usize,
    /// The item that was rejected.
    pub item: Item,
}

/// Items in pickup order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: Option<usize>,
}

impl Inventory {
    /// Create an inventory with an optional capacity.
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Capacity implied by the compiled sessions.
    #[must_use]
    pub const fn session_capacity() -> Option<usize> {
        if cfg!(feature = "inventory") {
            Some(DEFAULT_CAPACITY)
        } else {
            None
        }
    }

    /// Add an item.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryFull`] with the rejected item when at capacity.
    pub fn add(&mut self, item: Item) -> Result<(), InventoryFull> {
        if let Some(capacity) = self.capacity
            && self.items.len() >= capacity
        {
            return Err(InventoryFull { capacity, item });
        }
        self.items.push(item);
        Ok(())
    }

    /// Configured capacity, if any.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of items carried.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|c| self.items.len() >= c)
    }

    /// Sum of item values.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.value)).sum()
    }

    /// Whether an item with this name is carried.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Iterate in pickup order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_inventory() {
        let mut inv = Inventory::new(None);
        for i in 0..100 {
            assert!(inv.add(Item::new("Pebble", i)).is_ok());
        }
        assert_eq!(inv.len(), 100);
        assert!(!inv.is_full());
    }

    #[test]
    fn test_capacity_rejects_overflow() {
        let mut inv = Inventory::new(Some(2));
        inv.add(Item::new("Iron Sword", 50)).unwrap();
        inv.add(Item::new("Leather Armor", 40)).unwrap();
        assert!(inv.is_full());

        let err = inv.add(Item::new("Gold Pile", 500)).unwrap_err();
        assert_eq!(err.capacity, 2);
        assert_eq!(err.item.name, "Gold Pile");
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_total_value_and_order() {
        let mut inv = Inventory::new(None);
        inv.add(Item::new("Health Potion", 25)).unwrap();
        inv.add(Item::new("Gold Coins", 100)).unwrap();
        assert_eq!(inv.total_value(), 125);
        let names: Vec<_> = inv.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Health Potion", "Gold Coins"]);
        assert!(inv.contains("Gold Coins"));
        assert!(!inv.contains("Magic Amulet"));
    }

    #[test]
    fn test_item_rarity() {
        assert_eq!(Item::new("Dragon Hoard", 5000).rarity(), Rarity::Legendary);
        assert_eq!(Item::new("Rusty Dagger", 10).rarity(), Rarity::Common);
    }

    #[cfg(feature = "inventory")]
    #[test]
    fn test_session_capacity() {
        assert_eq!(Inventory::session_capacity(), Some(DEFAULT_CAPACITY));
    }
}
