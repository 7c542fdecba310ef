use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::MenuItem;
use crate::money::Money;

/// Quantities keyed by menu item id. Stored quantities are always >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, u32>,
}

/// A cart entry resolved against a menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw quantities; zero quantities are dropped.
    pub fn from_quantities<I>(quantities: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            entries: quantities.into_iter().filter(|(_, qty)| *qty > 0).collect(),
        }
    }

    /// Increments the quantity, saturating at `u32::MAX`.
    pub fn add_item(&mut self, item_id: &str) {
        let qty = self.entries.entry(item_id.to_owned()).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Decrements the quantity; the entry is removed instead of reaching zero.
    pub fn remove_item(&mut self, item_id: &str) {
        match self.entries.get_mut(item_id) {
            Some(qty) if *qty > 1 => *qty -= 1,
            Some(_) => {
                self.entries.remove(item_id);
            }
            None => {}
        }
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.entries.get(item_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of `price * quantity`; ids missing from `menu` contribute nothing.
    pub fn total(&self, menu: &[MenuItem]) -> Money {
        self.entries
            .iter()
            .filter_map(|(id, qty)| find_item(menu, id).map(|item| item.price * *qty))
            .sum()
    }

    pub fn order_total(&self, menu: &[MenuItem], delivery_fee: Money) -> Money {
        self.total(menu) + delivery_fee
    }

    /// Resolved lines in menu order; unknown ids are skipped.
    pub fn lines(&self, menu: &[MenuItem]) -> Vec<CartLine> {
        menu.iter()
            .filter_map(|item| {
                let quantity = self.quantity(&item.id);
                (quantity > 0).then(|| CartLine {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    unit_price: item.price,
                    quantity,
                    subtotal: item.price * quantity,
                })
            })
            .collect()
    }
}

fn find_item<'m>(menu: &'m [MenuItem], id: &str) -> Option<&'m MenuItem> {
    menu.iter().find(|m| m.id == id)
}
