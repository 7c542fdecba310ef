use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::services::{Cart, CartLine};
use crate::money::Money;

/// A single click in the detail view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartOp {
    Add(String),
    Remove(String),
}

#[derive(Debug, Deserialize)]
pub struct CartRequest {
    /// Quantities the client already holds.
    #[serde(default)]
    pub items: HashMap<String, u32>,
    /// Applied in order on top of `items`.
    #[serde(default)]
    pub ops: Vec<CartOp>,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub restaurant_id: String,
    pub items: Cart,
    pub lines: Vec<CartLine>,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub total: Money,
}
