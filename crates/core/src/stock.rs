//! Stock-level bounds shared by parts and products.
//!
//! `min`/`max` define the admissible range and `stock` is the current
//! quantity; an entity is only admitted to the registry with
//! `0 < min < max` and `min <= stock <= max`. Both rules are enforced here,
//! at construction, so every `StockLevels` in the system is valid.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Whether a minimum stock level is admissible against a maximum.
pub fn min_valid(min: i64, max: i64) -> bool {
    min > 0 && min < max
}

/// Whether a current stock quantity falls within its `min`/`max` bounds.
pub fn inventory_valid(min: i64, max: i64, stock: i64) -> bool {
    min <= stock && stock <= max
}

/// Value object: current stock quantity plus its admissible range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    stock: i64,
    min: i64,
    max: i64,
}

impl StockLevels {
    /// Build validated stock levels.
    ///
    /// Checks the minimum rule before the inventory rule, so a violation of
    /// both reports the minimum.
    pub fn new(stock: i64, min: i64, max: i64) -> DomainResult<Self> {
        if !min_valid(min, max) {
            return Err(DomainError::validation(format!(
                "invalid min: expected 0 < min < max, got min {min}, max {max}"
            )));
        }
        if !inventory_valid(min, max, stock) {
            return Err(DomainError::validation(format!(
                "invalid inventory: expected min <= stock <= max, got stock {stock}, min {min}, max {max}"
            )));
        }
        Ok(Self { stock, min, max })
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Re-derive levels with a different current quantity, re-validated
    /// against the same bounds.
    pub fn with_stock(self, stock: i64) -> DomainResult<Self> {
        Self::new(stock, self.min, self.max)
    }
}

impl ValueObject for StockLevels {}
