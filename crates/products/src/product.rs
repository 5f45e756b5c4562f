use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId, StockLevels};
use stockroom_parts::Part;

/// Entity: Product.
///
/// An assembly with the same id/name/price/stock attributes as a part, plus
/// an ordered collection of associated parts. The collection holds snapshots
/// of the parts as they were when associated; it is not kept in sync with the
/// registry afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    levels: StockLevels,
    associated_parts: Vec<Part>,
}

impl Product {
    /// Build a product with no associated parts.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn stock(&self) -> i64 {
        self.levels.stock()
    }

    pub fn min(&self) -> i64 {
        self.levels.min()
    }

    pub fn max(&self) -> i64 {
        self.levels.max()
    }

    /// Append a part to the associated collection.
    ///
    /// No duplicate check: the same part may be associated twice.
    pub fn add_associated_part(&mut self, part: Part) {
        self.associated_parts.push(part);
    }

    /// Remove the first occurrence of `part` from the associated collection.
    ///
    /// Returns whether a removal happened.
    pub fn delete_associated_part(&mut self, part: &Part) -> bool {
        match self.associated_parts.iter().position(|p| p == part) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Immutable view of the associated parts, in association order.
    pub fn associated_parts(&self) -> &[Part] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
