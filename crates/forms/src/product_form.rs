//! Add/modify product screen logic.

use serde::{Deserialize, Serialize};

use stockroom_core::{ProductId, StockLevels, inventory_valid, min_valid};
use stockroom_inventory::Inventory;
use stockroom_parts::Part;
use stockroom_products::Product;

use crate::error::FormError;
use crate::fields;

/// Raw field values of the add/modify product screens, plus the working list
/// of parts attached in the screen's bottom table.
///
/// The working list is the screen's own copy; nothing touches the registry
/// until save, so cancelling the screen discards attachments for free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub stock: String,
    pub price: String,
    pub max: String,
    pub min: String,
    associated_parts: Vec<Part>,
}

impl ProductForm {
    /// Pre-fill the form from an existing product, for the modify screen.
    pub fn for_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            stock: product.stock().to_string(),
            price: product.price().to_string(),
            max: product.max().to_string(),
            min: product.min().to_string(),
            associated_parts: product.associated_parts().to_vec(),
        }
    }

    /// Attach a part to the working list. No duplicate check.
    pub fn attach_part(&mut self, part: Part) {
        self.associated_parts.push(part);
    }

    /// Detach the first occurrence of `part` from the working list.
    ///
    /// Returns whether a removal happened.
    pub fn detach_part(&mut self, part: &Part) -> bool {
        match self.associated_parts.iter().position(|p| p == part) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// The working list, in attachment order.
    pub fn associated_parts(&self) -> &[Part] {
        &self.associated_parts
    }

    /// The name check is specific and comes first; the numeric fields share
    /// the generic failure.
    fn validate(&self) -> Result<(f64, StockLevels), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::EmptyName);
        }

        let stock: i64 = fields::numeric(&self.stock)?;
        let price: f64 = fields::numeric(&self.price)?;
        let max: i64 = fields::numeric(&self.max)?;
        let min: i64 = fields::numeric(&self.min)?;

        if !min_valid(min, max) {
            return Err(FormError::InvalidMin);
        }
        if !inventory_valid(min, max, stock) {
            return Err(FormError::InvalidInventory);
        }
        Ok((price, StockLevels::new(stock, min, max)?))
    }

    fn build(&self, id: ProductId, price: f64, levels: StockLevels) -> Product {
        let mut product = Product::new(id, self.name.clone(), price, levels);
        for part in &self.associated_parts {
            product.add_associated_part(part.clone());
        }
        product
    }

    /// Save a new product under a fresh registry-assigned id.
    pub fn save(&self, inventory: &mut Inventory) -> Result<ProductId, FormError> {
        let (price, levels) = self.validate()?;
        let id = inventory.next_product_id();
        inventory.add_product(self.build(id, price, levels));
        tracing::debug!(product_id = %id, "product saved");
        Ok(id)
    }

    /// Save a modified product in place, carrying the original id.
    pub fn save_modified(&self, id: ProductId, inventory: &mut Inventory) -> Result<(), FormError> {
        let (price, levels) = self.validate()?;
        inventory.replace_product(self.build(id, price, levels))?;
        tracing::debug!(product_id = %id, "product modified");
        Ok(())
    }
}
