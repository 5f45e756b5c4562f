//! Add/modify part screen logic.

use serde::{Deserialize, Serialize};

use stockroom_core::{PartId, StockLevels, inventory_valid, min_valid};
use stockroom_inventory::Inventory;
use stockroom_parts::{Part, PartSource};

use crate::error::FormError;
use crate::fields;

/// Which source radio button is selected on the part screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceChoice {
    #[default]
    InHouse,
    Outsourced,
}

/// Raw field values of the add/modify part screens, exactly as entered.
///
/// Validation happens on save, strictly before any registry call; an aborted
/// save leaves the registry untouched and the form open for correction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartForm {
    pub name: String,
    pub stock: String,
    pub price: String,
    pub max: String,
    pub min: String,
    pub source: SourceChoice,
    /// The shared variant field: machine id text for in-house, company name
    /// for outsourced.
    pub source_field: String,
}

impl PartForm {
    /// Pre-fill the form from an existing part, for the modify screen.
    pub fn for_part(part: &Part) -> Self {
        let (source, source_field) = match part.source() {
            PartSource::InHouse { machine_id } => (SourceChoice::InHouse, machine_id.to_string()),
            PartSource::Outsourced { company_name } => {
                (SourceChoice::Outsourced, company_name.clone())
            }
        };
        Self {
            name: part.name().to_string(),
            stock: part.stock().to_string(),
            price: part.price().to_string(),
            max: part.max().to_string(),
            min: part.min().to_string(),
            source,
            source_field,
        }
    }

    /// Field order mirrors the screen: stock, price, max, min, then the
    /// range rules, then the variant payload.
    fn validate(&self) -> Result<(f64, StockLevels, PartSource), FormError> {
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
        let levels = StockLevels::new(stock, min, max)?;

        let source = match self.source {
            SourceChoice::InHouse => PartSource::InHouse {
                machine_id: fields::numeric(&self.source_field)?,
            },
            SourceChoice::Outsourced => PartSource::Outsourced {
                company_name: self.source_field.clone(),
            },
        };
        Ok((price, levels, source))
    }

    /// Save a new part under a fresh registry-assigned id.
    pub fn save(&self, inventory: &mut Inventory) -> Result<PartId, FormError> {
        let (price, levels, source) = self.validate()?;
        let id = inventory.next_part_id();
        inventory.add_part(Part::new(id, self.name.clone(), price, levels, source));
        tracing::debug!(part_id = %id, "part saved");
        Ok(id)
    }

    /// Save a modified part in place, carrying the original id.
    pub fn save_modified(&self, id: PartId, inventory: &mut Inventory) -> Result<(), FormError> {
        let (price, levels, source) = self.validate()?;
        inventory.replace_part(Part::new(id, self.name.clone(), price, levels, source))?;
        tracing::debug!(part_id = %id, "part modified");
        Ok(())
    }
}
