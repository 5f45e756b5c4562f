use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, StockLevels};

/// Where a part comes from: made on one of our machines, or bought in from a
/// supplier company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartSource {
    InHouse { machine_id: i32 },
    Outsourced { company_name: String },
}

impl PartSource {
    pub fn is_in_house(&self) -> bool {
        matches!(self, PartSource::InHouse { .. })
    }

    /// The label the part screens show next to the variant-specific field.
    pub fn field_label(&self) -> &'static str {
        match self {
            PartSource::InHouse { .. } => "Machine ID",
            PartSource::Outsourced { .. } => "Company Name",
        }
    }
}

/// Entity: Part.
///
/// A plain data holder; the only invariant it carries is the one its
/// `StockLevels` enforces at construction. Price is accepted as-is, without a
/// non-negativity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: f64,
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: f64,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
        }
    }

    /// Convenience constructor for a part produced in-house.
    pub fn in_house(
        id: PartId,
        name: impl Into<String>,
        price: f64,
        levels: StockLevels,
        machine_id: i32,
    ) -> Self {
        Self::new(id, name, price, levels, PartSource::InHouse { machine_id })
    }

    /// Convenience constructor for a part bought from a supplier.
    pub fn outsourced(
        id: PartId,
        name: impl Into<String>,
        price: f64,
        levels: StockLevels,
        company_name: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            levels,
            PartSource::Outsourced {
                company_name: company_name.into(),
            },
        )
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

    /// Replace the stock attributes as a unit; `StockLevels` construction is
    /// the only way in, so the bounds invariant cannot be broken here.
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }

    /// Machine id, if this part is made in-house.
    pub fn machine_id(&self) -> Option<i32> {
        match &self.source {
            PartSource::InHouse { machine_id } => Some(*machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// Supplier company name, if this part is outsourced.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::InHouse { .. } => None,
            PartSource::Outsourced { company_name } => Some(company_name),
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}
