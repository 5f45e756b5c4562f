use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, PartId, ProductId};
use stockroom_parts::Part;
use stockroom_products::Product;

/// In-memory registry of all parts and products.
///
/// Explicitly constructed and passed by reference; there is no ambient global
/// instance. Collections are ordered by insertion and scanned linearly —
/// inventories are small. Callers read through immutable borrows
/// ([`Inventory::parts`], [`Inventory::products`]), so the borrow checker
/// rules out mutation behind the registry's back.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    parts: Vec<Part>,
    products: Vec<Product>,
    part_id_counter: u32,
    product_id_counter: u32,
}

impl Inventory {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-increment and return the part id counter.
    ///
    /// Ids grow monotonically, starting at 1. Admitting an entity with a
    /// larger caller-assigned id advances the counter past it (see
    /// [`Inventory::add_part`]), so registry-assigned ids never collide.
    pub fn next_part_id(&mut self) -> PartId {
        self.part_id_counter += 1;
        PartId::new(self.part_id_counter)
    }

    /// Pre-increment and return the product id counter.
    pub fn next_product_id(&mut self) -> ProductId {
        self.product_id_counter += 1;
        ProductId::new(self.product_id_counter)
    }

    /// Append a part to the registry.
    ///
    /// No uniqueness check on the id: a caller assigning ids by hand is
    /// responsible for avoiding collisions.
    pub fn add_part(&mut self, part: Part) -> PartId {
        let id = part.id();
        self.part_id_counter = self.part_id_counter.max(id.value());
        self.parts.push(part);
        id
    }

    /// Append a product to the registry.
    ///
    /// No uniqueness check on the id, as for [`Inventory::add_part`].
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.product_id_counter = self.product_id_counter.max(id.value());
        self.products.push(product);
        id
    }

    /// Find a part by id.
    ///
    /// Linear scan; when duplicate ids exist, the last-inserted match wins.
    pub fn lookup_part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().rev().find(|part| part.id() == id)
    }

    /// Find a product by id. Same semantics as [`Inventory::lookup_part`].
    pub fn lookup_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().rev().find(|product| product.id() == id)
    }

    /// All parts whose name exactly equals `name`, in insertion order.
    ///
    /// Substring matching belongs to the screens (see the forms crate); the
    /// registry only answers exact-name queries.
    pub fn parts_named(&self, name: &str) -> Vec<&Part> {
        self.parts.iter().filter(|part| part.name() == name).collect()
    }

    /// All products whose name exactly equals `name`, in insertion order.
    pub fn products_named(&self, name: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.name() == name)
            .collect()
    }

    /// Replace the part at a positional index into the current collection.
    pub fn update_part_at(&mut self, index: usize, part: Part) -> DomainResult<()> {
        let slot = self.parts.get_mut(index).ok_or(DomainError::NotFound)?;
        *slot = part;
        Ok(())
    }

    /// Replace the product at a positional index into the current collection.
    pub fn update_product_at(&mut self, index: usize, product: Product) -> DomainResult<()> {
        let slot = self.products.get_mut(index).ok_or(DomainError::NotFound)?;
        *slot = product;
        Ok(())
    }

    /// Replace, in place, the part whose id matches `part.id()`.
    ///
    /// With duplicate ids this targets the entry that [`Inventory::lookup_part`]
    /// resolves to. Errors with `NotFound` if no part carries the id; the
    /// registry never holds two instances of the same id mid-modify.
    pub fn replace_part(&mut self, part: Part) -> DomainResult<()> {
        let id = part.id();
        let index = self
            .parts
            .iter()
            .rposition(|p| p.id() == id)
            .ok_or(DomainError::NotFound)?;
        self.parts[index] = part;
        Ok(())
    }

    /// Replace, in place, the product whose id matches `product.id()`.
    pub fn replace_product(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id();
        let index = self
            .products
            .iter()
            .rposition(|p| p.id() == id)
            .ok_or(DomainError::NotFound)?;
        self.products[index] = product;
        Ok(())
    }

    /// Remove the part with the given id, if present.
    ///
    /// Returns whether a removal happened; an absent id leaves the registry
    /// unchanged. Products keep whatever associated-part snapshots they hold.
    pub fn delete_part(&mut self, id: PartId) -> bool {
        match self.parts.iter().position(|part| part.id() == id) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the product with the given id, if present.
    ///
    /// A product that still has associated parts cannot be deleted: the call
    /// errors with `Conflict` and the product, associations included, is left
    /// untouched. Otherwise returns whether a removal happened.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<bool> {
        let Some(index) = self.products.iter().position(|product| product.id() == id) else {
            return Ok(false);
        };
        if self.products[index].has_associated_parts() {
            return Err(DomainError::conflict(
                "all parts must be removed from the product before deletion",
            ));
        }
        self.products.remove(index);
        Ok(true)
    }

    /// Immutable view of all parts, in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Immutable view of all products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::StockLevels;

    fn levels(stock: i64, min: i64, max: i64) -> StockLevels {
        StockLevels::new(stock, min, max).unwrap()
    }

    fn bolt(id: u32) -> Part {
        Part::in_house(PartId::new(id), "Bolt", 0.5, levels(10, 1, 20), 7)
    }

    fn widget(id: u32) -> Product {
        Product::new(ProductId::new(id), "Widget", 9.99, levels(5, 1, 10))
    }

    #[test]
    fn starts_empty() {
        let inventory = Inventory::new();
        assert!(inventory.parts().is_empty());
        assert!(inventory.products().is_empty());
    }

    #[test]
    fn added_part_is_found_by_id_with_all_fields_intact() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));

        let found = inventory.lookup_part(PartId::new(1)).unwrap();
        assert_eq!(found, &bolt(1));
        assert_eq!(found.name(), "Bolt");
        assert_eq!(found.price(), 0.5);
        assert_eq!(found.stock(), 10);
        assert_eq!(found.min(), 1);
        assert_eq!(found.max(), 20);
        assert_eq!(found.machine_id(), Some(7));
        assert_eq!(inventory.parts().len(), 1);
    }

    #[test]
    fn lookup_of_unknown_id_finds_nothing() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));
        assert!(inventory.lookup_part(PartId::new(2)).is_none());
        assert!(inventory.lookup_product(ProductId::new(1)).is_none());
    }

    #[test]
    fn duplicate_part_ids_resolve_to_the_last_inserted() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));
        let mut second = bolt(1);
        second.set_name("Hex Bolt");
        inventory.add_part(second);

        let found = inventory.lookup_part(PartId::new(1)).unwrap();
        assert_eq!(found.name(), "Hex Bolt");
    }

    #[test]
    fn duplicate_product_ids_resolve_to_the_last_inserted() {
        let mut inventory = Inventory::new();
        inventory.add_product(widget(1));
        let mut second = widget(1);
        second.set_name("Widget Mk2");
        inventory.add_product(second);

        let found = inventory.lookup_product(ProductId::new(1)).unwrap();
        assert_eq!(found.name(), "Widget Mk2");
    }

    #[test]
    fn name_lookup_is_exact_match_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));
        inventory.add_part(Part::outsourced(
            PartId::new(2),
            "Bolt",
            0.6,
            levels(5, 1, 20),
            "Bolt Barn",
        ));
        inventory.add_part(Part::in_house(
            PartId::new(3),
            "Bolt Cutter",
            12.0,
            levels(2, 1, 4),
            9,
        ));

        let named = inventory.parts_named("Bolt");
        assert_eq!(named.len(), 2);
        assert_eq!(named[0].id(), PartId::new(1));
        assert_eq!(named[1].id(), PartId::new(2));

        // "Bolt Cutter" contains "Bolt" but is not an exact match.
        assert!(inventory.parts_named("bolt").is_empty());
    }

    #[test]
    fn product_name_lookup_is_exact_match() {
        let mut inventory = Inventory::new();
        inventory.add_product(widget(1));
        inventory.add_product(widget(2));

        assert_eq!(inventory.products_named("Widget").len(), 2);
        assert!(inventory.products_named("Widge").is_empty());
    }

    #[test]
    fn id_counters_pre_increment_from_one() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.next_part_id(), PartId::new(1));
        assert_eq!(inventory.next_part_id(), PartId::new(2));
        assert_eq!(inventory.next_product_id(), ProductId::new(1));
    }

    #[test]
    fn counters_advance_past_caller_assigned_ids() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(10));
        assert_eq!(inventory.next_part_id(), PartId::new(11));

        inventory.add_product(widget(4));
        assert_eq!(inventory.next_product_id(), ProductId::new(5));
    }

    #[test]
    fn update_at_replaces_the_positional_entry() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));
        inventory.add_part(bolt(2));

        let mut replacement = bolt(2);
        replacement.set_name("Anchor Bolt");
        inventory.update_part_at(1, replacement).unwrap();

        assert_eq!(inventory.parts()[1].name(), "Anchor Bolt");
        assert_eq!(inventory.parts()[0].name(), "Bolt");
    }

    #[test]
    fn update_at_rejects_an_out_of_range_index() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));

        let err = inventory.update_part_at(1, bolt(1)).unwrap_err();
        assert_eq!(err, DomainError::NotFound);

        let err = inventory.update_product_at(0, widget(1)).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn replace_part_swaps_in_place_without_a_duplicate_window() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));
        inventory.add_part(bolt(2));

        let mut modified = bolt(1);
        modified.set_price(0.75);
        inventory.replace_part(modified).unwrap();

        assert_eq!(inventory.parts().len(), 2);
        assert_eq!(inventory.parts()[0].price(), 0.75);
        assert_eq!(inventory.lookup_part(PartId::new(1)).unwrap().price(), 0.75);
    }

    #[test]
    fn replace_part_with_unknown_id_errors_and_changes_nothing() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));

        let err = inventory.replace_part(bolt(9)).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(inventory.parts().len(), 1);
        assert_eq!(inventory.parts()[0], bolt(1));
    }

    #[test]
    fn replace_product_keeps_position_and_count() {
        let mut inventory = Inventory::new();
        inventory.add_product(widget(1));
        inventory.add_product(widget(2));

        let mut modified = widget(1);
        modified.set_name("Widget Deluxe");
        inventory.replace_product(modified).unwrap();

        assert_eq!(inventory.products().len(), 2);
        assert_eq!(inventory.products()[0].name(), "Widget Deluxe");
        assert_eq!(inventory.products()[1].name(), "Widget");
    }

    #[test]
    fn deleting_an_absent_part_returns_false_and_leaves_the_registry_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));

        assert!(!inventory.delete_part(PartId::new(2)));
        assert_eq!(inventory.parts().len(), 1);
        assert_eq!(inventory.parts()[0], bolt(1));
    }

    #[test]
    fn deleting_a_present_part_removes_exactly_that_part() {
        let mut inventory = Inventory::new();
        inventory.add_part(bolt(1));
        inventory.add_part(bolt(2));

        assert!(inventory.delete_part(PartId::new(1)));
        assert_eq!(inventory.parts().len(), 1);
        assert_eq!(inventory.parts()[0].id(), PartId::new(2));
    }

    #[test]
    fn deleting_a_product_without_associations_succeeds() {
        let mut inventory = Inventory::new();
        inventory.add_product(widget(1));

        assert_eq!(inventory.delete_product(ProductId::new(1)), Ok(true));
        assert!(inventory.products().is_empty());
    }

    #[test]
    fn deleting_a_product_with_associations_is_refused() {
        let mut inventory = Inventory::new();
        let mut product = widget(1);
        product.add_associated_part(bolt(1));
        inventory.add_product(product);

        let err = inventory.delete_product(ProductId::new(1)).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for associated parts"),
        }
        assert_eq!(inventory.products().len(), 1);
        assert_eq!(inventory.products()[0].associated_parts().len(), 1);
    }

    #[test]
    fn deleting_an_absent_product_reports_no_removal() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.delete_product(ProductId::new(1)), Ok(false));
    }

    #[test]
    fn product_becomes_deletable_once_its_parts_are_detached() {
        let mut inventory = Inventory::new();
        let mut product = widget(1);
        product.add_associated_part(bolt(1));
        inventory.add_product(product);

        assert!(inventory.delete_product(ProductId::new(1)).is_err());

        let mut detached = inventory.lookup_product(ProductId::new(1)).unwrap().clone();
        let part = detached.associated_parts()[0].clone();
        assert!(detached.delete_associated_part(&part));
        inventory.replace_product(detached).unwrap();

        assert_eq!(inventory.delete_product(ProductId::new(1)), Ok(true));
        assert!(inventory.products().is_empty());
    }

    #[test]
    fn deleting_a_part_does_not_cascade_into_products() {
        let mut inventory = Inventory::new();
        let part_id = inventory.add_part(bolt(1));
        let mut product = widget(1);
        product.add_associated_part(inventory.lookup_part(part_id).unwrap().clone());
        inventory.add_product(product);

        assert!(inventory.delete_part(part_id));
        assert!(inventory.lookup_part(part_id).is_none());
        // The product still holds its snapshot of the deleted part.
        assert_eq!(inventory.products()[0].associated_parts().len(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn part_strategy() -> impl Strategy<Value = Part> {
            (
                1u32..50,
                "[A-Za-z][A-Za-z0-9 ]{0,19}",
                0.0f64..1000.0,
                1i64..50,
            )
                .prop_map(|(id, name, price, min)| {
                    let levels = StockLevels::new(min, min, min + 10).unwrap();
                    Part::in_house(PartId::new(id), name, price, levels, 1)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                // Use deterministic seed for CI reproducibility
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of adds, looking up each added id
            /// returns the last part inserted with that id.
            #[test]
            fn lookup_always_returns_the_last_match(parts in proptest::collection::vec(part_strategy(), 1..20)) {
                let mut inventory = Inventory::new();
                for part in &parts {
                    inventory.add_part(part.clone());
                }

                for part in &parts {
                    let expected = parts.iter().rev().find(|p| p.id() == part.id()).unwrap();
                    let found = inventory.lookup_part(part.id()).unwrap();
                    prop_assert_eq!(found, expected);
                }
            }

            /// Property: deleting an id not in the registry never changes it.
            #[test]
            fn deleting_an_absent_id_is_a_no_op(parts in proptest::collection::vec(part_strategy(), 0..10)) {
                let mut inventory = Inventory::new();
                for part in &parts {
                    inventory.add_part(part.clone());
                }
                let before = inventory.clone();

                let absent = PartId::new(1000);
                prop_assert!(!inventory.delete_part(absent));
                prop_assert_eq!(inventory, before);
            }

            /// Property: registry-assigned ids never collide with anything
            /// already admitted.
            #[test]
            fn assigned_ids_are_fresh(parts in proptest::collection::vec(part_strategy(), 0..10)) {
                let mut inventory = Inventory::new();
                for part in &parts {
                    inventory.add_part(part.clone());
                }

                let id = inventory.next_part_id();
                prop_assert!(inventory.lookup_part(id).is_none());
            }
        }
    }
}
