//! Main list view logic: search filtering and the delete flows.

use stockroom_core::{Entity, PartId, ProductId};
use stockroom_inventory::Inventory;
use stockroom_parts::Part;
use stockroom_products::Product;

use crate::error::FormError;

fn matches(term: &str, name: &str, id: impl core::fmt::Display) -> bool {
    name.to_lowercase().contains(term) || id.to_string().contains(term)
}

/// Filter the part table by the search box contents.
///
/// Case-insensitive contains match against the name or the decimal id; a
/// blank query shows the full list. This is the screens' substring search,
/// looser than the registry's exact-name lookup.
pub fn filter_parts<'a>(parts: &'a [Part], query: &str) -> Vec<&'a Part> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return parts.iter().collect();
    }
    parts
        .iter()
        .filter(|part| matches(&term, part.name(), part.id()))
        .collect()
}

/// Filter the product table by the search box contents. Same semantics as
/// [`filter_parts`].
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| matches(&term, product.name(), product.id()))
        .collect()
}

/// Delete the selected part from the main view.
///
/// No selection and a stale selection are both reported, not acted on.
pub fn delete_selected_part(
    inventory: &mut Inventory,
    selection: Option<PartId>,
) -> Result<(), FormError> {
    let id = selection.ok_or(FormError::NothingSelected)?;
    if inventory.delete_part(id) {
        tracing::debug!(part_id = %id, "part deleted");
        Ok(())
    } else {
        Err(FormError::NotFound)
    }
}

/// Delete the selected product from the main view.
///
/// Refused while the product still has associated parts; the product and its
/// associations are left untouched.
pub fn delete_selected_product(
    inventory: &mut Inventory,
    selection: Option<ProductId>,
) -> Result<(), FormError> {
    let id = selection.ok_or(FormError::NothingSelected)?;
    match inventory.delete_product(id) {
        Ok(true) => {
            tracing::debug!(product_id = %id, "product deleted");
            Ok(())
        }
        Ok(false) => Err(FormError::NotFound),
        Err(err) => {
            tracing::warn!(product_id = %id, "product deletion refused: parts still associated");
            Err(err.into())
        }
    }
}
