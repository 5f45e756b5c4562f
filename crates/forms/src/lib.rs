//! Form logic behind the inventory screens.
//!
//! Everything the add/modify/main screens do between a button click and a
//! registry call lives here: raw field parsing, validation, the save and
//! delete flows, and the main view's list filtering. The GUI shell (windows,
//! dialogs, field wiring) stays outside this workspace; it hands raw field
//! strings in and renders the [`FormError`] it gets back.

pub mod error;
pub mod main_view;
pub mod part_form;
pub mod product_form;

mod fields;

pub use error::FormError;
pub use main_view::{delete_selected_part, delete_selected_product, filter_parts, filter_products};
pub use part_form::{PartForm, SourceChoice};
pub use product_form::ProductForm;
