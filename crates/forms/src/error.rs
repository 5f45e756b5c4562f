//! Save/delete failures the screens report to the user.

use thiserror::Error;

use stockroom_core::DomainError;

/// Everything a form flow can refuse with.
///
/// Each variant corresponds to one user-facing notice. All of them are
/// recovered at the screen boundary: the form stays open, the registry is
/// untouched, and nothing propagates past the triggering click.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A numeric field held non-numeric text, or a required field was blank.
    #[error("blank or invalid fields")]
    InvalidFields,

    /// The minimum rule failed: min must be greater than zero and less than max.
    #[error("invalid min")]
    InvalidMin,

    /// The inventory rule failed: stock must lie between min and max.
    #[error("invalid inventory")]
    InvalidInventory,

    /// The product name was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// A delete or modify was triggered without a selection.
    #[error("nothing selected")]
    NothingSelected,

    /// The selected entity is no longer in the registry.
    #[error("not found")]
    NotFound,

    /// The product still has associated parts and cannot be deleted.
    #[error("all parts must be removed from the product before deletion")]
    PartsAssociated,
}

impl From<DomainError> for FormError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => FormError::NotFound,
            DomainError::Conflict(_) => FormError::PartsAssociated,
            DomainError::Validation(_)
            | DomainError::InvariantViolation(_)
            | DomainError::InvalidId(_) => FormError::InvalidFields,
        }
    }
}
