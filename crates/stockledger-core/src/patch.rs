//! Partial updates.
//!
//! An update can only set a field, never clear it, so each patchable field is
//! either [`FieldUpdate::Set`] or [`FieldUpdate::Unchanged`].

use crate::Record;

/// A single field of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Overwrite the field with this value.
    Set(T),
    /// Keep the field's current value.
    #[default]
    Unchanged,
}

impl<T> FieldUpdate<T> {
    /// Returns `true` if this update sets a value.
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Write the value into `slot` if one is set.
    pub fn apply_to(&self, slot: &mut T)
    where
        T: Clone,
    {
        if let Self::Set(value) = self {
            slot.clone_from(value);
        }
    }
}

impl FieldUpdate<String> {
    /// Treat blank input as "leave unchanged".
    ///
    /// This is how the interactive menu reads the optional update prompts.
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            Self::Unchanged
        } else {
            Self::Set(input.to_string())
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Set)
    }
}

/// The operator-editable fields of a record.
///
/// Identity and catalog metadata are fixed at creation and cannot be patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordPatch {
    /// New quantity.
    pub quantity: FieldUpdate<String>,
    /// New expiration date.
    pub expiration_date: FieldUpdate<String>,
    /// New price.
    pub price: FieldUpdate<String>,
}

impl RecordPatch {
    /// An empty patch that leaves every field unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = FieldUpdate::Set(quantity.into());
        self
    }

    /// Set the expiration date.
    pub fn expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = FieldUpdate::Set(date.into());
        self
    }

    /// Set the price.
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = FieldUpdate::Set(price.into());
        self
    }

    /// Returns `true` if no field would change.
    pub const fn is_empty(&self) -> bool {
        !self.quantity.is_set() && !self.expiration_date.is_set() && !self.price.is_set()
    }

    /// Apply the set fields to `record`.
    pub fn apply(&self, record: &mut Record) {
        self.quantity.apply_to(&mut record.quantity);
        self.expiration_date.apply_to(&mut record.expiration_date);
        self.price.apply_to(&mut record.price);
    }
}
