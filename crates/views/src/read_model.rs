//! Read model trait for presentation-side views.

/// A read model providing query access to rendered address book data.
///
/// Read models are refreshed from address book notifications and
/// shaped for display rather than for mutation.
pub trait ReadModel {
    /// Returns the name of this read model.
    fn name(&self) -> &'static str;

    /// Returns the number of entries in this read model.
    fn count(&self) -> usize;
}
