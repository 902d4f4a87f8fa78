//! Fallback type for values whose concrete enumerable type is not known.

crate::enumerable! {
    /// An enumerable with no constants.
    ///
    /// Integrations use it when a value has to be materialized before (or
    /// without) knowing which concrete type it belongs to; deserializing an
    /// [`OpenValue`](crate::OpenValue) directly yields an `Unknown`-typed value.
    /// Every `Unknown` is a non-constant and orders purely by its text.
    pub struct Unknown {}
}
