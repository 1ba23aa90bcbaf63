//! Emptiness and validity checks shared by entities and list wrappers.

/// State checks the dispatcher applies to every bound response value
/// before handing it to the caller.
///
/// The two predicates are computable independently of each other; the
/// dispatcher evaluates `is_empty` first and `is_valid` second. A value
/// that passes both is returned to the caller as-is.
pub trait Checkable {
    /// True when the value carries no data at all.
    fn is_empty(&self) -> bool;

    /// True when the carried data has the shape the type expects.
    fn is_valid(&self) -> bool;
}
