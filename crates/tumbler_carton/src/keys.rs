//! Reserved property names shared by the catalog and the code generator.

/// Current bound state of the widget; rendered as a binding, never as an
/// attribute.
pub const VALUE: &str = "value";

/// Segment labels of the multi-option design.
pub const OPTIONS: &str = "options";

/// Design variant selector.
pub const DESIGN: &str = "design";

/// Design whose `options` are declared as state rather than inline.
pub const MULTI_DESIGN: &str = "multi";

/// Whether `bag` selects the multi-option design.
#[inline]
pub fn is_multi_design(bag: &crate::PropertyBag) -> bool {
    bag.get_str(DESIGN) == Some(MULTI_DESIGN)
}
