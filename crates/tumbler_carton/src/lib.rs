//! Carton - The shared toolbox for Tumbler.
//!
//! This crate holds the value model every other Tumbler crate speaks, much
//! like a carton (artist's portfolio case) holds the materials an artist
//! carries from one workspace to the next.
//!
//! # Modules
//!
//! - **Values**: [`PropValue`], the tagged union a widget property can hold
//! - **Bags**: [`PropertyBag`], an insertion-ordered set of property values
//! - **Formatting**: display helpers used by the playground and the docs
//! - **Keys**: reserved property names with generator-level meaning
//!
//! # Example
//!
//! ```
//! use tumbler_carton::{bag, PropValue};
//!
//! let props = bag! {
//!     "design" => "inner",
//!     "animationDuration" => 300,
//!     "options" => vec!["A", "B"],
//! };
//!
//! assert_eq!(props.keys().collect::<Vec<_>>(), ["design", "animationDuration", "options"]);
//! assert_eq!(props.get("design"), Some(&PropValue::from("inner")));
//! ```

mod bag;
pub mod format;
pub mod keys;
mod value;

pub use bag::PropertyBag;
pub use value::{js_number, PropKind, PropValue};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export once_cell for process-wide statics
pub use once_cell::sync::Lazy;

/// Build a [`PropertyBag`] from `key => value` pairs, keeping their order.
///
/// Values go through [`Into<PropValue>`], so strings, numbers, booleans,
/// vectors and nested bags can be written directly.
#[macro_export]
macro_rules! bag {
    () => {
        $crate::PropertyBag::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::PropertyBag::new();
        $(
            bag.insert($key, $value);
        )+
        bag
    }};
}
