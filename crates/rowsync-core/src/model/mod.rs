//! Identity-keyed item and section model
//!
//! An [`Item`] is one row with a stable id. A [`Section`] is an ordered
//! group of items with its own stable id and an optional title. The store
//! works over [`AnySection`], a type-erased copy of whatever section type
//! the caller uses.

pub mod item;
pub mod section;

pub use item::Item;
pub use section::{AnySection, DefaultSection, Section, SectionId, DEFAULT_SECTION_ID};
