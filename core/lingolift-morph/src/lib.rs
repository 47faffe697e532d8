//! Universal Features handling: parsing morphology strings, selecting the
//! feature-set shape, and legible labels for display.

pub mod legible;
pub mod shape;
pub mod tags;

pub use legible::{feature_instances, legible_label, legible_tags, NOMINAL_FEATURES, VERBAL_FEATURES};
pub use shape::feature_set_from_tags;
pub use tags::MorphTags;
