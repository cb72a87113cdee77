// Shrinkage (merma) domain module
// Contains the header/detail records, reference data and value objects

#![allow(clippy::module_inception)]

pub mod shrinkage;
pub mod value_objects;

// Re-export main types for convenience
pub use shrinkage::{
    NewShrinkageDetailLine, NewShrinkageHeader, Product, ShrinkageDetailLine, ShrinkageReason,
    ShrinkageSummary,
};
pub use value_objects::BranchIds;
