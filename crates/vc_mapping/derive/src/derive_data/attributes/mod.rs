//! Provide some tools for parsing `#[reflect(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod flags;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use flags::TraitImplSwitches;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;
