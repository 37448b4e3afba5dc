//! Tests for the column layout module


use crate::app::models::{Capability, CapabilitySet};

/// Capability set containing every capability
pub fn all_capabilities() -> CapabilitySet {
    Capability::ALL.into_iter().collect()
}

/// Capability set from a list
pub fn capabilities(list: &[Capability]) -> CapabilitySet {
    list.iter().copied().collect()
}
