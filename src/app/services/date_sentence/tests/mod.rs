//! Tests for the date sentence module


use crate::app::models::{ClimateDate, DateValue};

/// Known date slot in 2024
pub fn known(month: u32, day: u32) -> DateValue {
    DateValue::Known(ClimateDate {
        year: 2024,
        month,
        day,
    })
}

/// Date in 2024
pub fn date(month: u32, day: u32) -> ClimateDate {
    ClimateDate {
        year: 2024,
        month,
        day,
    }
}
