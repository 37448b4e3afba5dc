//! Tests for the phrase composer module


use crate::app::models::{ClimateDate, DateValue, Element, ElementRow, FieldDescriptor, RowSpan};

/// Composer without Celsius or ordinal dates
pub fn composer() -> crate::app::services::phrase_composer::PhraseComposer {
    crate::app::services::phrase_composer::PhraseComposer::new(false, false)
}

/// Descriptor with only the observed value enabled
pub fn measured() -> FieldDescriptor {
    FieldDescriptor::measured_only()
}

/// Daily row for an element
pub fn day_row(element: Element) -> ElementRow {
    ElementRow::new(element, RowSpan::Day)
}

/// Known date slot in March 2024
pub fn march(day: u32) -> DateValue {
    DateValue::Known(ClimateDate {
        year: 2024,
        month: 3,
        day,
    })
}
