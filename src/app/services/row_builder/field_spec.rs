//! Declarative rendering rules for each reportable element
//!
//! Every element is described by one [`FieldSpec`]: where it goes in a
//! product, how its numbers are rounded, and whether and how it is compared
//! against historical records. The row builder and the sentence composer
//! both read this table instead of carrying per-element code.

use crate::app::models::{Element, ObservationValue};
use crate::app::services::record_evaluator::Direction;
use crate::app::services::sentinel_codec::{self, DisplayToken, Precision};
use crate::config::Tolerances;
use serde::{Deserialize, Serialize};

/// Product section an element is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Temperature,
    Precipitation,
    Snowfall,
    DegreeDays,
}

impl Section {
    /// Sections in product order
    pub const ALL: [Section; 4] = [
        Section::Temperature,
        Section::Precipitation,
        Section::Snowfall,
        Section::DegreeDays,
    ];

    /// Heading line printed above the section in tabular products
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Temperature => "Temperature (F)",
            Section::Precipitation => "Precipitation (IN)",
            Section::Snowfall => "Snowfall (IN)",
            Section::DegreeDays => "Degree Days",
        }
    }
}

/// Kind of quantity, selecting the record-comparison tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Temperature,
    Precipitation,
    Snow,
    Count,
}

/// Rendering rules for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub element: Element,
    /// Row label and noun used in tables
    pub label: &'static str,
    pub section: Section,
    pub precision: Precision,
    /// How records are compared; `None` when the element has no records
    pub direction: Option<Direction>,
    pub kind: DataKind,
    /// Whether the element has a time (daily) or date (period) of occurrence
    pub has_occurrence: bool,
}

impl FieldSpec {
    /// Record tolerance for this element's data kind
    pub fn tolerance(&self, tolerances: &Tolerances) -> f64 {
        match self.kind {
            DataKind::Temperature => tolerances.temperature,
            DataKind::Precipitation => tolerances.precipitation,
            DataKind::Snow => tolerances.snow,
            DataKind::Count => 0.0,
        }
    }

    /// Cell token for one of this element's values
    ///
    /// Only temperatures show a trace as zero; every other kind keeps the
    /// trace token.
    pub fn format_value(&self, value: ObservationValue) -> DisplayToken {
        match self.kind {
            DataKind::Temperature => sentinel_codec::format_temperature(value, self.precision),
            DataKind::Precipitation | DataKind::Snow | DataKind::Count => {
                sentinel_codec::format(value, self.precision)
            }
        }
    }
}

const fn spec(
    element: Element,
    label: &'static str,
    section: Section,
    precision: Precision,
    direction: Option<Direction>,
    kind: DataKind,
    has_occurrence: bool,
) -> FieldSpec {
    FieldSpec {
        element,
        label,
        section,
        precision,
        direction,
        kind,
        has_occurrence,
    }
}

/// Look up the rendering rules for an element
#[rustfmt::skip]
pub fn field_spec(element: Element) -> FieldSpec {
    use DataKind as K;
    use Direction::{HigherIsRecord as Higher, LowerIsRecord as Lower};
    use Precision::{Integer, OneDecimal, TwoDecimal};
    use Section as S;

    match element {
        Element::MaximumTemperature => spec(element, "Maximum", S::Temperature, Integer, Some(Higher), K::Temperature, true),
        Element::MinimumTemperature => spec(element, "Minimum", S::Temperature, Integer, Some(Lower), K::Temperature, true),
        Element::AverageTemperature => spec(element, "Average", S::Temperature, Integer, None, K::Temperature, false),
        Element::MeanMaximumTemperature => spec(element, "Avg. Maximum", S::Temperature, OneDecimal, Some(Higher), K::Temperature, false),
        Element::MeanMinimumTemperature => spec(element, "Avg. Minimum", S::Temperature, OneDecimal, Some(Lower), K::Temperature, false),
        Element::MeanTemperature => spec(element, "Mean", S::Temperature, OneDecimal, None, K::Temperature, false),
        Element::DaysMaxAtOrAbove90 => spec(element, "Max >= 90", S::Temperature, Integer, None, K::Count, false),
        Element::DaysMaxAtOrBelow32 => spec(element, "Max <= 32", S::Temperature, Integer, None, K::Count, false),
        Element::DaysMinAtOrBelow32 => spec(element, "Min <= 32", S::Temperature, Integer, None, K::Count, false),
        Element::DaysMinAtOrBelow0 => spec(element, "Min <= 0", S::Temperature, Integer, None, K::Count, false),
        Element::Precipitation => spec(element, "Precipitation", S::Precipitation, TwoDecimal, Some(Higher), K::Precipitation, false),
        Element::DaysPrecipAtOrAbove01 => spec(element, "Days >= .01", S::Precipitation, Integer, None, K::Count, false),
        Element::DaysPrecipAtOrAbove10 => spec(element, "Days >= .10", S::Precipitation, Integer, None, K::Count, false),
        Element::DaysPrecipAtOrAbove50 => spec(element, "Days >= .50", S::Precipitation, Integer, None, K::Count, false),
        Element::DaysPrecipAtOrAbove100 => spec(element, "Days >= 1.00", S::Precipitation, Integer, None, K::Count, false),
        Element::Snowfall => spec(element, "Snowfall", S::Snowfall, OneDecimal, Some(Higher), K::Snow, false),
        Element::SnowDepth => spec(element, "Snow Depth", S::Snowfall, Integer, Some(Higher), K::Snow, true),
        Element::DaysSnowAtOrAbove1 => spec(element, "Days >= 1.0", S::Snowfall, Integer, None, K::Count, false),
        Element::HeatingDegreeDays => spec(element, "Heating", S::DegreeDays, Integer, None, K::Count, false),
        Element::CoolingDegreeDays => spec(element, "Cooling", S::DegreeDays, Integer, None, K::Count, false),
    }
}

/// Elements listed under a section, in product order
pub fn section_elements(section: Section) -> impl Iterator<Item = Element> {
    Element::ALL
        .into_iter()
        .filter(move |element| field_spec(*element).section == section)
}
