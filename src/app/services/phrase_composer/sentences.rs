//! Sentence composition for voice-script products

use super::grammar::{
    above_below, amount_inches, breaks_ties, celsius, count_days, day_days, degree_degrees,
    was_were, whole,
};
use crate::Result;
use crate::app::models::{
    Element, ElementRow, FieldDescriptor, ObservationValue, RecordOutcome, ThresholdCount,
};
use crate::app::services::date_sentence::render_single;
use crate::app::services::row_builder::{DataKind, FieldSpec};
use crate::app::services::sentinel_codec::{Precision, format_number, round_to};
use crate::constants::{SENTENCE_END, TRACE_PHRASE};
use tracing::debug;

/// How a quantity is spoken in comparison clauses
#[derive(Debug, Clone, Copy, PartialEq)]
enum Units {
    Degrees(Precision),
    Inches(Precision),
    /// Bare number for the difference, days for the normal
    DegreeDays,
    Days,
}

impl Units {
    fn precision(self) -> Precision {
        match self {
            Units::Degrees(precision) | Units::Inches(precision) => precision,
            Units::DegreeDays | Units::Days => Precision::Integer,
        }
    }
}

/// Nouns used by the departure and normal clauses
struct Comparison<'a> {
    units: Units,
    /// Follows "above/below the", e.g. `normal maximum`
    noun: &'a str,
    /// Subject of the stand-alone normal sentence, e.g. `normal maximum`
    standalone: &'a str,
}

/// Subject noun phrase for an element, without the article
fn subject(element: Element) -> &'static str {
    match element {
        Element::MaximumTemperature => "maximum temperature",
        Element::MinimumTemperature => "minimum temperature",
        Element::AverageTemperature => "average temperature",
        Element::MeanMaximumTemperature => "average maximum temperature",
        Element::MeanMinimumTemperature => "average minimum temperature",
        Element::MeanTemperature => "mean temperature",
        Element::Precipitation => "precipitation total",
        Element::Snowfall => "snowfall total",
        Element::SnowDepth => "snow depth",
        Element::HeatingDegreeDays => "heating degree day total",
        Element::CoolingDegreeDays => "cooling degree day total",
        _ => "number of days",
    }
}

/// Noun used for the normal of a temperature element
fn normal_noun(element: Element) -> &'static str {
    match element {
        Element::MaximumTemperature => "normal maximum",
        Element::MinimumTemperature => "normal minimum",
        Element::AverageTemperature => "normal average",
        Element::MeanMaximumTemperature => "normal average maximum",
        Element::MeanMinimumTemperature => "normal average minimum",
        _ => "normal mean",
    }
}

/// Zero and non-zero openings for threshold day counts
#[rustfmt::skip]
fn threshold_phrases(element: Element) -> Option<(&'static str, &'static str)> {
    let phrases = match element {
        Element::DaysMaxAtOrAbove90 => ("The maximum temperature did not exceed 90 degrees", "The maximum temperature exceeded 90 degrees on"),
        Element::DaysMaxAtOrBelow32 => ("The maximum temperature did not fall below 32 degrees", "The maximum temperature was at or below 32 degrees on"),
        Element::DaysMinAtOrBelow32 => ("The minimum temperature did not fall below 32 degrees", "The minimum temperature dropped below 32 degrees on"),
        Element::DaysMinAtOrBelow0 => ("The minimum temperature did not fall below 0 degrees", "The minimum temperature was at or below 0 degrees on"),
        Element::DaysPrecipAtOrAbove01 => ("Precipitation did not reach .01 inches", "Precipitation of .01 inches or more fell on"),
        Element::DaysPrecipAtOrAbove10 => ("Precipitation did not reach .10 inches", "Precipitation of .10 inches or more fell on"),
        Element::DaysPrecipAtOrAbove50 => ("Precipitation did not reach .50 inches", "Precipitation of .50 inches or more fell on"),
        Element::DaysPrecipAtOrAbove100 => ("Precipitation did not reach 1.00 inch", "Precipitation of 1.00 inch or more fell on"),
        Element::DaysSnowAtOrAbove1 => ("Snowfall did not reach 1.0 inch", "Snowfall of 1.0 inch or more fell on"),
        _ => return None,
    };
    Some(phrases)
}

/// Append the time span to a sentence opening when there is one
fn spanned(text: String, span: &str) -> String {
    if span.is_empty() {
        text
    } else {
        format!("{} {}", text, span)
    }
}

/// Composes English sentences for one station's statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseComposer {
    do_celsius: bool,
    ordinal_dates: bool,
}

impl PhraseComposer {
    /// # Arguments
    ///
    /// * `do_celsius` - Follow every temperature with its Celsius equivalent
    /// * `ordinal_dates` - Speak dates after the first as "the 15th"
    pub fn new(do_celsius: bool, ordinal_dates: bool) -> Self {
        Self {
            do_celsius,
            ordinal_dates,
        }
    }

    /// All sentences for one element row
    ///
    /// Returns an empty string when the element is not measured or the row
    /// has no applicable value. The record sentence is added when the
    /// element keeps records and the record sub-field is enabled.
    ///
    /// # Arguments
    ///
    /// * `spec` - Rendering rules for the row's element
    /// * `descriptor` - Enabled sub-fields for the element
    /// * `row` - The statistics to speak
    /// * `span` - Time span phrase such as `yesterday` or `this month`
    /// * `outcome` - Record classification from the evaluator
    pub fn element_sentences(
        &self,
        spec: &FieldSpec,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
        span: &str,
        outcome: RecordOutcome,
    ) -> Result<String> {
        if !descriptor.measured || row.actual.is_not_applicable() {
            return Ok(String::new());
        }

        let mut text = match spec.kind {
            DataKind::Temperature => self.temperature_sentence(spec, descriptor, row, span)?,
            DataKind::Precipitation | DataKind::Snow => {
                self.amount_sentence(spec, descriptor, row, span)?
            }
            DataKind::Count => match spec.element {
                Element::HeatingDegreeDays | Element::CoolingDegreeDays => {
                    self.degree_day_sentence(spec.element, descriptor, row, span)
                }
                _ => self.threshold_sentence(spec.element, descriptor, row, span),
            },
        };

        if descriptor.record && spec.direction.is_some() && !row.actual.is_missing() {
            text.push_str(&self.record_sentence(spec, row, outcome));
        }

        debug!("Composed sentences for {}", spec.element.key());
        Ok(text)
    }

    /// "The maximum temperature yesterday was 78 at 3:52 PM which is 26
    /// degrees above the normal maximum of 52.  "
    pub fn temperature_sentence(
        &self,
        spec: &FieldSpec,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
        span: &str,
    ) -> Result<String> {
        let opening = spanned(format!("The {}", subject(spec.element)), span);
        if row.actual.is_missing() {
            return Ok(format!("{} was missing{}", opening, SENTENCE_END));
        }

        let mut text = format!(
            "{} was {}",
            opening,
            self.temperature(row.actual, spec.precision)
        );
        text.push_str(&self.occurrence_clause(spec, descriptor, row)?);

        let noun = normal_noun(spec.element);
        text.push_str(&self.comparison(
            &Comparison {
                units: Units::Degrees(spec.precision),
                noun,
                standalone: noun,
            },
            descriptor,
            row,
        ));
        text.push_str(SENTENCE_END);
        Ok(text)
    }

    /// "The precipitation total yesterday was 1.25 inches which is 1.10
    /// inches above the normal amount of 0.15 inches.  "
    pub fn amount_sentence(
        &self,
        spec: &FieldSpec,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
        span: &str,
    ) -> Result<String> {
        let opening = spanned(format!("The {}", subject(spec.element)), span);
        if row.actual.is_missing() {
            return Ok(format!("{} was missing{}", opening, SENTENCE_END));
        }

        let mut text = format!("{} was {}", opening, self.amount(row.actual, spec.precision));
        text.push_str(&self.occurrence_clause(spec, descriptor, row)?);

        let noun = if spec.element == Element::SnowDepth {
            "normal depth"
        } else {
            "normal amount"
        };
        text.push_str(&self.comparison(
            &Comparison {
                units: Units::Inches(spec.precision),
                noun,
                standalone: noun,
            },
            descriptor,
            row,
        ));
        text.push_str(SENTENCE_END);
        Ok(text)
    }

    /// "There were 12 heating degree days this month which is 5 below the
    /// normal amount of 17 days.  "
    pub fn degree_day_sentence(
        &self,
        element: Element,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
        span: &str,
    ) -> String {
        let kind = if element == Element::HeatingDegreeDays {
            "heating"
        } else {
            "cooling"
        };
        let Some(amount) = row.actual.amount() else {
            return format!(
                "{} was missing{}",
                spanned(format!("The {}", subject(element)), span),
                SENTENCE_END
            );
        };

        let count = whole(amount);
        let opening = if count == 0 {
            format!("There were no {} degree days", kind)
        } else {
            format!(
                "There {} {} {} degree {}",
                was_were(count),
                count,
                kind,
                day_days(count)
            )
        };

        let standalone = format!("normal number of {} degree days", kind);
        let mut text = spanned(opening, span);
        text.push_str(&self.comparison(
            &Comparison {
                units: Units::DegreeDays,
                noun: "normal amount",
                standalone: &standalone,
            },
            descriptor,
            row,
        ));
        text.push_str(SENTENCE_END);
        text
    }

    /// "The maximum temperature exceeded 90 degrees on 3 days this month
    /// which is 2 days above the normal of 1 day.  "
    pub fn threshold_sentence(
        &self,
        element: Element,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
        span: &str,
    ) -> String {
        let Some((zero, some)) = threshold_phrases(element) else {
            debug!("No threshold wording for {}", element.key());
            return String::new();
        };
        let Some(amount) = row.actual.amount() else {
            return String::new();
        };

        let count = whole(amount);
        let opening = if count == 0 {
            zero.to_string()
        } else {
            format!("{} {}", some, count_days(count))
        };

        let mut text = spanned(opening, span);
        text.push_str(&self.comparison(
            &Comparison {
                units: Units::Days,
                noun: "normal",
                standalone: "normal",
            },
            descriptor,
            row,
        ));
        text.push_str(SENTENCE_END);
        text
    }

    /// Record sentence for an element that keeps records
    ///
    /// When the observation set or tied the record: "This breaks the
    /// previous record of 76 which was set in 1998.  ". Otherwise, if a
    /// record is on file: "The record maximum temperature is 80 which was
    /// set in 1945.  ".
    pub fn record_sentence(&self, spec: &FieldSpec, row: &ElementRow, outcome: RecordOutcome) -> String {
        if !row.record.is_comparable() {
            return String::new();
        }

        let record = self.value_phrase(spec, row.record);
        let years: Vec<i32> = row.valid_record_years().collect();
        let set_in = match years.as_slice() {
            [] => String::new(),
            [year] => format!(" which was set in {}", year),
            [year, ..] => format!(" which was last set in {}", year),
        };

        if outcome.is_record() {
            format!(
                "This {} the previous record of {}{}{}",
                breaks_ties(outcome == RecordOutcome::Broken),
                record,
                set_in,
                SENTENCE_END
            )
        } else {
            format!(
                "The record {} is {}{}{}",
                subject(spec.element),
                record,
                set_in,
                SENTENCE_END
            )
        }
    }

    /// Sentence for a configured temperature threshold
    ///
    /// "The maximum temperature was at or above 100 degrees on 2 days this
    /// year.  " or "The maximum temperature did not exceed 100 degrees this
    /// year.  ". Returns an empty string when the count is not known.
    pub fn user_threshold_sentence(&self, count: &ThresholdCount, span: &str) -> String {
        let Some(days) = count.days.amount().map(whole) else {
            return String::new();
        };

        let which = if count.kind.is_maximum() {
            "maximum"
        } else {
            "minimum"
        };
        let degrees = degree_degrees(i64::from(count.degrees));

        let opening = if days == 0 {
            let verb = if count.kind.is_above() {
                "did not exceed"
            } else {
                "did not fall below"
            };
            format!("The {} temperature {} {}", which, verb, degrees)
        } else {
            format!(
                "The {} temperature was at or {} {} on {}",
                which,
                above_below(count.kind.is_above()),
                degrees,
                count_days(days)
            )
        };

        format!("{}{}", spanned(opening, span), SENTENCE_END)
    }

    // =========================================================================
    // Clause Helpers
    // =========================================================================

    /// " at 3:52 PM" on daily rows, " on March 5, 19 and 28" on period rows
    fn occurrence_clause(
        &self,
        spec: &FieldSpec,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
    ) -> Result<String> {
        if !spec.has_occurrence || !descriptor.time_of_measured {
            return Ok(String::new());
        }

        if let Some(time) = row.time {
            return Ok(format!(" at {}", time.to_meridiem_string().trim_start()));
        }

        let dates = render_single(&row.dates, self.ordinal_dates)?;
        if dates.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!(" on {}", dates))
        }
    }

    /// Departure clause, or a stand-alone normal sentence when the departure
    /// is disabled but the normal is enabled
    fn comparison(
        &self,
        comparison: &Comparison<'_>,
        descriptor: &FieldDescriptor,
        row: &ElementRow,
    ) -> String {
        let precision = comparison.units.precision();

        match (row.actual.amount(), row.normal.amount()) {
            (Some(actual), Some(normal)) if descriptor.departure => {
                let departure = round_to(
                    round_to(actual, precision) - round_to(normal, precision),
                    precision,
                );
                if departure == 0.0 {
                    return " which is normal".to_string();
                }

                let mut clause = format!(
                    " which is {} {} the {}",
                    self.difference(comparison.units, departure.abs()),
                    above_below(departure > 0.0),
                    comparison.noun
                );
                if descriptor.norm {
                    clause.push_str(&format!(
                        " of {}",
                        self.normal_value(comparison.units, row.normal)
                    ));
                }
                clause
            }
            (_, Some(normal)) if descriptor.norm => {
                let value = match comparison.units {
                    Units::DegreeDays => whole(normal).to_string(),
                    units => self.normal_value(units, row.normal),
                };
                format!("{}The {} is {}", SENTENCE_END, comparison.standalone, value)
            }
            _ => String::new(),
        }
    }

    fn difference(&self, units: Units, value: f64) -> String {
        match units {
            Units::Degrees(Precision::Integer) => degree_degrees(whole(value)),
            Units::Degrees(precision) => format!("{} degrees", format_number(value, precision)),
            Units::Inches(precision) => amount_inches(value, precision),
            Units::DegreeDays => whole(value).to_string(),
            Units::Days => count_days(whole(value)),
        }
    }

    fn normal_value(&self, units: Units, normal: ObservationValue) -> String {
        match units {
            Units::Degrees(precision) => self.temperature(normal, precision),
            Units::Inches(precision) => self.amount(normal, precision),
            Units::DegreeDays | Units::Days => {
                normal.amount().map(whole).map(count_days).unwrap_or_default()
            }
        }
    }

    /// Record value spoken in the element's own units
    fn value_phrase(&self, spec: &FieldSpec, value: ObservationValue) -> String {
        match spec.kind {
            DataKind::Temperature => self.temperature(value, spec.precision),
            DataKind::Precipitation | DataKind::Snow => self.amount(value, spec.precision),
            DataKind::Count => value
                .amount()
                .map(|amount| format_number(amount, spec.precision))
                .unwrap_or_default(),
        }
    }

    fn temperature(&self, value: ObservationValue, precision: Precision) -> String {
        let Some(degrees) = value.amount() else {
            return "missing".to_string();
        };
        let number = format_number(degrees, precision);
        if self.do_celsius {
            format!("{} fahrenheit, or {} celsius", number, celsius(degrees))
        } else {
            number
        }
    }

    fn amount(&self, value: ObservationValue, precision: Precision) -> String {
        match value {
            ObservationValue::Trace => TRACE_PHRASE.to_string(),
            ObservationValue::Present(amount) => amount_inches(amount, precision),
            ObservationValue::Missing | ObservationValue::NotApplicable => "missing".to_string(),
        }
    }
}
