//! Record tie/break evaluation
//!
//! Compares an observation with its historical record and decides whether
//! the record was broken, tied, or not reached. Values within a data-kind
//! specific tolerance count as ties so that floating-point noise in small
//! precipitation and snow amounts never produces a false break.
//!
//! A trace sorts strictly between zero and any measurable amount: a trace
//! against a record of zero is a new record, and any measurable amount beats
//! a trace record.

use crate::app::models::{ClimateDate, Element, ObservationValue, RecordEvent, RecordOutcome};
use crate::constants::RECORD_COMPARISON_EPSILON;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Which extreme counts as a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Maximum temperatures, precipitation, snowfall
    HigherIsRecord,
    /// Minimum temperatures
    LowerIsRecord,
}

/// Classify an observation against a record value
///
/// Observations or records that are missing or not applicable never make a
/// record.
pub fn classify(
    observed: ObservationValue,
    record: ObservationValue,
    direction: Direction,
    tolerance: f64,
) -> RecordOutcome {
    match (observed, record) {
        (ObservationValue::Present(observed), ObservationValue::Present(record)) => {
            let delta = match direction {
                Direction::HigherIsRecord => observed - record,
                Direction::LowerIsRecord => record - observed,
            };
            let limit = tolerance.abs() + RECORD_COMPARISON_EPSILON;

            if delta > limit {
                RecordOutcome::Broken
            } else if delta.abs() <= limit {
                RecordOutcome::Tied
            } else {
                RecordOutcome::NoRecord
            }
        }
        _ => match trace_ordering(observed, record) {
            Some(ordering) => {
                let ordering = match direction {
                    Direction::HigherIsRecord => ordering,
                    Direction::LowerIsRecord => ordering.reverse(),
                };
                match ordering {
                    Ordering::Greater => RecordOutcome::Broken,
                    Ordering::Equal => RecordOutcome::Tied,
                    Ordering::Less => RecordOutcome::NoRecord,
                }
            }
            None => RecordOutcome::NoRecord,
        },
    }
}

/// Ordering of observed against record when at least one side is a trace
fn trace_ordering(observed: ObservationValue, record: ObservationValue) -> Option<Ordering> {
    match (observed, record) {
        (ObservationValue::Trace, ObservationValue::Trace) => Some(Ordering::Equal),
        (ObservationValue::Trace, ObservationValue::Present(record)) => Some(if record <= 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }),
        (ObservationValue::Present(observed), ObservationValue::Trace) => {
            Some(if observed <= 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            })
        }
        _ => None,
    }
}

/// Inputs for one record comparison
#[derive(Debug, Clone, Copy)]
pub struct RecordQuery<'a> {
    pub element: Element,
    pub observed: ObservationValue,
    pub record: ObservationValue,
    /// Years the record was set, most recent first; zeros are ignored
    pub record_years: &'a [i32],
    pub current_year: i32,
    pub direction: Direction,
    pub tolerance: f64,
}

/// Outcome of a comparison plus the event to report, if any
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEvaluation {
    pub outcome: RecordOutcome,
    pub event: Option<RecordEvent>,
}

/// Evaluates records for one station and report date
#[derive(Debug, Clone)]
pub struct RecordEvaluator {
    station_id: String,
    date: ClimateDate,
}

impl RecordEvaluator {
    pub fn new(station_id: impl Into<String>, date: ClimateDate) -> Self {
        Self {
            station_id: station_id.into(),
            date,
        }
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn date(&self) -> ClimateDate {
        self.date
    }

    /// Classify an observation and build the record event
    ///
    /// A tie whose only record year is the current year is not reported,
    /// since it would re-announce this year's own value; it is still
    /// returned as `Tied` so the table shows it. When earlier years exist
    /// the event names the most recent earlier year.
    pub fn evaluate(&self, query: &RecordQuery<'_>) -> RecordEvaluation {
        let outcome = classify(query.observed, query.record, query.direction, query.tolerance);

        let years: Vec<i32> = query
            .record_years
            .iter()
            .copied()
            .filter(|year| *year != 0)
            .collect();
        let earlier_year = years
            .iter()
            .copied()
            .find(|year| *year != query.current_year);

        let event = match outcome {
            RecordOutcome::NoRecord => None,
            RecordOutcome::Tied
                if years.first() == Some(&query.current_year) && earlier_year.is_none() =>
            {
                debug!(
                    "Suppressing tie for {} at {}: record already belongs to {}",
                    query.element, self.station_id, query.current_year
                );
                None
            }
            RecordOutcome::Tied | RecordOutcome::Broken => Some(RecordEvent {
                station_id: self.station_id.clone(),
                element: query.element,
                date: self.date,
                observed: query.observed,
                record: query.record,
                year_of_record: earlier_year.or_else(|| years.first().copied()),
                outcome,
            }),
        };

        RecordEvaluation { outcome, event }
    }
}
