//! Data models for record notifications
//!
//! Record events are produced while rendering and handed to the separate
//! record-announcement process once a render pass completes.

use super::{ClimateDate, Element, ObservationValue};
use serde::{Deserialize, Serialize};

/// Result of comparing an observation with its historical record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// The observation falls short of the record
    NoRecord,
    /// The observation equals the record within tolerance
    Tied,
    /// The observation is more extreme than the record
    Broken,
}

impl RecordOutcome {
    /// True for ties and breaks
    pub fn is_record(self) -> bool {
        !matches!(self, RecordOutcome::NoRecord)
    }
}

/// Notification that a record was set or tied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEvent {
    /// Station the record belongs to
    pub station_id: String,

    /// Element whose record was set or tied
    pub element: Element,

    /// Date of the observation
    pub date: ClimateDate,

    /// Observed value that set or tied the record
    pub observed: ObservationValue,

    /// Previous record value
    pub record: ObservationValue,

    /// Year the previous record was set, when known
    pub year_of_record: Option<i32>,

    /// Whether the record was tied or broken
    pub outcome: RecordOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_record() {
        assert!(RecordOutcome::Broken.is_record());
        assert!(RecordOutcome::Tied.is_record());
        assert!(!RecordOutcome::NoRecord.is_record());
    }

    #[test]
    fn test_record_event_json_shape() {
        let event = RecordEvent {
            station_id: "KBOS".to_string(),
            element: Element::Precipitation,
            date: ClimateDate {
                year: 2024,
                month: 3,
                day: 20,
            },
            observed: ObservationValue::Trace,
            record: ObservationValue::Present(0.0),
            year_of_record: Some(1998),
            outcome: RecordOutcome::Broken,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["element"], "precipitation");
        assert_eq!(json["observed"], "T");
        assert_eq!(json["outcome"], "broken");
        assert_eq!(json["year_of_record"], 1998);
    }
}
