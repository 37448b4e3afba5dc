//! Narrative voice-script bulletin for one station

use super::assembler::{ProductAssembler, StationSegment};
use super::labels::{in_season, report_phrase, span_phrase, valid_clock};
use crate::Result;
use crate::app::models::{ProductBundle, RecordOutcome, StationBundle};
use crate::app::services::date_sentence::{long_date, month_year};
use crate::app::services::phrase_composer::{PhraseComposer, insert_new_lines};
use crate::app::services::record_evaluator::RecordEvaluator;
use crate::app::services::row_builder::{Section, evaluate_row, field_spec, section_elements};
use crate::config::{ReportKind, ReportTimeZone};
use crate::constants::SENTENCE_END;
use tracing::debug;

/// Opening sentence naming the station and the time covered
///
/// For example "The Boston climate summary for yesterday, March 19 2024.  "
/// or "The Boston climate summary for the season, from March to May 2024.  ".
pub fn intro_sentence(
    name: &str,
    report: ReportKind,
    bundle: &ProductBundle,
    zone: &ReportTimeZone,
) -> Result<String> {
    let date = &bundle.report_date;
    let as_of = valid_clock(bundle, zone)?.map(|time| time.to_meridiem_string().trim_start().to_string());

    let covered = match report {
        ReportKind::Morning => format!("for yesterday, {}", long_date(date)?),
        ReportKind::Evening => match &as_of {
            Some(time) => format!("for this evening, as of {}, {}", time, long_date(date)?),
            None => format!("for this evening, {}", long_date(date)?),
        },
        ReportKind::Intermediate => match &as_of {
            Some(time) => format!("as of {}, {}", time, long_date(date)?),
            None => format!("for today, {}", long_date(date)?),
        },
        ReportKind::Monthly => format!("for the month of {}", month_year(date)?),
        ReportKind::Seasonal => {
            let start = bundle
                .period
                .and_then(|range| range.start.known())
                .unwrap_or(*date);
            let end = bundle
                .period
                .and_then(|range| range.end.known())
                .unwrap_or(*date);
            let start_month = chrono::Month::try_from(start.month as u8)
                .map(|month| month.name())
                .unwrap_or_default();
            if start.year == end.year {
                format!("for the season, from {} to {}", start_month, month_year(&end)?)
            } else {
                format!(
                    "for the season, from {} {} to {}",
                    start_month,
                    start.year,
                    month_year(&end)?
                )
            }
        }
        ReportKind::Annual => format!("for the year of {}", date.year),
    };

    Ok(format!("The {} climate summary {}{}", name, covered, SENTENCE_END))
}

/// Render one station's narrative
///
/// The sentences follow section order, then any configured user
/// thresholds, and the result is wrapped to the configured width.
pub fn render_station(
    assembler: &ProductAssembler,
    bundle: &ProductBundle,
    station: &StationBundle,
) -> Result<StationSegment> {
    let config = assembler.config();
    let product = &config.product;
    let global = &config.global;
    let evaluator = RecordEvaluator::new(&station.station_id, bundle.report_date);
    let composer = PhraseComposer::new(global.do_celsius, product.report == ReportKind::Monthly);

    let mut segment = StationSegment::default();
    let mut text = intro_sentence(&station.name, product.report, bundle, &global.time_zone())?;

    let rows = assembler.station_rows(station);

    for section in Section::ALL {
        for element in section_elements(section) {
            let spec = field_spec(element);
            let descriptor = product.descriptor(element);

            let element_rows = rows
                .iter()
                .filter(|row| row.element == element)
                .filter(|row| in_season(row, &spec, &product.seasons, &bundle.report_date));

            for row in element_rows {
                let outcome = if descriptor.record {
                    let evaluation = evaluate_row(&evaluator, &spec, row, &global.tolerances);
                    segment.events.extend(evaluation.event);
                    evaluation.outcome
                } else {
                    RecordOutcome::NoRecord
                };

                let span = span_phrase(row, product.report, &product.seasons);
                text.push_str(&composer.element_sentences(&spec, &descriptor, row, &span, outcome)?);
            }
        }
    }

    for threshold in &product.user_thresholds {
        if let Some(count) = station.threshold_count(threshold.kind, threshold.degrees) {
            text.push_str(&composer.user_threshold_sentence(count, report_phrase(product.report)));
        }
    }

    let wrapped = insert_new_lines(text.trim_end(), product.wrap_width);
    segment.lines = wrapped.lines().map(str::to_string).collect();

    debug!(
        "Narrative for {}: {} lines",
        station.station_id,
        segment.lines.len()
    );
    Ok(segment)
}
