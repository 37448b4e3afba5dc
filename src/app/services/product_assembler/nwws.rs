//! Tabular wire bulletin for one station

use super::assembler::{ProductAssembler, StationSegment};
use super::labels::{in_season, row_label, valid_clock};
use crate::Result;
use crate::app::models::{ProductBundle, StationBundle};
use crate::app::services::column_layout::{ColumnSet, header_lines, separator_line};
use crate::app::services::date_sentence::{long_date, month_year};
use crate::app::services::line_buffer::Span;
use crate::app::services::record_evaluator::RecordEvaluator;
use crate::app::services::row_builder::{RowBuilder, Section, field_spec, section_elements};
use crate::config::{ReportKind, ReportTimeZone};
use crate::constants::{ROW_LABEL_INDENT, SUBHEADING_INDENT};
use tracing::debug;

/// Title line naming the station and the period covered
pub fn title_line(name: &str, report: ReportKind, bundle: &ProductBundle) -> Result<String> {
    let date = &bundle.report_date;
    let period = match report {
        ReportKind::Morning | ReportKind::Evening | ReportKind::Intermediate => {
            long_date(date)?
        }
        ReportKind::Monthly => format!("the month of {}", month_year(date)?),
        ReportKind::Seasonal => {
            let (start, end) = match &bundle.period {
                Some(range) => (
                    range.start.known().unwrap_or(*date),
                    range.end.known().unwrap_or(*date),
                ),
                None => (*date, *date),
            };
            format!("the period {} to {}", long_date(&start)?, long_date(&end)?)
        }
        ReportKind::Annual => format!("the year {}", date.year),
    };

    Ok(format!("...The {} climate summary for {}...", name, period))
}

/// "Valid today as of 3:00 PM EST." for intermediate reports
///
/// Returns `None` when the bundle carries no valid time.
pub fn valid_time_line(bundle: &ProductBundle, zone: &ReportTimeZone) -> Result<Option<String>> {
    Ok(valid_clock(bundle, zone)?.map(|time| {
        format!(
            "Valid today as of {} {}.",
            time.to_meridiem_string().trim_start(),
            zone.label
        )
    }))
}

/// A full-width line holding a heading at an indent
fn heading_line(columns: &ColumnSet, indent: usize, text: &str) -> Result<String> {
    let mut line = columns.new_line();
    line.paint(Span::new(indent, columns.line_width()), text)?;
    Ok(line.into_string())
}

/// Render one station's table
///
/// The segment holds the title, the optional valid-time line, the header,
/// then each section that has at least one reported row.
pub fn render_station(
    assembler: &ProductAssembler,
    bundle: &ProductBundle,
    station: &StationBundle,
) -> Result<StationSegment> {
    let config = assembler.config();
    let product = &config.product;
    let columns = assembler.columns();
    let evaluator = RecordEvaluator::new(&station.station_id, bundle.report_date);
    let builder = RowBuilder::new(columns, &evaluator, config.global.tolerances);

    let mut segment = StationSegment::default();
    segment
        .lines
        .push(title_line(&station.name, product.report, bundle)?);
    if product.report == ReportKind::Intermediate {
        let zone = config.global.time_zone();
        segment.lines.extend(valid_time_line(bundle, &zone)?);
    }
    segment.lines.push(String::new());
    segment.lines.extend(header_lines(columns)?);
    segment.lines.push(separator_line(columns)?);

    let rows = assembler.station_rows(station);

    for section in Section::ALL {
        let mut body = Vec::new();

        for element in section_elements(section) {
            let spec = field_spec(element);
            let descriptor = product.descriptor(element);
            if descriptor.is_silent() {
                continue;
            }

            let element_rows: Vec<_> = rows
                .iter()
                .filter(|row| row.element == element)
                .filter(|row| in_season(row, &spec, &product.seasons, &bundle.report_date))
                .collect();
            if element_rows.is_empty() {
                continue;
            }

            if section == Section::DegreeDays {
                body.push(heading_line(columns, SUBHEADING_INDENT, spec.label)?);
            }

            for row in element_rows {
                let label = format!(
                    "{:indent$}{}",
                    "",
                    row_label(row, &spec, product.report, &product.seasons),
                    indent = ROW_LABEL_INDENT
                );
                let rendered = builder.render(&label, &descriptor, &spec, row)?;
                segment.events.extend(rendered.event);
                body.extend(rendered.lines);
            }
        }

        if body.is_empty() {
            continue;
        }
        debug!(
            "Section '{}' for {}: {} lines",
            section.heading(),
            station.station_id,
            body.len()
        );
        segment.lines.push(heading_line(columns, 0, section.heading())?);
        segment.lines.extend(body);
    }

    Ok(segment)
}
