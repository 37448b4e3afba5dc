//! Multi-station product assembly

use super::nwr;
use super::nwws;
use super::post_process::post_process;
use crate::app::models::{
    Element, ElementRow, FieldDescriptor, ObservationValue, ProductBundle, RecordEvent,
    StationBundle,
};
use crate::app::services::column_layout::{self, ColumnSet, union_capabilities};
use crate::app::services::sentinel_codec::{Precision, round_to};
use crate::config::{FormatterConfig, ProductKind};
use crate::constants::FOOTNOTE_LINES;
use crate::{Error, Result};
use tracing::{debug, info, warn};

/// Result of one product run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Final product text after the presentation pass
    pub text: String,
    /// Record events in the order they were found
    pub events: Vec<RecordEvent>,
    pub stations_rendered: usize,
    /// Configured stations absent from the bundle
    pub stations_skipped: Vec<String>,
}

/// One station's share of the product, before the presentation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSegment {
    pub lines: Vec<String>,
    pub events: Vec<RecordEvent>,
}

/// Assembles bulletins for every configured station
///
/// The column set is computed once at construction from the union of the
/// enabled sub-fields of every element, and reused for every station.
#[derive(Debug, Clone)]
pub struct ProductAssembler {
    config: FormatterConfig,
    columns: ColumnSet,
}

impl ProductAssembler {
    /// Create an assembler for a validated configuration
    pub fn new(config: FormatterConfig) -> Result<Self> {
        let family = config.product.report.family();
        let descriptors: Vec<FieldDescriptor> = Element::ALL
            .into_iter()
            .map(|element| config.product.descriptor(element))
            .collect();
        let enabled = union_capabilities(descriptors.iter());
        let columns = column_layout::compute(&enabled, family)?;

        debug!(
            "Computed {:?} column set with {} columns",
            family,
            columns.columns().len()
        );

        Ok(Self { config, columns })
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Render the product for a statistics bundle
    ///
    /// Configured stations are rendered in configuration order; with no
    /// stations configured every bundle station is rendered in bundle order.
    /// A configured station the bundle lacks is skipped with a warning. An
    /// invalid date fails the whole run.
    ///
    /// # Arguments
    ///
    /// * `bundle` - Pre-computed statistics for the report date
    ///
    /// # Returns
    ///
    /// The finished text, the record events and the station counts
    pub fn render(&self, bundle: &ProductBundle) -> Result<RenderOutput> {
        bundle.validate()?;
        let product = &self.config.product;

        info!(
            "Rendering {:?} {:?} product for {}-{:02}-{:02}",
            product.product,
            product.report,
            bundle.report_date.year,
            bundle.report_date.month,
            bundle.report_date.day
        );

        let (stations, stations_skipped) = self.select_stations(bundle);

        let mut blocks = Vec::with_capacity(stations.len());
        let mut events = Vec::new();

        for station in &stations {
            let segment = match product.product {
                ProductKind::Nwws => nwws::render_station(self, bundle, station)?,
                ProductKind::Nwr => nwr::render_station(self, bundle, station)?,
            };

            info!(
                "Rendered station {} ({} lines, {} record events)",
                station.station_id,
                segment.lines.len(),
                segment.events.len()
            );
            events.extend(segment.events);
            blocks.push(segment.lines.join("\n"));
        }

        let mut text = blocks.join("\n\n");
        if product.product == ProductKind::Nwws && product.include_footnote && !blocks.is_empty() {
            text.push_str("\n\n");
            text.push_str(&FOOTNOTE_LINES.join("\n"));
        }
        if !text.is_empty() {
            text.push('\n');
        }

        // Voice scripts are read aloud and keep their punctuation and case
        if product.product == ProductKind::Nwws {
            text = post_process(&text, &self.config.global);
        }

        Ok(RenderOutput {
            text,
            events,
            stations_rendered: stations.len(),
            stations_skipped,
        })
    }

    fn select_stations<'b>(
        &self,
        bundle: &'b ProductBundle,
    ) -> (Vec<&'b StationBundle>, Vec<String>) {
        let configured = &self.config.product.stations;
        if configured.is_empty() {
            return (bundle.stations.iter().collect(), Vec::new());
        }

        let mut found = Vec::with_capacity(configured.len());
        let mut skipped = Vec::new();
        for station_id in configured {
            match bundle.station(station_id) {
                Some(station) => found.push(station),
                None => {
                    warn!("{}; skipping its segment", Error::station_not_found(station_id));
                    skipped.push(station_id.clone());
                }
            }
        }
        (found, skipped)
    }

    /// The rows to report for a station, including derived rows
    pub fn station_rows(&self, station: &StationBundle) -> Vec<ElementRow> {
        let mut rows = station.rows.clone();

        let has_average = station.rows_for(Element::AverageTemperature).next().is_some();
        if self.config.product.derive_average_temperature && !has_average {
            rows.extend(derived_average_rows(station));
        }
        rows
    }
}

/// Average temperature rows derived from the maximum and minimum rows
///
/// The actual is the rounded mean of maximum and minimum. The normal is the
/// mean of the two normals when both are known.
pub fn derived_average_rows(station: &StationBundle) -> Vec<ElementRow> {
    station
        .rows_for(Element::MaximumTemperature)
        .filter_map(|max| {
            let min = station.row(Element::MinimumTemperature, max.span)?;

            let actual = match (max.actual, min.actual) {
                (ObservationValue::Present(high), ObservationValue::Present(low)) => {
                    ObservationValue::Present(round_to((high + low) / 2.0, Precision::Integer))
                }
                (ObservationValue::NotApplicable, _) | (_, ObservationValue::NotApplicable) => {
                    ObservationValue::NotApplicable
                }
                _ => ObservationValue::Missing,
            };
            let normal = match (max.normal.amount(), min.normal.amount()) {
                (Some(high), Some(low)) => ObservationValue::Present((high + low) / 2.0),
                _ => ObservationValue::NotApplicable,
            };

            debug!(
                "Derived average temperature for {} ({:?})",
                station.station_id, max.span
            );
            Some(
                ElementRow::new(Element::AverageTemperature, max.span)
                    .with_actual(actual)
                    .with_normal(normal),
            )
        })
        .collect()
}
