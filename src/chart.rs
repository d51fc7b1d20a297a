//! Bar-chart rendering for benchmark records, built on `plotters`.
//!
//! This module turns a [`BenchRecord`](crate::model::BenchRecord) into a
//! [`ChartSpec`] describing the two-bar comparison chart, and draws that spec
//! to a PNG file through the bitmap backend. Label formatting lives here as
//! well so the title and annotation text can be unit tested without touching
//! a drawing surface.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::model::BenchRecord;

/// Category labels for the two measured swap methods, in bar order.
pub const METHOD_LABELS: [&str; 2] = ["Temp-var", "XOR"];

/// Y-axis description shown next to the duration scale.
pub const Y_AXIS_LABEL: &str = "Time [seconds]";

/// Default pixel dimensions of the rendered chart.
pub const DEFAULT_DIMENSIONS: (u32, u32) = (640, 480);

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 28;
const AXIS_FONT_SIZE: u32 = 16;
const ANNOTATION_FONT_SIZE: u32 = 20;
const CHART_MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 36;
const Y_LABEL_AREA: u32 = 60;
const BAR_GAP: u32 = 40;
const BAR_OPACITY: f64 = 0.85;

// Matches the original layout: annotation sits at 90% of the taller bar and
// the axis leaves a little headroom above it.
const ANNOTATION_HEIGHT_FRACTION: f64 = 0.9;
const Y_AXIS_HEADROOM: f64 = 1.12;

/// Formats an integer with `,` thousands separators, e.g. `1234567` as
/// `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats the stored duration ratio as the chart annotation, e.g.
/// `"XOR / Temp = 1.23×"`.
pub fn ratio_label(ratio: f64) -> String {
    format!("XOR / Temp = {ratio:.2}×")
}

/// Resolved description of a benchmark comparison chart.
///
/// Holds the final display strings and bar values for one record so rendering
/// is a pure drawing step with no formatting decisions left in it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    title: String,
    bars: [(&'static str, f64); 2],
    annotation: String,
}

impl ChartSpec {
    /// Builds the chart description for a single benchmark run.
    ///
    /// The annotation uses the record's stored `ratio` field verbatim rather
    /// than recomputing it from the two durations, so the chart always agrees
    /// with the number the benchmark program itself reported.
    pub fn for_record(record: &BenchRecord) -> Self {
        Self {
            title: format!("Swap benchmark ({} swaps)", group_thousands(record.swaps)),
            bars: [
                (METHOD_LABELS[0], record.temp_seconds),
                (METHOD_LABELS[1], record.xor_seconds),
            ],
            annotation: ratio_label(record.ratio),
        }
    }

    /// Returns the chart title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the labeled bar values in display order.
    pub fn bars(&self) -> &[(&'static str, f64); 2] {
        &self.bars
    }

    /// Returns the annotation text drawn between the bars.
    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    fn tallest_bar(&self) -> f64 {
        self.bars.iter().map(|(_, value)| *value).fold(0.0, f64::max)
    }
}

/// Renders the chart to a PNG file at `path` with the given pixel dimensions,
/// overwriting any existing file.
pub fn render_png(
    spec: &ChartSpec,
    path: &Path,
    dimensions: (u32, u32),
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let root = BitMapBackend::new(path, dimensions).into_drawing_area();
    root.fill(&WHITE)?;

    let tallest = spec.tallest_bar();
    let y_max = if tallest > 0.0 {
        tallest * Y_AXIS_HEADROOM
    } else {
        1.0
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title(), (FONT, TITLE_FONT_SIZE))
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d((0u32..2u32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style((FONT, AXIS_FONT_SIZE))
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(index) => METHOD_LABELS
                .get(*index as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(BAR_OPACITY).filled())
            .margin(BAR_GAP)
            .data(
                spec.bars()
                    .iter()
                    .enumerate()
                    .map(|(index, (_, value))| (index as u32, *value)),
            ),
    )?;

    // The boundary between the two segments is the horizontal midpoint of the
    // bar centers; the annotation hangs at 90% of the taller bar.
    let annotation_style = TextStyle::from((FONT, ANNOTATION_FONT_SIZE).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(
        spec.annotation().to_owned(),
        (SegmentValue::Exact(1u32), tallest * ANNOTATION_HEIGHT_FRACTION),
        annotation_style,
    )))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{group_thousands, ratio_label, ChartSpec, METHOD_LABELS};
    use crate::model::BenchRecord;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn ratio_label_rounds_to_two_decimals() {
        assert_eq!(ratio_label(1.0), "XOR / Temp = 1.00×");
        assert_eq!(ratio_label(0.6666), "XOR / Temp = 0.67×");
        assert_eq!(ratio_label(0.6), "XOR / Temp = 0.60×");
    }

    #[test]
    fn spec_for_record_matches_expected_strings() {
        let record = BenchRecord {
            swaps: 1_000_000,
            temp_seconds: 1.5,
            xor_seconds: 0.9,
            ratio: 0.6,
        };
        let spec = ChartSpec::for_record(&record);
        assert_eq!(spec.title(), "Swap benchmark (1,000,000 swaps)");
        assert_eq!(spec.bars()[0], (METHOD_LABELS[0], 1.5));
        assert_eq!(spec.bars()[1], (METHOD_LABELS[1], 0.9));
        assert_eq!(spec.annotation(), "XOR / Temp = 0.60×");
    }
}
