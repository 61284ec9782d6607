/// Chart layer: declarative, data-bound chart descriptions.
///
/// Builders turn the filtered view into [`ChartSpec`] values; nothing in
/// this module knows about egui. The presentation layer decides how each
/// [`ChartKind`] is drawn, so the aggregation logic stays testable without
/// a window.
pub mod builders;
pub mod stats;

use stats::{Bins, FiveNumber};

// ---------------------------------------------------------------------------
// ChartSpec
// ---------------------------------------------------------------------------

/// One chart: its section title plus the kind-specific data binding.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub kind: ChartKind,
}

/// The kind-specific payload. Each variant carries everything the renderer
/// needs, already aggregated.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    /// Line chart of (x, y) points in ascending x order.
    Line {
        x_label: &'static str,
        y_label: &'static str,
        markers: bool,
        points: Vec<[f64; 2]>,
    },
    /// Pie chart; `hole` in [0, 1) turns it into a donut.
    Pie { hole: f32, slices: Vec<LabeledValue> },
    /// Vertical bars, one per label, with the value printed above each bar.
    Bar {
        y_label: &'static str,
        bars: Vec<LabeledValue>,
    },
    /// Scatter of raw rows, one series per category.
    Scatter {
        x_label: &'static str,
        y_label: &'static str,
        opacity: f32,
        series: Vec<ScatterSeries>,
    },
    /// One box per group.
    BoxPlot {
        y_label: &'static str,
        groups: Vec<BoxGroup>,
    },
    /// Square correlation matrix on a fixed diverging scale. NaN cells are
    /// undefined and render blank.
    Heatmap {
        labels: Vec<&'static str>,
        cells: Vec<Vec<f64>>,
        scale_min: f64,
        scale_max: f64,
    },
    /// Stacked histogram: shared bins, one count series per group, each
    /// with a marginal five-number summary of its raw values.
    Histogram {
        x_label: &'static str,
        bins: Bins,
        series: Vec<HistogramSeries>,
    },
}

/// A label with its aggregated value (pie slices, bars).
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

/// One scatter series (all points of one category).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

/// A scatter point with its hover payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub region: String,
    pub year: i64,
}

/// One box-plot group.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub name: String,
    pub summary: FiveNumber,
}

/// Per-bin counts of one histogram group, stacked over the groups before it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub name: String,
    pub counts: Vec<u64>,
    pub marginal: FiveNumber,
}
