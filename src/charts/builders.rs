use std::collections::BTreeMap;

use crate::data::model::SaleRecord;

use super::stats::{pearson, Bins, FiveNumber};
use super::{
    BoxGroup, ChartKind, ChartSpec, HistogramSeries, LabeledValue, ScatterPoint, ScatterSeries,
};

/// How many models the top-models bar chart keeps.
const TOP_MODELS: usize = 10;

/// Numeric columns of the correlation matrix, in display order.
const CORRELATION_COLUMNS: [&str; 5] = [
    "Year",
    "Engine_Size_L",
    "Mileage_KM",
    "Price_USD",
    "Sales_Volume",
];

/// Build all eight charts for the filtered view, in page order.
pub fn all_charts(rows: &[&SaleRecord]) -> Vec<ChartSpec> {
    vec![
        yearly_trend(rows),
        regional_split(rows),
        top_models(rows),
        price_vs_volume(rows),
        engine_size_by_classification(rows),
        correlation_matrix(rows),
        price_distribution(rows),
        engine_size_distribution(rows),
    ]
}

/// Sum of Sales_Volume per key. `BTreeMap` keeps group order deterministic.
fn sales_by<K: Ord>(rows: &[&SaleRecord], key: impl Fn(&SaleRecord) -> K) -> BTreeMap<K, u64> {
    let mut sums = BTreeMap::new();
    for rec in rows {
        *sums.entry(key(rec)).or_default() += rec.sales_volume;
    }
    sums
}

/// Total sales volume per year, as a marker line.
pub fn yearly_trend(rows: &[&SaleRecord]) -> ChartSpec {
    let points = sales_by(rows, |r| r.year)
        .into_iter()
        .map(|(year, sales)| [year as f64, sales as f64])
        .collect();

    ChartSpec {
        title: "Total Sales Volume by Year",
        kind: ChartKind::Line {
            x_label: "Year",
            y_label: "Sales Volume",
            markers: true,
            points,
        },
    }
}

/// Share of sales volume per region, as a donut.
pub fn regional_split(rows: &[&SaleRecord]) -> ChartSpec {
    let slices = sales_by(rows, |r| r.region.clone())
        .into_iter()
        .map(|(label, sales)| LabeledValue {
            label,
            value: sales as f64,
        })
        .collect();

    ChartSpec {
        title: "Sales Distribution by Region",
        kind: ChartKind::Pie { hole: 0.4, slices },
    }
}

/// The ten best-selling models, descending.
pub fn top_models(rows: &[&SaleRecord]) -> ChartSpec {
    let mut bars: Vec<LabeledValue> = sales_by(rows, |r| r.model.clone())
        .into_iter()
        .map(|(label, sales)| LabeledValue {
            label,
            value: sales as f64,
        })
        .collect();
    // Descending by sales; the map's name order breaks ties.
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));
    bars.truncate(TOP_MODELS);

    ChartSpec {
        title: "Top 10 BMW Models by Sales Volume",
        kind: ChartKind::Bar {
            y_label: "Sales Volume",
            bars,
        },
    }
}

/// Raw price/volume points, one translucent series per model.
pub fn price_vs_volume(rows: &[&SaleRecord]) -> ChartSpec {
    let mut by_model: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
    for rec in rows {
        by_model
            .entry(rec.model.as_str())
            .or_default()
            .push(ScatterPoint {
                x: rec.price_usd,
                y: rec.sales_volume as f64,
                region: rec.region.clone(),
                year: rec.year,
            });
    }
    let series = by_model
        .into_iter()
        .map(|(name, points)| ScatterSeries {
            name: name.to_string(),
            points,
        })
        .collect();

    ChartSpec {
        title: "Price vs Sales Volume",
        kind: ChartKind::Scatter {
            x_label: "Price_USD",
            y_label: "Sales_Volume",
            opacity: 0.6,
            series,
        },
    }
}

/// Engine size spread per sales classification.
pub fn engine_size_by_classification(rows: &[&SaleRecord]) -> ChartSpec {
    let mut by_class: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for rec in rows {
        by_class
            .entry(rec.sales_classification.as_str())
            .or_default()
            .push(rec.engine_size_l);
    }
    let groups = by_class
        .into_iter()
        .filter_map(|(name, values)| {
            FiveNumber::of(&values).map(|summary| BoxGroup {
                name: name.to_string(),
                summary,
            })
        })
        .collect();

    ChartSpec {
        title: "Engine Size by Sales Classification",
        kind: ChartKind::BoxPlot {
            y_label: "Engine_Size_L",
            groups,
        },
    }
}

/// Pearson correlation over the five numeric columns.
pub fn correlation_matrix(rows: &[&SaleRecord]) -> ChartSpec {
    let columns: [Vec<f64>; 5] = [
        rows.iter().map(|r| r.year as f64).collect(),
        rows.iter().map(|r| r.engine_size_l).collect(),
        rows.iter().map(|r| r.mileage_km).collect(),
        rows.iter().map(|r| r.price_usd).collect(),
        rows.iter().map(|r| r.sales_volume as f64).collect(),
    ];

    let cells = columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect();

    ChartSpec {
        title: "Correlation Matrix for Numeric Features",
        kind: ChartKind::Heatmap {
            labels: CORRELATION_COLUMNS.to_vec(),
            cells,
            scale_min: -1.0,
            scale_max: 1.0,
        },
    }
}

/// Price histogram, 30 bins, stacked by region.
pub fn price_distribution(rows: &[&SaleRecord]) -> ChartSpec {
    histogram(
        rows,
        "Price Distribution",
        "Price_USD",
        30,
        |r| r.price_usd,
        |r| r.region.as_str(),
    )
}

/// Engine size histogram, 20 bins, stacked by fuel type.
pub fn engine_size_distribution(rows: &[&SaleRecord]) -> ChartSpec {
    histogram(
        rows,
        "Engine Size Distribution",
        "Engine_Size_L",
        20,
        |r| r.engine_size_l,
        |r| r.fuel_type.as_str(),
    )
}

/// Shared histogram machinery: bins over the whole view's values, one count
/// series per group, plus the group's marginal summary.
fn histogram<'a>(
    rows: &[&'a SaleRecord],
    title: &'static str,
    x_label: &'static str,
    requested_bins: usize,
    value: impl Fn(&SaleRecord) -> f64,
    group: impl Fn(&'a SaleRecord) -> &'a str,
) -> ChartSpec {
    let all_values: Vec<f64> = rows.iter().map(|r| value(r)).collect();
    let bins = Bins::equal_width(&all_values, requested_bins);

    let mut by_group: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for rec in rows {
        by_group.entry(group(rec)).or_default().push(value(rec));
    }

    let series = by_group
        .into_iter()
        .filter_map(|(name, values)| {
            let marginal = FiveNumber::of(&values)?;
            let mut counts = vec![0u64; bins.count];
            for v in values {
                counts[bins.index_of(v)] += 1;
            }
            Some(HistogramSeries {
                name: name.to_string(),
                counts,
                marginal,
            })
        })
        .collect();

    ChartSpec {
        title,
        kind: ChartKind::Histogram {
            x_label,
            bins,
            series,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, three_row_dataset};

    fn year_2020_rows(ds: &crate::data::model::SalesDataset) -> Vec<&SaleRecord> {
        vec![&ds.records[0], &ds.records[2]]
    }

    #[test]
    fn yearly_trend_aggregates_per_year() {
        let ds = three_row_dataset();
        let spec = yearly_trend(&year_2020_rows(&ds));
        match spec.kind {
            ChartKind::Line { points, markers, .. } => {
                assert!(markers);
                assert_eq!(points, vec![[2020.0, 15.0]]);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn regional_split_is_a_donut() {
        let ds = three_row_dataset();
        let rows: Vec<_> = ds.records.iter().collect();
        let spec = regional_split(&rows);
        match spec.kind {
            ChartKind::Pie { hole, slices } => {
                assert_eq!(hole, 0.4);
                let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
                assert_eq!(labels, vec!["EU", "US"]);
                assert_eq!(slices[1].value, 15.0);
            }
            other => panic!("expected pie, got {other:?}"),
        }
    }

    #[test]
    fn top_models_sorts_descending_and_truncates() {
        let records: Vec<SaleRecord> = (0..12)
            .map(|i| record(2020, "US", &format!("M{i:02}"), 12 - i as u64, 1.0))
            .collect();
        let rows: Vec<_> = records.iter().collect();

        let spec = top_models(&rows);
        match spec.kind {
            ChartKind::Bar { bars, .. } => {
                assert_eq!(bars.len(), 10);
                assert_eq!(bars[0].label, "M00");
                assert_eq!(bars[0].value, 12.0);
                assert!(bars.windows(2).all(|w| w[0].value >= w[1].value));
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn scatter_carries_hover_payload() {
        let ds = three_row_dataset();
        let rows: Vec<_> = ds.records.iter().collect();
        let spec = price_vs_volume(&rows);
        match spec.kind {
            ChartKind::Scatter { series, opacity, .. } => {
                assert_eq!(opacity, 0.6);
                let x3 = series.iter().find(|s| s.name == "X3").expect("X3 series");
                assert_eq!(x3.points.len(), 2);
                assert_eq!(x3.points[0].region, "US");
                assert_eq!(x3.points[0].year, 2020);
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let ds = three_row_dataset();
        let rows: Vec<_> = ds.records.iter().collect();
        let spec = correlation_matrix(&rows);
        match spec.kind {
            ChartKind::Heatmap {
                cells,
                scale_min,
                scale_max,
                labels,
            } => {
                assert_eq!(labels.len(), 5);
                assert_eq!((scale_min, scale_max), (-1.0, 1.0));
                for i in 0..5 {
                    for j in 0..5 {
                        let c = cells[i][j];
                        if c.is_nan() {
                            assert!(cells[j][i].is_nan());
                            continue;
                        }
                        assert!((-1.0..=1.0).contains(&c), "cell {i},{j} = {c}");
                        assert!((c - cells[j][i]).abs() < 1e-12);
                        if i == j {
                            assert!((c - 1.0).abs() < 1e-12);
                        }
                    }
                }
            }
            other => panic!("expected heatmap, got {other:?}"),
        }
    }

    #[test]
    fn histogram_counts_cover_every_row() {
        let ds = three_row_dataset();
        let rows: Vec<_> = ds.records.iter().collect();
        let spec = price_distribution(&rows);
        match spec.kind {
            ChartKind::Histogram { bins, series, .. } => {
                assert_eq!(bins.count, 30);
                let total: u64 = series.iter().flat_map(|s| &s.counts).sum();
                assert_eq!(total as usize, rows.len());
            }
            other => panic!("expected histogram, got {other:?}"),
        }
    }

    #[test]
    fn every_builder_tolerates_an_empty_view() {
        for spec in all_charts(&[]) {
            match spec.kind {
                ChartKind::Line { points, .. } => assert!(points.is_empty()),
                ChartKind::Pie { slices, .. } => assert!(slices.is_empty()),
                ChartKind::Bar { bars, .. } => assert!(bars.is_empty()),
                ChartKind::Scatter { series, .. } => assert!(series.is_empty()),
                ChartKind::BoxPlot { groups, .. } => assert!(groups.is_empty()),
                ChartKind::Heatmap { cells, .. } => {
                    assert!(cells.iter().flatten().all(|c| c.is_nan()));
                }
                ChartKind::Histogram { series, bins, .. } => {
                    assert!(series.is_empty());
                    assert_eq!(bins.count, 0);
                }
            }
        }
    }
}
