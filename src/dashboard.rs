use crate::charts::{builders, ChartSpec};
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::{SaleRecord, SalesDataset};
use crate::data::summary::{summarize, Kpis};

/// How many filtered rows the raw-data preview shows.
pub const PREVIEW_ROWS: usize = 100;

// ---------------------------------------------------------------------------
// Dashboard – everything derived from one (dataset, selection) pair
// ---------------------------------------------------------------------------

/// The derived page content: filtered indices, KPI row, and all charts.
/// Recomputed on every selection change and discarded on the next one.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    /// Indices of records passing the current filters, in dataset order.
    pub indices: Vec<usize>,
    pub kpis: Kpis,
    pub charts: Vec<ChartSpec>,
}

/// Derive the full dashboard from the dataset and the current selection.
/// Pure: no framework callbacks, no side effects, so the whole pipeline is
/// testable without a window.
pub fn render(dataset: &SalesDataset, selection: &FilterSelection) -> Dashboard {
    let indices = filtered_indices(dataset, selection);
    let rows: Vec<&SaleRecord> = indices.iter().map(|&i| &dataset.records[i]).collect();

    Dashboard {
        kpis: summarize(&rows),
        charts: builders::all_charts(&rows),
        indices,
    }
}

impl Dashboard {
    /// The preview slice: at most [`PREVIEW_ROWS`] of the filtered indices.
    pub fn preview(&self) -> &[usize] {
        &self.indices[..self.indices.len().min(PREVIEW_ROWS)]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::charts::ChartKind;
    use crate::data::filter::select_all;
    use crate::data::model::tests::three_row_dataset;
    use crate::data::model::{Dimension, FilterValue};

    #[test]
    fn year_2020_scenario_end_to_end() {
        let ds = three_row_dataset();
        let mut selection = select_all(&ds);
        selection.insert(Dimension::Year, BTreeSet::from([FilterValue::Int(2020)]));

        let dashboard = render(&ds, &selection);
        assert_eq!(dashboard.indices, vec![0, 2]);
        assert_eq!(dashboard.kpis.total_cars, 2);
        assert_eq!(dashboard.kpis.total_sales, 15);
        assert_eq!(dashboard.kpis.top_model.as_deref(), Some("X3"));

        let trend = &dashboard.charts[0];
        match &trend.kind {
            ChartKind::Line { points, .. } => assert_eq!(points, &vec![[2020.0, 15.0]]),
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn empty_region_selection_degenerates_cleanly() {
        let ds = three_row_dataset();
        let mut selection = select_all(&ds);
        selection.insert(Dimension::Region, BTreeSet::new());

        let dashboard = render(&ds, &selection);
        assert!(dashboard.indices.is_empty());
        assert_eq!(dashboard.kpis.total_cars, 0);
        assert_eq!(dashboard.kpis.avg_price_label(), "N/A");
        assert_eq!(dashboard.charts.len(), 8);
        assert!(dashboard.preview().is_empty());
    }

    #[test]
    fn preview_is_bounded() {
        let ds = three_row_dataset();
        let dashboard = render(&ds, &select_all(&ds));
        assert_eq!(dashboard.preview().len(), 3);
        assert!(dashboard.preview().len() <= PREVIEW_ROWS);
    }
}
