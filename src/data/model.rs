use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SaleRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single sales record (one row of the source CSV).
///
/// Field order matches the source column order, so serializing a record
/// through `csv` reproduces the original layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Fuel_Type")]
    pub fuel_type: String,
    #[serde(rename = "Transmission")]
    pub transmission: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Sales_Classification")]
    pub sales_classification: String,
    #[serde(rename = "Sales_Volume")]
    pub sales_volume: u64,
    #[serde(rename = "Price_USD")]
    pub price_usd: f64,
    #[serde(rename = "Engine_Size_L")]
    pub engine_size_l: f64,
    #[serde(rename = "Mileage_KM")]
    pub mileage_km: f64,
}

/// The 11 column names, in data-model order. Used for the loader's header
/// check and the export header.
pub const COLUMNS: [&str; 11] = [
    "Year",
    "Region",
    "Model",
    "Fuel_Type",
    "Transmission",
    "Color",
    "Sales_Classification",
    "Sales_Volume",
    "Price_USD",
    "Engine_Size_L",
    "Mileage_KM",
];

// ---------------------------------------------------------------------------
// Dimension – the six filterable columns
// ---------------------------------------------------------------------------

/// One of the six categorical columns the sidebar filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Year,
    Region,
    Model,
    FuelType,
    Transmission,
    Color,
}

impl Dimension {
    /// Canonical order, matching the sidebar top-to-bottom.
    pub const ALL: [Dimension; 6] = [
        Dimension::Year,
        Dimension::Region,
        Dimension::Model,
        Dimension::FuelType,
        Dimension::Transmission,
        Dimension::Color,
    ];

    /// Label shown on the filter widget.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Region => "Region",
            Dimension::Model => "Model",
            Dimension::FuelType => "Fuel Type",
            Dimension::Transmission => "Transmission",
            Dimension::Color => "Color",
        }
    }
}

// ---------------------------------------------------------------------------
// FilterValue – a single cell in a filterable column
// ---------------------------------------------------------------------------

/// A value of one filter dimension: numeric for Year, text for the rest.
/// `Ord` is derived so domains and selections live in `BTreeSet`s with a
/// stable ascending order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Int(i) => write!(f, "{i}"),
            FilterValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl SaleRecord {
    /// The record's value in the given filter dimension.
    pub fn dimension_value(&self, dim: Dimension) -> FilterValue {
        match dim {
            Dimension::Year => FilterValue::Int(self.year),
            Dimension::Region => FilterValue::Text(self.region.clone()),
            Dimension::Model => FilterValue::Text(self.model.clone()),
            Dimension::FuelType => FilterValue::Text(self.fuel_type.clone()),
            Dimension::Transmission => FilterValue::Text(self.transmission.clone()),
            Dimension::Color => FilterValue::Text(self.color.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter domains.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    /// All records (rows), in file order.
    pub records: Vec<SaleRecord>,
    /// For each filter dimension the sorted set of distinct values.
    pub domains: BTreeMap<Dimension, BTreeSet<FilterValue>>,
}

impl SalesDataset {
    /// Build the per-dimension domains from the loaded records.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        let mut domains: BTreeMap<Dimension, BTreeSet<FilterValue>> = BTreeMap::new();

        for dim in Dimension::ALL {
            let values = records
                .iter()
                .map(|rec| rec.dimension_value(dim))
                .collect();
            domains.insert(dim, values);
        }
        SalesDataset { records, domains }
    }

    /// Sorted distinct values of one dimension.
    pub fn domain(&self, dim: Dimension) -> &BTreeSet<FilterValue> {
        static EMPTY: BTreeSet<FilterValue> = BTreeSet::new();
        self.domains.get(&dim).unwrap_or(&EMPTY)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A record with the given filterable fields and quiet defaults elsewhere.
    pub(crate) fn record(
        year: i64,
        region: &str,
        model: &str,
        sales_volume: u64,
        price_usd: f64,
    ) -> SaleRecord {
        SaleRecord {
            year,
            region: region.to_string(),
            model: model.to_string(),
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            color: "Black".to_string(),
            sales_classification: "Low".to_string(),
            sales_volume,
            price_usd,
            engine_size_l: 2.0,
            mileage_km: 50_000.0,
        }
    }

    /// The three-row dataset used across the filter/summary/chart tests.
    pub(crate) fn three_row_dataset() -> SalesDataset {
        SalesDataset::from_records(vec![
            record(2020, "US", "X3", 10, 50_000.0),
            record(2021, "EU", "X5", 20, 70_000.0),
            record(2020, "US", "X3", 5, 45_000.0),
        ])
    }

    #[test]
    fn domains_are_sorted_and_distinct() {
        let ds = three_row_dataset();

        let years: Vec<FilterValue> = ds.domain(Dimension::Year).iter().cloned().collect();
        assert_eq!(years, vec![FilterValue::Int(2020), FilterValue::Int(2021)]);

        let models: Vec<FilterValue> = ds.domain(Dimension::Model).iter().cloned().collect();
        assert_eq!(
            models,
            vec![
                FilterValue::Text("X3".to_string()),
                FilterValue::Text("X5".to_string()),
            ]
        );
    }

    #[test]
    fn empty_dataset_has_empty_domains() {
        let ds = SalesDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        for dim in Dimension::ALL {
            assert!(ds.domain(dim).is_empty());
        }
    }

    #[test]
    fn year_values_order_numerically() {
        assert!(FilterValue::Int(999) < FilterValue::Int(1000));
        assert_eq!(FilterValue::Int(2020).to_string(), "2020");
        assert_eq!(FilterValue::Text("X3".into()).to_string(), "X3");
    }
}
