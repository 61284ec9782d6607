/// Data layer: core types, loading, filtering, KPIs, and export.
///
/// Architecture:
/// ```text
///  BMW_Car_Sales_Classification.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalesDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<SaleRecord>, per-dimension domains
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply dimension selections → filtered indices
///   └──────────┘
///        │
///        ├──► summary  (KPI row)
///        └──► export   (filtered CSV bytes)
/// ```
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
