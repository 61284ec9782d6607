use std::collections::BTreeMap;

use super::model::SaleRecord;

// ---------------------------------------------------------------------------
// KPI row shown at the top of the dashboard
// ---------------------------------------------------------------------------

/// Scalar summary statistics of the filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kpis {
    /// Number of records in the view.
    pub total_cars: usize,
    /// Sum of Sales_Volume over the view.
    pub total_sales: u64,
    /// Mean Price_USD truncated to a whole dollar; None for an empty view.
    pub avg_price_usd: Option<u64>,
    /// Model with the highest summed Sales_Volume; None for an empty view.
    /// Ties go to the lexicographically smallest model name.
    pub top_model: Option<String>,
}

/// Compute the KPI row. Pure; an empty view yields zero counts and the
/// `N/A` sentinels instead of failing.
pub fn summarize(rows: &[&SaleRecord]) -> Kpis {
    let total_cars = rows.len();
    let total_sales: u64 = rows.iter().map(|r| r.sales_volume).sum();

    let avg_price_usd = if rows.is_empty() {
        None
    } else {
        let sum: f64 = rows.iter().map(|r| r.price_usd).sum();
        Some((sum / rows.len() as f64) as u64)
    };

    let mut by_model: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in rows {
        *by_model.entry(rec.model.as_str()).or_default() += rec.sales_volume;
    }
    // Strict `>` keeps the first (smallest-name) model on ties.
    let mut top_model: Option<(&str, u64)> = None;
    for (&model, &sales) in &by_model {
        match top_model {
            Some((_, best)) if sales <= best => {}
            _ => top_model = Some((model, sales)),
        }
    }

    Kpis {
        total_cars,
        total_sales,
        avg_price_usd,
        top_model: top_model.map(|(m, _)| m.to_string()),
    }
}

impl Kpis {
    /// `$52,340` style label, or `N/A` for an empty view.
    pub fn avg_price_label(&self) -> String {
        match self.avg_price_usd {
            Some(price) => format!("${}", thousands(price)),
            None => "N/A".to_string(),
        }
    }

    /// Top model name, or `N/A` for an empty view.
    pub fn top_model_label(&self) -> &str {
        self.top_model.as_deref().unwrap_or("N/A")
    }
}

/// Group digits in threes: 1234567 → "1,234,567".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
