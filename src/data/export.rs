use anyhow::{Context, Result};

use super::model::SaleRecord;

/// Suggested filename for the download dialog.
pub const EXPORT_FILE_NAME: &str = "BMW_Car_Sales_Filtered.csv";

/// Content type of the exported bytes.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Serialize the filtered view to CSV: one header row with the 11 column
/// names in data-model order, then one line per record. No index column.
/// An empty view yields a header-only file.
pub fn to_csv(rows: &[&SaleRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        // Nothing to serialize, so emit the header explicitly.
        writer
            .write_record(super::model::COLUMNS)
            .context("writing CSV header")?;
    }
    for rec in rows {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {e}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::loader::load_csv;
    use crate::data::model::tests::three_row_dataset;
    use crate::data::model::COLUMNS;

    #[test]
    fn header_matches_the_column_order() {
        let bytes = to_csv(&[]).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf-8");
        assert_eq!(text.trim_end(), COLUMNS.join(","));
    }

    #[test]
    fn empty_view_exports_header_only() {
        let bytes = to_csv(&[]).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf-8");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn round_trips_through_the_loader() {
        let ds = three_row_dataset();
        let rows: Vec<_> = ds.records.iter().collect();
        let bytes = to_csv(&rows).expect("serialize");

        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(&bytes).expect("write temp file");

        let reloaded = load_csv(file.path()).expect("reload");
        assert_eq!(reloaded.records, ds.records);
    }
}
