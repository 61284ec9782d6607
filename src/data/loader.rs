use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{SaleRecord, SalesDataset, COLUMNS};

/// Path of the sales table, relative to the working directory.
pub const DATA_FILE: &str = "BMW_Car_Sales_Classification.csv";

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Why the sales table could not be loaded. All variants are fatal for the
/// session; the dashboard has nothing to show without the table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV header: {0}")]
    Header(csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {source}")]
    Row {
        /// 1-based data row number (the header is row 0).
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the sales table from a CSV file with the fixed 11-column schema.
///
/// The header is checked for every required column up front so a schema
/// mismatch reports the missing column by name instead of failing on the
/// first row.
pub fn load_csv(path: &Path) -> Result<SalesDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for col in COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<SaleRecord>().enumerate() {
        let record = result.map_err(|source| LoadError::Row { row: i + 1, source })?;
        records.push(record);
    }

    Ok(SalesDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "Year,Region,Model,Fuel_Type,Transmission,Color,\
                          Sales_Classification,Sales_Volume,Price_USD,Engine_Size_L,Mileage_KM";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_well_formed_file() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             2020,US,X3,Petrol,Automatic,Black,Low,10,50000,2.0,50000\n\
             2021,EU,X5,Diesel,Manual,White,High,20,70000,3.0,10000\n"
        ));

        let ds = load_csv(file.path()).expect("load");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].model, "X3");
        assert_eq!(ds.records[1].price_usd, 70_000.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_csv(Path::new("no_such_file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        // Header without Mileage_KM.
        let file = write_csv(
            "Year,Region,Model,Fuel_Type,Transmission,Color,\
             Sales_Classification,Sales_Volume,Price_USD,Engine_Size_L\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Mileage_KM")));
    }

    #[test]
    fn malformed_row_reports_row_number() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             2020,US,X3,Petrol,Automatic,Black,Low,10,50000,2.0,50000\n\
             not_a_year,EU,X5,Diesel,Manual,White,High,20,70000,3.0,10000\n"
        ));

        match load_csv(file.path()).unwrap_err() {
            LoadError::Row { row, .. } => assert_eq!(row, 2),
            other => panic!("expected row error, got {other:?}"),
        }
    }
}
