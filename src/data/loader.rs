//! CSV Data Loader Module
//! Loads headerless motion-sample CSV files with Polars and assigns the fixed
//! 14-column schema.

use crate::data::schema::{COLUMN_NAMES, FEATURE_COLUMNS};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Expected {expected} fields per row, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("Column '{column}' has {count} values that are not numbers")]
    NonNumeric { column: String, count: usize },
}

/// Fail unless `path` names an existing regular file.
pub fn ensure_file(path: &Path) -> Result<(), LoaderError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LoaderError::NotFound(path.to_path_buf()))
    }
}

/// Motion samples in file order, one row per CSV line.
///
/// Feature columns are always `Float64`, with empty cells stored as null and
/// read back as NaN. `id` and `label` are kept as text.
#[derive(Debug, Clone)]
pub struct SampleTable {
    df: DataFrame,
    source: PathBuf,
}

impl SampleTable {
    /// Load a headerless CSV file using Polars.
    ///
    /// Every column is read as text and converted afterwards, so column types
    /// never depend on how many rows Polars samples.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        ensure_file(path)?;

        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let table = Self::from_dataframe(df, path)?;
        log::info!(
            "Loaded {} samples from {}",
            table.height(),
            path.display()
        );
        Ok(table)
    }

    /// Wrap a positional DataFrame, naming its columns and validating features.
    pub fn from_dataframe(
        mut df: DataFrame,
        source: impl Into<PathBuf>,
    ) -> Result<Self, LoaderError> {
        if df.width() != COLUMN_NAMES.len() {
            return Err(LoaderError::ColumnCount {
                expected: COLUMN_NAMES.len(),
                found: df.width(),
            });
        }
        df.set_column_names(COLUMN_NAMES)?;

        for name in FEATURE_COLUMNS {
            let raw = df.column(name)?.as_materialized_series();
            let empty = raw.null_count();
            let values = raw.cast(&DataType::Float64)?;

            // Empty cells are nulls already; any new null is an unparseable value.
            let rejected = values.null_count() - empty;
            if rejected > 0 {
                return Err(LoaderError::NonNumeric {
                    column: name.to_string(),
                    count: rejected,
                });
            }
            if empty > 0 {
                log::warn!("Column '{}' has {} empty cells", name, empty);
            }
            df.with_column(values)?;
        }

        Ok(Self {
            df,
            source: source.into(),
        })
    }

    /// Get the number of samples.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Get column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn column(&self, name: &str) -> PolarsResult<&Column> {
        self.df.column(name)
    }

    /// All values of a numeric column, in sample order.
    pub fn feature_values(&self, name: &str) -> PolarsResult<Vec<f64>> {
        self.head_values(name, usize::MAX)
    }

    /// The first `limit` values of a numeric column (fewer if the table is shorter).
    pub fn head_values(&self, name: &str, limit: usize) -> PolarsResult<Vec<f64>> {
        let ca = self.df.column(name)?.f64()?;
        Ok(ca
            .into_iter()
            .take(limit)
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Column values rendered as text, used for identifier columns.
    pub fn text_values(&self, name: &str) -> PolarsResult<Vec<String>> {
        let series = self
            .df
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::String)?;
        Ok(series
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect())
    }

    /// Copy of this table with the named columns replaced by new values.
    pub fn with_replaced_columns(
        &self,
        columns: Vec<(String, Vec<f64>)>,
    ) -> PolarsResult<SampleTable> {
        let mut df = self.df.clone();
        for (name, values) in columns {
            df.with_column(Column::new(name.into(), values))?;
        }
        Ok(SampleTable {
            df,
            source: self.source.clone(),
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// File name of the source, without its directory.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_rows, write_csv};

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        match SampleTable::load(&path) {
            Err(LoaderError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ensure_file(dir.path()),
            Err(LoaderError::NotFound(_))
        ));
    }

    #[test]
    fn test_schema_assignment() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "walk.csv", &sample_rows(25));

        let table = SampleTable::load(&path).unwrap();

        assert_eq!(table.height(), 25);
        assert_eq!(table.column_names(), COLUMN_NAMES.to_vec());
        for name in FEATURE_COLUMNS {
            assert_eq!(table.column(name).unwrap().dtype(), &DataType::Float64);
        }
    }

    #[test]
    fn test_row_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let contents = "\
7,wave,0.5,1,1,1,1,1,1,1,1,1,1,1
3,grab,-2.25,1,1,1,1,1,1,1,1,1,1,1
5,idle,10,1,1,1,1,1,1,1,1,1,1,4.5
";
        let path = write_csv(&dir, "ordered.csv", contents);

        let table = SampleTable::load(&path).unwrap();

        assert_eq!(table.text_values("id").unwrap(), vec!["7", "3", "5"]);
        assert_eq!(
            table.text_values("label").unwrap(),
            vec!["wave", "grab", "idle"]
        );
        assert_eq!(table.feature_values("roll").unwrap(), vec![0.5, -2.25, 10.0]);
        assert_eq!(table.feature_values("accZ").unwrap(), vec![1.0, 1.0, 4.5]);
    }

    #[test]
    fn test_wrong_column_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "narrow.csv", "1,grab,0,0,0\n2,grab,1,1,1\n");

        match SampleTable::load(&path) {
            Err(LoaderError::ColumnCount { expected, found }) => {
                assert_eq!(expected, 14);
                assert_eq!(found, 5);
            }
            other => panic!("expected ColumnCount, got {other:?}"),
        }
    }

    #[test]
    fn test_text_in_feature_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "text.csv",
            "1,grab,abc,0,0,0,0,0,0,0,0,0,0,0\n2,grab,def,1,1,1,1,1,1,1,1,1,1,1\n",
        );

        match SampleTable::load(&path) {
            Err(LoaderError::NonNumeric { column, count }) => {
                assert_eq!(column, "roll");
                assert_eq!(count, 2);
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
    }

    #[test]
    fn test_types_do_not_depend_on_leading_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut contents = String::new();
        for i in 0..10_005 {
            let acc_z = if i < 10_000 { "0" } else { "0.5" };
            contents.push_str(&format!("{i},walk,1,1,1,1,1,1,1,1,1,1,1,{acc_z}\n"));
        }
        let path = write_csv(&dir, "long.csv", &contents);

        let table = SampleTable::load(&path).unwrap();

        let acc_z = table.feature_values("accZ").unwrap();
        assert_eq!(table.height(), 10_005);
        assert_eq!(acc_z[9_999], 0.0);
        assert_eq!(acc_z[10_000], 0.5);
    }

    #[test]
    fn test_empty_cell_is_kept_as_nan() {
        let dir = tempfile::tempdir().unwrap();
        let contents = "\
1,grab,0,0,0,0,0,0,0,0,0,0,0,0
2,grab,,1,1,1,1,1,1,1,1,1,1,1
3,grab,2,2,2,2,2,2,2,2,2,2,2,2
";
        let path = write_csv(&dir, "gap.csv", contents);

        let table = SampleTable::load(&path).unwrap();

        let roll = table.feature_values("roll").unwrap();
        assert_eq!(table.height(), 3);
        assert_eq!(roll[0], 0.0);
        assert!(roll[1].is_nan());
        assert_eq!(roll[2], 2.0);
        assert_eq!(table.feature_values("pitch").unwrap(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_head_values_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "long.csv", &sample_rows(40));
        let table = SampleTable::load(&path).unwrap();

        assert_eq!(table.head_values("yaw", 10).unwrap().len(), 10);
        assert_eq!(table.head_values("yaw", 1000).unwrap().len(), 40);
    }

    #[test]
    fn test_source_name_strips_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "u1-grab-data.csv", &sample_rows(3));
        let table = SampleTable::load(&path).unwrap();

        assert_eq!(table.source_name(), "u1-grab-data.csv");
        assert_eq!(table.source_path(), path.as_path());
    }
}
