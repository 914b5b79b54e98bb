use crate::historical::error::HistoricalDataError;
use crate::types::feature::{Feature, FeatureVector};
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use polars::prelude::*;
use std::path::Path;

pub(crate) const DISTRICT_COLUMN: &str = "District";
pub(crate) const DATE_COLUMN: &str = "Date";

/// Accepted layouts for string dates, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Which selection rule produced a set of historical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordMatch {
    /// Records sharing the target's day-of-month.
    DayOfMonth { records: usize },
    /// No day-of-month match; records sharing the target's month.
    Month { records: usize },
    /// Nothing for this location on that day or in that month.
    NoRecords,
}

impl RecordMatch {
    pub fn records(&self) -> usize {
        match self {
            RecordMatch::DayOfMonth { records } | RecordMatch::Month { records } => *records,
            RecordMatch::NoRecords => 0,
        }
    }
}

/// The historical climate dataset, loaded once and queried read-only.
///
/// Holds the `District` and `Date` columns plus the ten [`Feature`] columns as
/// `Float64`. Missing cells stay null and are skipped when averaging.
#[derive(Debug, Clone)]
pub struct HistoricalDataset {
    frame: DataFrame,
}

impl HistoricalDataset {
    /// Reads a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`HistoricalDataError::CsvRead`] if the file cannot be read or parsed,
    /// [`HistoricalDataError::ColumnNotFound`] if `District`, `Date` or any feature column
    /// is absent, and [`HistoricalDataError::DateParse`] if any `Date` value is not a date
    /// in one of the accepted layouts (`2020-01-31`, `1/31/2020`, `31-01-2020`).
    pub fn from_csv(path: &Path) -> Result<Self, HistoricalDataError> {
        // Infer over every row: a feature column that only holds whole numbers
        // early on must still read as float once decimals show up.
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| HistoricalDataError::CsvRead(path.to_path_buf(), e))?
            .finish()
            .map_err(|e| HistoricalDataError::CsvRead(path.to_path_buf(), e))?;

        let dataset = Self::from_frame(frame)?;
        info!(
            "Loaded {} historical records for {} districts from {}",
            dataset.len(),
            dataset.districts()?.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Validates and normalizes an already loaded frame.
    pub fn from_frame(frame: DataFrame) -> Result<Self, HistoricalDataError> {
        let required = [DISTRICT_COLUMN, DATE_COLUMN]
            .into_iter()
            .chain(Feature::column_names());
        for name in required {
            frame
                .column(name)
                .map_err(|e| HistoricalDataError::ColumnNotFound(name.to_string(), e))?;
        }

        let date = match frame.column(DATE_COLUMN)?.dtype() {
            DataType::Date => col(DATE_COLUMN),
            DataType::Datetime(_, _) => col(DATE_COLUMN).cast(DataType::Date),
            _ => {
                let raw = col(DATE_COLUMN).cast(DataType::String);
                let attempts = DATE_FORMATS.map(|format| {
                    raw.clone().str().to_date(StrptimeOptions {
                        format: Some(format.into()),
                        strict: false,
                        exact: true,
                        ..Default::default()
                    })
                });
                coalesce(&attempts)
            }
        };

        let missing_before = frame.column(DATE_COLUMN)?.null_count();
        let frame = frame
            .lazy()
            .with_column(date.alias(DATE_COLUMN))
            .collect()
            .map_err(HistoricalDataError::DateParse)?;
        let unparsed = frame
            .column(DATE_COLUMN)?
            .null_count()
            .saturating_sub(missing_before);
        if unparsed > 0 {
            return Err(HistoricalDataError::DateParse(PolarsError::ComputeError(
                format!(
                    "{} value(s) match none of the formats {:?}",
                    unparsed, DATE_FORMATS
                )
                .into(),
            )));
        }

        let mut columns = vec![
            col(DISTRICT_COLUMN).cast(DataType::String),
            col(DATE_COLUMN),
        ];
        columns.extend(
            Feature::column_names()
                .iter()
                .map(|name| col(*name).cast(DataType::Float64)),
        );
        let frame = frame.lazy().select(columns).collect()?;

        Ok(Self { frame })
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Unique district names, in order of first appearance.
    pub fn districts(&self) -> Result<Vec<String>, HistoricalDataError> {
        let unique = self
            .frame
            .clone()
            .lazy()
            .select([col(DISTRICT_COLUMN).unique_stable()])
            .collect()?;
        let names = unique
            .column(DISTRICT_COLUMN)?
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_owned)
            .collect();
        Ok(names)
    }

    fn records_where(&self, predicate: Expr) -> Result<DataFrame, PolarsError> {
        self.frame.clone().lazy().filter(predicate).collect()
    }

    /// Selects the records for `district` used to estimate `date`.
    ///
    /// Same day-of-month first, then same month; the first non-empty set wins.
    pub fn select_records(
        &self,
        district: &str,
        date: NaiveDate,
    ) -> Result<(RecordMatch, DataFrame), HistoricalDataError> {
        let in_district = col(DISTRICT_COLUMN).eq(lit(district));

        let same_day = self.records_where(
            in_district.clone().and(
                col(DATE_COLUMN)
                    .dt()
                    .day()
                    .cast(DataType::Int32)
                    .eq(lit(date.day() as i32)),
            ),
        )?;
        if same_day.height() > 0 {
            debug!(
                "{}: {} records share day-of-month {}",
                district,
                same_day.height(),
                date.day()
            );
            let records = same_day.height();
            return Ok((RecordMatch::DayOfMonth { records }, same_day));
        }

        let same_month = self.records_where(
            in_district.and(
                col(DATE_COLUMN)
                    .dt()
                    .month()
                    .cast(DataType::Int32)
                    .eq(lit(date.month() as i32)),
            ),
        )?;
        if same_month.height() > 0 {
            debug!(
                "{}: no day-of-month match for {}, {} records share month {}",
                district,
                date,
                same_month.height(),
                date.month()
            );
            let records = same_month.height();
            return Ok((RecordMatch::Month { records }, same_month));
        }

        debug!("{}: no historical records for {}", district, date);
        Ok((RecordMatch::NoRecords, same_month))
    }

    /// Averages the ten feature columns over the records selected for `district` and `date`.
    ///
    /// Null cells are excluded from their column's mean; a column with no valid
    /// values averages to zero. With no matching records the vector is all zeros.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use district_forecast::{Feature, HistoricalDataset};
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dataset = HistoricalDataset::from_csv(Path::new("dailyclimate.csv"))?;
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    ///
    /// let (matched, features) = dataset.average_features("Pokhara", date)?;
    /// println!("{:?}: mean Temp_2m = {:.1}", matched, features[Feature::Temp2m]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn average_features(
        &self,
        district: &str,
        date: NaiveDate,
    ) -> Result<(RecordMatch, FeatureVector), HistoricalDataError> {
        let (matched, records) = self.select_records(district, date)?;
        if matched == RecordMatch::NoRecords {
            return Ok((matched, FeatureVector::zeroed()));
        }

        let means = records
            .lazy()
            .select(
                Feature::column_names()
                    .iter()
                    .map(|name| col(*name).mean())
                    .collect::<Vec<_>>(),
            )
            .collect()?;

        let mut values = [0.0; Feature::COUNT];
        for (slot, name) in values.iter_mut().zip(Feature::column_names()) {
            *slot = means
                .column(name)?
                .f64()?
                .get(0)
                .filter(|v| v.is_finite())
                .unwrap_or(0.0);
        }
        Ok((matched, FeatureVector::new(values)))
    }
}
