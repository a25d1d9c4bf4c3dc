use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTemperature {
    pub date: NaiveDate,
    pub min: f64,
    pub max: f64,
}

/// Index-aligned daily minimum and maximum temperatures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    days: Vec<DailyTemperature>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("daily series columns differ in length: {dates} dates, {mins} minimums, {maxes} maximums")]
pub struct ColumnMismatch {
    pub dates: usize,
    pub mins: usize,
    pub maxes: usize,
}

impl DailySeries {
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        mins: Vec<f64>,
        maxes: Vec<f64>,
    ) -> Result<Self, ColumnMismatch> {
        if dates.len() != mins.len() || dates.len() != maxes.len() {
            return Err(ColumnMismatch {
                dates: dates.len(),
                mins: mins.len(),
                maxes: maxes.len(),
            });
        }

        let days = dates
            .into_iter()
            .zip(mins)
            .zip(maxes)
            .map(|((date, min), max)| DailyTemperature { date, min, max })
            .collect();
        Ok(Self { days })
    }

    pub fn days(&self) -> &[DailyTemperature] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Week selection as sent by the page form, the query string or JSON.
#[derive(Debug, Deserialize)]
pub struct WeekRequest {
    pub week: u32,
}

#[derive(Debug, Serialize)]
pub struct RowPoint {
    pub day: String,
    pub date: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub state: String,
    pub week: u32,
    pub range: Option<DateRange>,
    pub message: Option<String>,
    pub rows: Vec<RowPoint>,
    pub export_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn columns_are_zipped_in_order() {
        let series =
            DailySeries::from_columns(vec![date(1), date(2)], vec![1.5, -2.0], vec![8.0, 4.25])
                .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.days()[1].date, date(2));
        assert_eq!(series.days()[1].min, -2.0);
        assert_eq!(series.days()[1].max, 4.25);
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = DailySeries::from_columns(vec![date(1), date(2)], vec![1.0], vec![2.0, 3.0])
            .unwrap_err();
        assert_eq!(
            err,
            ColumnMismatch {
                dates: 2,
                mins: 1,
                maxes: 2
            }
        );
    }

    #[test]
    fn date_range_serializes_as_iso_dates() {
        let range = DateRange {
            start: date(4),
            end: date(10),
        };
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json, serde_json::json!({"start": "2024-03-04", "end": "2024-03-10"}));
    }
}
