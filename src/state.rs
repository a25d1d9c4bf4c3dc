use crate::config::Config;
use crate::models::{DailySeries, DateRange, RowPoint, ViewResponse};
use crate::table::{render_table, us_date, weekday_name};
use crate::weather::WeatherClient;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

pub const NO_DATA_MESSAGE: &str = "No data available for the selected week.";
pub const ERROR_MARKUP: &str = "<div class='error'><p>An error occurred.</p></div>";

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Idle,
    NoData { range: DateRange },
    Failed,
    Results { range: DateRange, series: DailySeries },
}

/// What the page currently shows and which series the export action reads.
///
/// Every transition builds a new value; `generation` changes only when the
/// week selection changes, so a fetch started under an older selection can
/// be recognised and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub week: u32,
    pub generation: u64,
    pub output: Output,
}

impl ViewState {
    pub fn new(week: u32) -> Self {
        Self {
            week,
            generation: 0,
            output: Output::Idle,
        }
    }

    pub fn select_week(&self, week: u32) -> Self {
        Self {
            week,
            generation: self.generation.wrapping_add(1),
            output: Output::Idle,
        }
    }

    pub fn with_output(&self, output: Output) -> Self {
        Self {
            week: self.week,
            generation: self.generation,
            output,
        }
    }

    pub fn loaded(&self, range: DateRange, series: DailySeries) -> Self {
        if series.is_empty() {
            self.with_output(Output::NoData { range })
        } else {
            self.with_output(Output::Results { range, series })
        }
    }

    pub fn failed(&self) -> Self {
        self.with_output(Output::Failed)
    }

    pub fn display_html(&self) -> String {
        match &self.output {
            Output::Idle => String::new(),
            Output::NoData { .. } => NO_DATA_MESSAGE.to_string(),
            Output::Failed => ERROR_MARKUP.to_string(),
            Output::Results { series, .. } => render_table(series),
        }
    }

    pub fn export_payload(&self) -> Option<(DateRange, &DailySeries)> {
        match &self.output {
            Output::Results { range, series } => Some((*range, series)),
            _ => None,
        }
    }

    pub fn to_response(&self) -> ViewResponse {
        let (state, range, message) = match &self.output {
            Output::Idle => ("idle", None, None),
            Output::NoData { range } => ("no_data", Some(*range), Some(NO_DATA_MESSAGE)),
            Output::Failed => ("failed", None, Some("An error occurred.")),
            Output::Results { range, .. } => ("results", Some(*range), None),
        };
        let rows = self
            .export_payload()
            .map(|(_, series)| {
                series
                    .days()
                    .iter()
                    .map(|day| RowPoint {
                        day: weekday_name(day.date),
                        date: us_date(day.date),
                        min: day.min,
                        max: day.max,
                    })
                    .collect()
            })
            .unwrap_or_default();

        ViewResponse {
            state: state.to_string(),
            week: self.week,
            range,
            message: message.map(str::to_string),
            rows,
            export_available: self.export_payload().is_some(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub export_dir: Option<PathBuf>,
    pub weather: WeatherClient,
    pub view: Arc<Mutex<ViewState>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            export_dir: config.export_dir.clone(),
            weather: WeatherClient::new(config.weather_url.clone()),
            view: Arc::new(Mutex::new(ViewState::new(1))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        }
    }

    fn series() -> DailySeries {
        let dates = range().start.iter_days().take(2).collect();
        DailySeries::from_columns(dates, vec![1.0, 2.0], vec![5.0, 6.5]).unwrap()
    }

    #[test]
    fn starts_idle_without_export() {
        let view = ViewState::new(1);
        assert_eq!(view.display_html(), "");
        assert!(view.export_payload().is_none());
    }

    #[test]
    fn non_empty_fetch_arms_export() {
        let view = ViewState::new(1).loaded(range(), series());
        assert!(view.display_html().starts_with("<table>"));
        let (armed_range, payload) = view.export_payload().unwrap();
        assert_eq!(armed_range, range());
        assert_eq!(payload.len(), 2);
        assert!(view.to_response().export_available);
        assert_eq!(view.to_response().rows.len(), 2);
    }

    #[test]
    fn empty_fetch_shows_message_only() {
        let view = ViewState::new(2).loaded(range(), DailySeries::default());
        assert_eq!(view.display_html(), "No data available for the selected week.");
        assert!(view.export_payload().is_none());
        assert_eq!(view.to_response().state, "no_data");
    }

    #[test]
    fn failure_shows_error_and_drops_export() {
        let view = ViewState::new(1).loaded(range(), series()).failed();
        assert!(view.display_html().contains("class='error'"));
        assert!(view.export_payload().is_none());
    }

    #[test]
    fn selecting_week_clears_table_and_export() {
        let loaded = ViewState::new(1).loaded(range(), series());
        let selected = loaded.select_week(3);
        assert_eq!(selected.week, 3);
        assert_eq!(selected.output, Output::Idle);
        assert_eq!(selected.display_html(), "");
        assert!(selected.export_payload().is_none());
        assert_ne!(selected.generation, loaded.generation);
    }

    #[test]
    fn new_results_replace_previous_export() {
        let first = ViewState::new(1).loaded(range(), series());
        let other = DailySeries::from_columns(vec![range().end], vec![-4.0], vec![0.5]).unwrap();
        let second = first.loaded(range(), other.clone());
        assert_eq!(second.export_payload().unwrap().1, &other);
        assert_eq!(second.generation, first.generation);
    }
}
