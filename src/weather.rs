use crate::models::{ColumnMismatch, DailySeries, DateRange};
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const LATITUDE: f64 = 40.71;
pub const LONGITUDE: f64 = -74.01;
pub const TIMEZONE: &str = "America/New_York";
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("error while performing request")]
    Transport(#[from] reqwest::Error),
    #[error("response status unsuccessful, code: {code}, reason: {reason}")]
    Status { code: StatusCode, reason: String },
    #[error("error while parsing json")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    DataShape(String),
}

impl From<ColumnMismatch> for WeatherError {
    fn from(err: ColumnMismatch) -> Self {
        Self::DataShape(err.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ForecastQuery<'a> {
    latitude: f64,
    longitude: f64,
    timezone: &'a str,
    daily: &'a str,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailyColumns>,
}

#[derive(Debug, Deserialize)]
struct DailyColumns {
    time: Vec<NaiveDate>,
    temperature_2m_min: Option<Vec<Option<f64>>>,
    temperature_2m_max: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize)]
struct ErrorMessage {
    reason: String,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_daily(&self, range: DateRange) -> Result<DailySeries, WeatherError> {
        let query = ForecastQuery {
            latitude: LATITUDE,
            longitude: LONGITUDE,
            timezone: TIMEZONE,
            daily: DAILY_FIELDS,
            start_date: range.start,
            end_date: range.end,
        };
        debug!(url = %self.base_url, start = %range.start, end = %range.end, "GET forecast");

        let response = self.http.get(&self.base_url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<ErrorMessage>()
                .await
                .map(|message| message.reason)
                .unwrap_or_default();
            return Err(WeatherError::Status {
                code: status,
                reason,
            });
        }

        let body = response.text().await?;
        parse_forecast(&body)
    }
}

fn parse_forecast(body: &str) -> Result<DailySeries, WeatherError> {
    let forecast: ForecastResponse = serde_json::from_str(body)?;
    let daily = forecast
        .daily
        .ok_or_else(|| WeatherError::DataShape("missing `daily` block".to_string()))?;

    let mins = required_column(daily.temperature_2m_min, "temperature_2m_min")?;
    let maxes = required_column(daily.temperature_2m_max, "temperature_2m_max")?;
    Ok(DailySeries::from_columns(daily.time, mins, maxes)?)
}

fn required_column(
    column: Option<Vec<Option<f64>>>,
    name: &str,
) -> Result<Vec<f64>, WeatherError> {
    let values = column.ok_or_else(|| WeatherError::DataShape(format!("missing `{name}`")))?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            value.ok_or_else(|| WeatherError::DataShape(format!("`{name}` is null at index {index}")))
        })
        .collect()
}
