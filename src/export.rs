use crate::models::DailySeries;
use crate::table::{us_date, weekday_name};
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const EXPORT_FILE_NAME: &str = "temperature_data.xml";
pub const EXPORT_CONTENT_TYPE: &str = "text/xml;charset=utf-8";
/// Label written next to every date value; the value itself is en-US formatted.
pub const DATE_FORMAT_LABEL: &str = "YYYY-MM-DD";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize temperature document: {0}")]
    Serialize(String),
    #[error("failed to write export file")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TemperatureDocument {
    #[serde(rename = "temperature", default)]
    pub temperatures: Vec<TemperatureElement>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TemperatureElement {
    pub day: String,
    pub date: DateElement,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DateElement {
    #[serde(rename = "dateValue")]
    pub date_value: String,
    #[serde(rename = "dateFormat")]
    pub date_format: String,
}

impl From<&DailySeries> for TemperatureDocument {
    fn from(series: &DailySeries) -> Self {
        let temperatures = series
            .days()
            .iter()
            .map(|day| TemperatureElement {
                day: weekday_name(day.date),
                date: DateElement {
                    date_value: us_date(day.date),
                    date_format: DATE_FORMAT_LABEL.to_string(),
                },
                min: day.min,
                max: day.max,
            })
            .collect();
        Self { temperatures }
    }
}

pub fn serialize(series: &DailySeries) -> Result<String, ExportError> {
    let document = TemperatureDocument::from(series);
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some("temperatures"))
        .map_err(|err| ExportError::Serialize(err.to_string()))?;
    serializer.indent('\t', 1);
    document
        .serialize(serializer)
        .map_err(|err| ExportError::Serialize(err.to_string()))?;

    Ok(format!("{XML_DECLARATION}{body}"))
}

/// Browser save-as response for a serialized document.
pub struct XmlDownload(pub String);

impl IntoResponse for XmlDownload {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                ),
            ],
            self.0,
        )
            .into_response()
    }
}
