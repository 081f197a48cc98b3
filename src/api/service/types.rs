use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PrecipitationRecord {
    pub date: String,
    pub precipitation: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

#[derive(Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Minimum Temperature")]
    pub minimum: f64,

    #[serde(rename = "Avg Temperature")]
    pub average: f64,

    #[serde(rename = "Max Temperature")]
    pub maximum: f64,
}

#[derive(Serialize, Deserialize)]
pub struct SummaryStartPath {
    pub start: String,
}

#[derive(Serialize, Deserialize)]
pub struct SummaryRangePath {
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
