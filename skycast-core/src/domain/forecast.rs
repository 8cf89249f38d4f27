use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::broker::ListableRecord;

/// A single weather-forecast record. Immutable after construction; the
/// identity is assigned once and never reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub weather_forecast_id: Uuid,
    pub date: DateTime<Utc>,
    pub temperature_c: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    pub fn new(date: DateTime<Utc>, temperature_c: i32, summary: Option<String>) -> Self {
        Self {
            weather_forecast_id: Uuid::new_v4(),
            date,
            temperature_c,
            summary,
        }
    }
}

impl ListableRecord for WeatherForecast {
    fn endpoint_name() -> &'static str {
        "weatherforecast"
    }
}
