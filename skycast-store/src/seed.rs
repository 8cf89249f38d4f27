use chrono::{Duration, Utc};
use rand::Rng;
use skycast_core::WeatherForecast;

/// Summary labels the seed builder draws from.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

pub const DEFAULT_SEED_COUNT: usize = 50;

/// Build `count` synthetic forecast records: one per day starting tomorrow,
/// with uniformly random temperatures and summaries. Called explicitly at
/// startup; there is no lazily materialized singleton behind this.
pub fn seed_forecasts(count: usize) -> Vec<WeatherForecast> {
    let mut rng = rand::thread_rng();
    let today = Utc::now();

    (1..=count as i64)
        .map(|day| {
            WeatherForecast::new(
                today + Duration::days(day),
                rng.gen_range(-20..55),
                Some(SUMMARIES[rng.gen_range(0..SUMMARIES.len())].to_string()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builds_the_requested_number_of_records() {
        assert_eq!(seed_forecasts(50).len(), 50);
        assert!(seed_forecasts(0).is_empty());
    }

    #[test]
    fn records_are_in_range_with_known_summaries() {
        for forecast in seed_forecasts(100) {
            assert!((-20..55).contains(&forecast.temperature_c));
            let summary = forecast.summary.expect("seed records carry a summary");
            assert!(SUMMARIES.contains(&summary.as_str()));
        }
    }

    #[test]
    fn identities_are_unique() {
        let ids: HashSet<_> = seed_forecasts(50)
            .into_iter()
            .map(|f| f.weather_forecast_id)
            .collect();
        assert_eq!(ids.len(), 50);
    }
}
