//! Wire-contract tests: the JSON field names must match the endpoint
//! byte-for-byte for the local and remote bindings to stay swappable.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use skycast_core::{ListRequest, ListResult, WeatherForecast};
use uuid::Uuid;

#[test]
fn list_request_wire_shape() {
    let request = ListRequest::page(10, 25);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "transactionId": request.transaction_id,
            "startIndex": 10,
            "count": 25,
        })
    );
}

#[test]
fn list_request_round_trip_is_field_for_field_equal() {
    let request = ListRequest::page(7, 3);
    let wire = serde_json::to_string(&request).unwrap();
    let decoded: ListRequest = serde_json::from_str(&wire).unwrap();

    assert_eq!(decoded, request);
    assert_eq!(decoded.transaction_id, request.transaction_id);
    assert_eq!(decoded.start_index, 7);
    assert_eq!(decoded.count, 3);
}

#[test]
fn list_result_wire_shape_carries_null_message_on_success() {
    let forecast = WeatherForecast {
        weather_forecast_id: Uuid::nil(),
        date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        temperature_c: 21,
        summary: Some("Mild".to_string()),
    };
    let result = ListResult::new(vec![forecast.clone()], 50);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({
            "items": [{
                "weatherForecastId": "00000000-0000-0000-0000-000000000000",
                "date": forecast.date,
                "temperatureC": 21,
                "summary": "Mild",
            }],
            "totalItemCount": 50,
            "success": true,
            "message": null,
        })
    );
}

#[test]
fn list_result_decodes_from_endpoint_payload() {
    let body = r#"{
        "items": [{
            "weatherForecastId": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "date": "2024-06-01T12:00:00Z",
            "temperatureC": -5,
            "summary": null
        }],
        "totalItemCount": 50,
        "success": true,
        "message": null
    }"#;

    let result: ListResult<WeatherForecast> = serde_json::from_str(body).unwrap();
    assert!(result.success);
    assert_eq!(result.total_item_count, 50);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].temperature_c, -5);
    assert_eq!(result.items[0].summary, None);
}

#[test]
fn failure_result_round_trips() {
    let result: ListResult<WeatherForecast> = ListResult::failure("Error in Executing Query.");
    let wire = serde_json::to_string(&result).unwrap();
    let decoded: ListResult<WeatherForecast> = serde_json::from_str(&wire).unwrap();

    assert_eq!(decoded, result);
    assert!(!decoded.success);
    assert_eq!(decoded.message.as_deref(), Some("Error in Executing Query."));
}
