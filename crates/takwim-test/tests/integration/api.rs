//! JSON API endpoints.

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::Value;

use takwim_app::app::api::{API_ROUTE_PREFIX, APP_ROUTE_PREFIX, HOLIDAYS_ROUTE_PREFIX};
use takwim_test::{builtin_engine, test_router, test_settings, url};

#[test_log::test(tokio::test)]
async fn test_healthcheck() {
    let router = test_router(test_settings(), builtin_engine(true).unwrap());

    let mut res = TestClient::get(url(&format!("{APP_ROUTE_PREFIX}/healthcheck")))
        .send(router)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(res.take_string().await.unwrap(), "OK");
}

#[test_log::test(tokio::test)]
async fn test_holidays_for_2026() {
    let router = test_router(test_settings(), builtin_engine(true).unwrap());

    let mut res = TestClient::get(url(&format!("{HOLIDAYS_ROUTE_PREFIX}/2026")))
        .send(router)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    let body: Value = res.take_json().await.unwrap();
    assert_eq!(body["year"], 2026);

    let holidays = body["public_holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 14);
    assert_eq!(holidays[0]["date"], "2026-01-01");
    assert_eq!(holidays[0]["weekday"], "THU");
    assert_eq!(holidays[0]["label"], "New Year's Day");
    assert_eq!(holidays[13]["date"], "2026-12-25");

    // 11 January days of the 2025 year-end break, then 9 + 16 + 9
    assert_eq!(body["school_holiday_days"], 45);
}

#[test_log::test(tokio::test)]
async fn test_holidays_plain_variant_has_no_school_days() {
    let router = test_router(test_settings(), builtin_engine(false).unwrap());

    let mut res = TestClient::get(url(&format!("{HOLIDAYS_ROUTE_PREFIX}/2026")))
        .send(router)
        .await;

    let body: Value = res.take_json().await.unwrap();
    assert_eq!(body["school_holiday_days"], 0);
}

#[test_log::test(tokio::test)]
async fn test_holidays_rejects_out_of_range_year() {
    for year in ["1999", "next"] {
        let router = test_router(test_settings(), builtin_engine(true).unwrap());
        let path = format!("{HOLIDAYS_ROUTE_PREFIX}/{year}");

        let mut res = TestClient::get(url(&path)).send(router).await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{path}");
        let body: Value = res.take_json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("Validation error"));
    }
}

#[test_log::test(tokio::test)]
async fn test_unknown_api_route_is_not_found() {
    let router = test_router(test_settings(), builtin_engine(true).unwrap());

    let res = TestClient::get(url(&format!("{API_ROUTE_PREFIX}/calendars")))
        .send(router)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
}
