//! Form page and workbook download through the full router.

use salvo::http::StatusCode;
use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::test::{ResponseExt, TestClient};

use takwim_app::app::page::build_workbook;
use takwim_test::{builtin_engine, test_router, test_settings, url};

#[test_log::test(tokio::test)]
async fn test_form_page_is_served() {
    let router = test_router(test_settings(), builtin_engine(true).unwrap());

    let mut res = TestClient::get(url("/")).send(router).await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = res.take_string().await.unwrap();
    assert!(body.contains(r#"<select name="year" id="year">"#));
    assert!(body.contains(r#"value="2026" selected"#));
}

#[test_log::test(tokio::test)]
async fn test_download_every_bound_year() {
    for year in [2020, 2100] {
        let router = test_router(test_settings(), builtin_engine(true).unwrap());

        let mut res = TestClient::post(url("/"))
            .raw_form(format!("year={year}"))
            .send(router)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "{year}");
        let disposition = res
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert_eq!(
            disposition,
            format!("attachment; filename=\"Calendar_{year}.xlsx\"")
        );
        let body = res.take_bytes(None).await.unwrap();
        assert!(body.starts_with(b"PK"));
    }
}

#[test_log::test(tokio::test)]
async fn test_narrowed_bound_is_enforced() {
    let mut settings = test_settings();
    settings.calendar.max_year = 2030;
    let router = test_router(settings, builtin_engine(true).unwrap());

    let mut res = TestClient::post(url("/"))
        .raw_form("year=2031")
        .send(router)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(res.take_string().await.unwrap(), "Invalid year selected");
}

#[test_log::test]
fn test_build_workbook_without_http() {
    let engine = builtin_engine(false).unwrap();
    let bytes = build_workbook(&engine, 2025).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
