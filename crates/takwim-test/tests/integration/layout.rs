//! Layout behavior checked against the built-in Malaysian tables.

use chrono::NaiveDate;
use takwim_calendar::{CalendarError, CalendarLayoutEngine, HolidaySet, SchoolHolidaySet, VisualCategory};
use takwim_test::{builtin_engine, toml_engine};

#[test_log::test]
fn test_january_2026_scenario() {
    let grids = builtin_engine(true).unwrap().generate(2026).unwrap();
    let january = &grids[0];

    assert_eq!(january.month_name(), "JANUARY");
    assert_eq!(january.first_weekday_offset, 3);
    assert_eq!(january.days_in_month, 31);
    assert_eq!(january.week_count, 5);
    assert_eq!(january.cell(0, 3).unwrap().date_number(), Some(1));
    for column in 0..3 {
        assert_eq!(january.cell(0, column).unwrap().date_number(), None);
    }

    let new_year = january.cell(0, 3).unwrap();
    assert_eq!(new_year.label_text(), "New Year's Day");
    // The 2025 year-end school break runs into January 2026
    assert_eq!(
        new_year.visual_category(),
        VisualCategory::HolidayAndSchoolHoliday
    );
}

#[test_log::test]
fn test_december_2026_christmas() {
    let grids = builtin_engine(true).unwrap().generate(2026).unwrap();
    let december = &grids[11];
    assert_eq!(december.month_name(), "DECEMBER");

    let christmas = december.cell_for_day(25).unwrap();
    assert_eq!(christmas.visual_category(), VisualCategory::PublicHoliday);
    assert_eq!(christmas.holiday_label.as_deref(), Some("Christmas Day"));
    assert_eq!(december.holidays().count(), 1);
}

#[test]
fn test_wesak_day_2026_priority() {
    let grids = builtin_engine(true).unwrap().generate(2026).unwrap();
    let cell = grids[4].cell_for_day(31).unwrap();
    assert!(cell.is_weekend);
    assert_eq!(
        cell.visual_category(),
        VisualCategory::HolidayAndSchoolHoliday
    );
}

#[test]
fn test_school_holiday_only_weekend() {
    let grids = builtin_engine(true).unwrap().generate(2026).unwrap();
    // Sunday 7 June 2026 closes the mid-year break
    let cell = grids[5].cell_for_day(7).unwrap();
    assert!(cell.is_weekend);
    assert!(!cell.is_public_holiday());
    assert_eq!(cell.visual_category(), VisualCategory::SchoolHolidayWeekend);
}

#[test]
fn test_generate_twice_is_identical() {
    let engine = builtin_engine(true).unwrap();
    let first = engine.generate(2026).unwrap();
    let second = engine.generate(2026).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_year_without_holiday_data_only_has_weekends() {
    let grids = builtin_engine(true).unwrap().generate(2031).unwrap();
    for cell in grids.iter().flat_map(|grid| grid.cells.iter()) {
        let expected = if cell.is_weekend {
            VisualCategory::Weekend
        } else {
            VisualCategory::Plain
        };
        assert_eq!(cell.visual_category(), expected);
    }
}

#[test]
fn test_injected_tables_drive_categories() {
    let engine = toml_engine(
        r#"
[public]
"2040-01-02" = "Founders Day"

[[school]]
start = "2040-01-01"
end = "2040-01-08"
"#,
    )
    .unwrap();
    let january = &engine.generate(2040).unwrap()[0];

    // 2040-01-01 is a Sunday
    assert_eq!(january.first_weekday_offset, 6);
    assert_eq!(
        january.cell_for_day(1).unwrap().visual_category(),
        VisualCategory::SchoolHolidayWeekend
    );
    assert_eq!(
        january.cell_for_day(2).unwrap().visual_category(),
        VisualCategory::HolidayAndSchoolHoliday
    );
    assert_eq!(
        january.cell_for_day(3).unwrap().visual_category(),
        VisualCategory::SchoolHoliday
    );
    assert_eq!(
        january.cell_for_day(9).unwrap().visual_category(),
        VisualCategory::Plain
    );
}

#[test]
fn test_six_week_month() {
    let engine = CalendarLayoutEngine::new(HolidaySet::new(), SchoolHolidaySet::new());
    // March 2026 starts on a Sunday
    let march = engine.layout_month(2026, 3).unwrap();
    assert_eq!(march.first_weekday_offset, 6);
    assert_eq!(march.week_count, 6);
    assert_eq!(march.cells.len(), 42);
    assert_eq!(
        march.cell(5, 1).unwrap().date,
        NaiveDate::from_ymd_opt(2026, 3, 31)
    );
}

#[test]
fn test_unrepresentable_year_propagates() {
    let engine = CalendarLayoutEngine::new(HolidaySet::new(), SchoolHolidaySet::new());
    assert!(matches!(
        engine.generate(i32::MIN),
        Err(CalendarError::InvalidYear { .. })
    ));
}

#[test]
fn test_example_holiday_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../holidays.example.toml");
    let source = takwim_calendar::calendar::FileHolidays::load(path).unwrap();
    let engine = CalendarLayoutEngine::from_source(&source, true).unwrap();

    let grids = engine.generate(2027).unwrap();
    let christmas = grids[11].cell_for_day(25).unwrap();
    assert_eq!(christmas.label_text(), "Christmas Day");
    assert!(grids[5].cell_for_day(1).unwrap().is_school_holiday);
}
