//! Fill and font colors, as `0xRRGGBB`.

use takwim_calendar::{HeaderTone, VisualCategory};

pub const YEAR_HEADER: u32 = 0x001B_4F72;
pub const MONTH_HEADER: u32 = 0x002E_86AB;
pub const HEADER_TEXT: u32 = 0x00FF_FFFF;
pub const HOLIDAY_TEXT: u32 = 0x00C0_392B;
pub const BORDER: u32 = 0x0000_0000;

pub const ACCENT_DARK: u32 = 0x005B_2C6F;
pub const ACCENT_LIGHT: u32 = 0x00AF_7AC5;
pub const WEEKEND_HEADER: u32 = 0x0080_8080;

pub const PLAIN_CELL: u32 = 0x00FF_FFFF;
pub const WEEKEND_CELL: u32 = 0x00D3_D3D3;
pub const HOLIDAY_CELL: u32 = 0x00FA_DBD8;
pub const SCHOOL_HOLIDAY_CELL: u32 = 0x00D6_EAF8;
pub const SCHOOL_HOLIDAY_WEEKEND_CELL: u32 = 0x00AE_D6F1;
pub const HOLIDAY_AND_SCHOOL_HOLIDAY_CELL: u32 = 0x00F5_B7B1;

#[must_use]
pub const fn header_fill(tone: HeaderTone) -> u32 {
    match tone {
        HeaderTone::AccentDark => ACCENT_DARK,
        HeaderTone::AccentLight => ACCENT_LIGHT,
        HeaderTone::Weekend => WEEKEND_HEADER,
    }
}

#[must_use]
pub const fn cell_fill(category: VisualCategory) -> u32 {
    match category {
        VisualCategory::HolidayAndSchoolHoliday => HOLIDAY_AND_SCHOOL_HOLIDAY_CELL,
        VisualCategory::PublicHoliday => HOLIDAY_CELL,
        VisualCategory::SchoolHolidayWeekend => SCHOOL_HOLIDAY_WEEKEND_CELL,
        VisualCategory::SchoolHoliday => SCHOOL_HOLIDAY_CELL,
        VisualCategory::Weekend => WEEKEND_CELL,
        VisualCategory::Plain => PLAIN_CELL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_distinct_fill() {
        let fills: Vec<u32> = VisualCategory::ALL.iter().map(|c| cell_fill(*c)).collect();
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_header_fill_follows_column_tone() {
        assert_eq!(header_fill(HeaderTone::for_column(0)), ACCENT_DARK);
        assert_eq!(header_fill(HeaderTone::for_column(1)), ACCENT_LIGHT);
        assert_eq!(header_fill(HeaderTone::for_column(6)), WEEKEND_HEADER);
    }
}
