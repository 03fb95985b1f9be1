//! Cell styling rules: the visual category ladder and day-header tones.

/// The single styling bucket a calendar cell resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualCategory {
    HolidayAndSchoolHoliday,
    PublicHoliday,
    SchoolHolidayWeekend,
    SchoolHoliday,
    Weekend,
    Plain,
}

impl VisualCategory {
    /// Every category, highest priority first.
    pub const ALL: [Self; 6] = [
        Self::HolidayAndSchoolHoliday,
        Self::PublicHoliday,
        Self::SchoolHolidayWeekend,
        Self::SchoolHoliday,
        Self::Weekend,
        Self::Plain,
    ];

    /// ## Summary
    /// Resolves a cell's flags to a category. A public holiday outranks a school
    /// holiday, which outranks a weekend.
    #[must_use]
    pub const fn resolve(is_public_holiday: bool, is_school_holiday: bool, is_weekend: bool) -> Self {
        match (is_public_holiday, is_school_holiday, is_weekend) {
            (true, true, _) => Self::HolidayAndSchoolHoliday,
            (true, false, _) => Self::PublicHoliday,
            (false, true, true) => Self::SchoolHolidayWeekend,
            (false, true, false) => Self::SchoolHoliday,
            (false, false, true) => Self::Weekend,
            (false, false, false) => Self::Plain,
        }
    }

    #[must_use]
    pub const fn is_public_holiday(self) -> bool {
        matches!(self, Self::HolidayAndSchoolHoliday | Self::PublicHoliday)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HolidayAndSchoolHoliday => "holiday_and_school_holiday",
            Self::PublicHoliday => "public_holiday",
            Self::SchoolHolidayWeekend => "school_holiday_weekend",
            Self::SchoolHoliday => "school_holiday",
            Self::Weekend => "weekend",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for VisualCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background tone of a day-of-week header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderTone {
    AccentDark,
    AccentLight,
    Weekend,
}

impl HeaderTone {
    /// ## Summary
    /// Returns the tone for a weekday column (0 = Monday). Weekday columns
    /// alternate dark and light starting with dark; Saturday and Sunday use the
    /// weekend tone.
    #[must_use]
    pub const fn for_column(column: u32) -> Self {
        if is_weekend_column(column) {
            Self::Weekend
        } else if column % 2 == 0 {
            Self::AccentDark
        } else {
            Self::AccentLight
        }
    }
}

/// ## Summary
/// Returns `true` for the Saturday and Sunday columns.
#[must_use]
pub const fn is_weekend_column(column: u32) -> bool {
    column >= 5
}
