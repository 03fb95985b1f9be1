//! Built-in Malaysian holiday tables.
//!
//! These are literal policy data. School holiday ranges for the 2025/2026
//! sessions are published estimates and are kept exactly as listed.

/// Federal public holidays, `(YYYY-MM-DD, label)`.
pub const PUBLIC_HOLIDAYS: &[(&str, &str)] = &[
    // 2025
    ("2025-01-01", "New Year's Day"),
    ("2025-01-29", "Chinese New Year"),
    ("2025-03-31", "Hari Raya Aidilfitri"),
    ("2025-04-01", "Hari Raya Aidilfitri Holiday"),
    ("2025-05-01", "Labour Day"),
    ("2025-05-12", "Wesak Day"),
    ("2025-06-02", "Birthday of SPB Yang di Pertuan Agong"),
    ("2025-06-07", "Hari Raya Haji"),
    ("2025-06-27", "Awal Muharram"),
    ("2025-08-31", "National Day"),
    ("2025-09-05", "Maulidur Rasul"),
    ("2025-09-16", "Malaysia Day"),
    ("2025-12-25", "Christmas Day"),
    // 2026
    ("2026-01-01", "New Year's Day"),
    ("2026-02-17", "Chinese New Year"),
    ("2026-02-18", "Chinese New Year Holiday"),
    ("2026-03-21", "Hari Raya Aidilfitri"),
    ("2026-03-22", "Hari Raya Aidilfitri Holiday"),
    ("2026-05-01", "Labour Day"),
    ("2026-05-27", "Hari Raya Haji"),
    ("2026-05-31", "Wesak Day"),
    ("2026-06-01", "Birthday of SPB Yang di Pertuan Agong"),
    ("2026-06-17", "Awal Muharram"),
    ("2026-08-25", "Maulidur Rasul"),
    ("2026-08-31", "National Day"),
    ("2026-09-16", "Malaysia Day"),
    ("2026-12-25", "Christmas Day"),
];

/// School holiday ranges, `(start, end, name)`, both ends included.
pub const SCHOOL_HOLIDAY_RANGES: &[(&str, &str, &str)] = &[
    // 2025 session
    ("2025-03-29", "2025-04-06", "Cuti Penggal 1"),
    ("2025-05-29", "2025-06-09", "Cuti Pertengahan Tahun"),
    ("2025-09-13", "2025-09-21", "Cuti Penggal 2"),
    ("2025-12-20", "2026-01-11", "Cuti Akhir Persekolahan"),
    // 2026 session (estimated)
    ("2026-03-20", "2026-03-28", "Cuti Penggal 1"),
    ("2026-05-23", "2026-06-07", "Cuti Pertengahan Tahun"),
    ("2026-08-29", "2026-09-06", "Cuti Penggal 2"),
];
