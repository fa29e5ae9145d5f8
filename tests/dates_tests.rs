// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use wallettrack::models::Frequency;
use wallettrack::utils::{month_key, next_occurrence};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn weekly_adds_seven_days() {
    assert_eq!(
        next_occurrence(date("2025-01-01"), Some(Frequency::Weekly)),
        date("2025-01-08")
    );
    // crosses a month boundary
    assert_eq!(
        next_occurrence(date("2025-01-28"), Some(Frequency::Weekly)),
        date("2025-02-04")
    );
}

#[test]
fn monthly_adds_one_calendar_month() {
    assert_eq!(
        next_occurrence(date("2025-01-15"), Some(Frequency::Monthly)),
        date("2025-02-15")
    );
    assert_eq!(
        next_occurrence(date("2025-12-10"), Some(Frequency::Monthly)),
        date("2026-01-10")
    );
}

#[test]
fn monthly_clamps_to_end_of_short_month() {
    assert_eq!(
        next_occurrence(date("2025-01-31"), Some(Frequency::Monthly)),
        date("2025-02-28")
    );
    assert_eq!(
        next_occurrence(date("2024-01-31"), Some(Frequency::Monthly)),
        date("2024-02-29")
    );
    assert_eq!(
        next_occurrence(date("2025-03-31"), Some(Frequency::Monthly)),
        date("2025-04-30")
    );
}

#[test]
fn yearly_adds_one_year_and_clamps_leap_day() {
    assert_eq!(
        next_occurrence(date("2025-03-10"), Some(Frequency::Yearly)),
        date("2026-03-10")
    );
    assert_eq!(
        next_occurrence(date("2024-02-29"), Some(Frequency::Yearly)),
        date("2025-02-28")
    );
}

#[test]
fn no_frequency_is_identity() {
    for s in ["2025-01-31", "2024-02-29", "1999-12-31"] {
        assert_eq!(next_occurrence(date(s), None), date(s));
    }
}

#[test]
fn month_key_is_zero_padded() {
    assert_eq!(month_key(date("2025-03-05")), "2025-03");
    assert_eq!(month_key(date("2024-11-30")), "2024-11");
    assert_eq!(month_key(date("2025-01-01")), "2025-01");
}
