// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly opening hours → schema.org `OpeningHoursSpecification`.

use crate::config::{OpeningHours, Weekday};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `<H>h<MM> - <H>h<MM>`, from `0h00` up to `24h00`.
static HOURS_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:[01]?\d|2[0-3])h[0-5]\d|24h00) - (?:(?:[01]?\d|2[0-3])h[0-5]\d|24h00)$",
    )
    .expect("static regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub day_of_week: &'static str,
    pub opens: String,
    /// Absent when the value had no `" - "` separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes: Option<String>,
}

/// Build the schedule, Monday through Sunday.
///
/// Days without a value and days marked closed are left out, so a closed day
/// simply has no entry. `emergency` is never part of the schedule.
pub fn opening_hours_specification(hours: &OpeningHours) -> Vec<OpeningHoursSpecification> {
    hours
        .weekdays()
        .filter_map(|(day, value)| {
            let value = value.filter(|v| !v.is_empty())?;
            if is_closed(value) {
                return None;
            }

            let mut sides = value.split(" - ").map(to_schema_time);
            let opens = sides.next().unwrap_or_default();
            let closes = sides.next();

            Some(OpeningHoursSpecification {
                kind: "OpeningHoursSpecification",
                day_of_week: day.schema_name(),
                opens,
                closes,
            })
        })
        .collect()
}

/// Weekday values that are neither closed markers nor a well-formed range.
pub fn malformed_days(hours: &OpeningHours) -> Vec<(Weekday, &str)> {
    hours
        .weekdays()
        .filter_map(|(day, value)| {
            let value = value.filter(|v| !v.is_empty())?;
            if is_closed(value) || HOURS_RANGE.is_match(value) {
                None
            } else {
                Some((day, value))
            }
        })
        .collect()
}

/// `"Fermé"` / `"closed"`, any case.
pub fn is_closed(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower == "fermé" || lower == "closed"
}

/// `8h00` → `8:00`. Only the first `h` is rewritten; no padding.
fn to_schema_time(time: &str) -> String {
    time.replacen('h', ":", 1)
}
