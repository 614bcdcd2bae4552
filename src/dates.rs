// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LedgerError, Result};

static MONTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("static regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex"));

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Today in the server-local calendar. The server locale is the single
/// authoritative calendar for date defaults and the trend window; client
/// locales are never consulted.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

/// Extract a `YYYY-MM` month from either a month string or a full date.
/// Any other shape yields `None` so the caller can fall back to the
/// current month.
pub fn month_of(value: &str) -> Option<String> {
    if MONTH_RE.is_match(value) {
        return Some(value.to_string());
    }
    if DATE_RE.is_match(value) {
        return Some(value[..7].to_string());
    }
    None
}

/// Parse an attribution date, strictly `YYYY-MM-DD`. The shape is checked
/// first because chrono's `%m`/`%d` accept unpadded numbers.
pub fn parse_entry_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    if !DATE_RE.is_match(trimmed) {
        return Err(LedgerError::invalid(format!(
            "date must be YYYY-MM-DD, got '{}'",
            s
        )));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| LedgerError::invalid(format!("date must be YYYY-MM-DD, got '{}'", s)))
}

/// Add `delta` whole months to a `YYYY-MM` month, rolling the year in
/// either direction.
pub fn shift_month(month: &str, delta: i32) -> Result<String> {
    let (year, month_no) = split_month(month)?;
    let total = year * 12 + (month_no as i32 - 1) + delta;
    Ok(format!(
        "{:04}-{:02}",
        total.div_euclid(12),
        total.rem_euclid(12) + 1
    ))
}

/// Human label for a `YYYY-MM` month, e.g. "March 2024".
pub fn month_label(month: &str) -> Result<String> {
    let (year, month_no) = split_month(month)?;
    Ok(format!("{} {}", MONTH_NAMES[(month_no - 1) as usize], year))
}

fn split_month(month: &str) -> Result<(i32, u32)> {
    let invalid = || LedgerError::invalid(format!("Invalid month '{}', expected YYYY-MM", month));
    if !MONTH_RE.is_match(month) {
        return Err(invalid());
    }
    let (y, m) = month.split_at(4);
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month_no: u32 = m[1..].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month_no) {
        return Err(invalid());
    }
    Ok((year, month_no))
}
