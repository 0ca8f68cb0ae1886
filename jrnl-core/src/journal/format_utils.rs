use anyhow::{Result, anyhow};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Renders `at` with a chrono format string, eg. `2025-08-15 21:04:11` for `%Y-%m-%d %H:%M:%S`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, date_format: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(date_format))
        .map_err(|_| anyhow!("invalid date format `{date_format}`"))?;
    Ok(out)
}

/// Splits user input like `travel, family ,,work` into `["travel", "family", "work"]`.
/// Order and case are kept, empty pieces are dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
