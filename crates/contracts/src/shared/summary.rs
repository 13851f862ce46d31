//! Derived summary calculator.
//!
//! Pure functions from the current form state to the strings shown in the
//! rental info box and the return summary. Nothing here performs I/O.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use super::date_format::format_display;

pub const MS_PER_DAY: i64 = 86_400_000;

/// Ceiling of `numerator / denominator` for a positive denominator
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Whole days from `begin` to `end`, rounded up
pub fn duration_days(begin: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    ceil_div((end - begin).num_milliseconds(), MS_PER_DAY)
}

/// Days past `due`, rounded up; `None` unless `actual` is after `due`
pub fn lateness_days(due: DateTime<Utc>, actual: DateTime<Utc>) -> Option<i64> {
    (actual > due).then(|| duration_days(due, actual))
}

pub fn remaining(rented: i64, returned: i64) -> i64 {
    rented - returned
}

/// Silently lower a requested return quantity to what is still out
pub fn clamp_return_quantity(requested: i64, remaining: i64) -> i64 {
    requested.min(remaining)
}

/// Quantity pre-filled when a rental is picked in the return form
pub fn default_return_quantity(remaining: i64) -> i64 {
    remaining.min(1)
}

pub fn days_text(days: i64) -> String {
    format!("{} day(s)", days)
}

// ============================================================================
// Rental info box
// ============================================================================

/// Snapshot of the create-rental form as seen by the info box
#[derive(Debug, Clone, Default)]
pub struct RentalInfoInput {
    pub customer_name: Option<String>,
    pub item_name: Option<String>,
    pub size_label: Option<String>,
    pub customer_selected: bool,
    pub subcategory_selected: bool,
    pub size_selected: bool,
    pub quantity: String,
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalInfo {
    pub customer: String,
    pub item: String,
    pub size: String,
    pub quantity: String,
    pub period: String,
    pub duration: String,
}

/// `None` hides the info box
pub fn rental_info<Tz>(input: &RentalInfoInput, tz: &Tz) -> Option<RentalInfo>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !(input.customer_selected && input.subcategory_selected && input.size_selected) {
        return None;
    }

    let (period, duration) = match (input.begin, input.end) {
        (Some(begin), Some(end)) => {
            let days = duration_days(begin, end);
            let duration = if days > 0 {
                days_text(days)
            } else {
                "Invalid".to_string()
            };
            (
                format!(
                    "{} to {}",
                    format_display(begin, tz),
                    format_display(end, tz)
                ),
                duration,
            )
        }
        _ => ("-".to_string(), "-".to_string()),
    };

    Some(RentalInfo {
        customer: input.customer_name.clone().unwrap_or_else(|| "-".to_string()),
        item: input.item_name.clone().unwrap_or_else(|| "-".to_string()),
        size: input.size_label.clone().unwrap_or_else(|| "-".to_string()),
        quantity: input.quantity.clone(),
        period,
        duration,
    })
}

// ============================================================================
// Return summary
// ============================================================================

#[derive(Debug, Clone)]
pub struct ReturnSummaryInput {
    pub customer_name: Option<String>,
    pub quantity: String,
    pub return_date: Option<DateTime<Utc>>,
    pub rental_begin: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSummary {
    pub customer: String,
    pub quantity: String,
    pub return_date: String,
    pub days_rented: String,
    /// Present only for a late return
    pub late: Option<String>,
}

/// `None` hides the summary and keeps submission disabled
pub fn return_summary<Tz>(input: &ReturnSummaryInput, tz: &Tz) -> Option<ReturnSummary>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let return_date = input.return_date?;
    if input.quantity.trim().is_empty() {
        return None;
    }

    Some(ReturnSummary {
        customer: input
            .customer_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        quantity: format!("{} item(s)", input.quantity.trim()),
        return_date: format_display(return_date, tz),
        days_rented: days_text(duration_days(input.rental_begin, return_date)),
        late: lateness_days(input.rental_end, return_date).map(|d| format!("{} late", days_text(d))),
    })
}
