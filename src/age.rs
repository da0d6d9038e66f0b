//! Relative age expressions such as `1y2m3d`.
//!
//! An expression is an optional `<n>y`, an optional `<n>m` and an optional
//! `<n>d`, in exactly that order. The cutoff it describes is "now" minus the
//! years, then the months, then the days.

use crate::error::{Result, SweepError};
use chrono::{DateTime, Days, Months, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static AGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)y)?(?:(\d+)m)?(?:(\d+)d)?$").expect("Invalid age expression regex")
});

/// A parsed age expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeSpec {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgeSpec {
    /// Parse an age expression.
    ///
    /// Surrounding whitespace is ignored. The empty string parses to the
    /// all-zero spec, which is a cutoff of "now", not "no filter"; callers
    /// that want no filter should hold an `Option<AgeSpec>` of `None`.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::MalformedAgeExpression` when the expression does
    /// not follow the grammar or a component does not fit in a `u32`.
    pub fn parse(expr: &str) -> Result<Self> {
        let trimmed = expr.trim();
        let caps = AGE_REGEX.captures(trimmed).ok_or_else(|| {
            malformed(
                expr,
                "expected <years>y<months>m<days>d, each part optional and in that order",
            )
        })?;

        let component = |idx: usize| -> Result<u32> {
            match caps.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| malformed(expr, "value out of range")),
                None => Ok(0),
            }
        };

        Ok(Self {
            years: component(1)?,
            months: component(2)?,
            days: component(3)?,
        })
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Compute the cutoff instant relative to `now`.
    ///
    /// Years are subtracted first, then months, then days. Month arithmetic
    /// clamps to the last day of the target month (March 31 minus one month
    /// is February 28 or 29).
    ///
    /// # Errors
    ///
    /// Returns `SweepError::MalformedAgeExpression` if the result falls
    /// outside the representable date range.
    pub fn cutoff_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let out_of_range =
            || malformed(&self.to_string(), "cutoff is out of the supported date range");

        let year_months = self.years.checked_mul(12).ok_or_else(out_of_range)?;
        now.checked_sub_months(Months::new(year_months))
            .and_then(|t| t.checked_sub_months(Months::new(self.months)))
            .and_then(|t| t.checked_sub_days(Days::new(u64::from(self.days))))
            .ok_or_else(out_of_range)
    }
}

impl fmt::Display for AgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0d");
        }
        if self.years > 0 {
            write!(f, "{}y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}m", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}d", self.days)?;
        }
        Ok(())
    }
}

fn malformed(expr: &str, reason: &str) -> SweepError {
    SweepError::MalformedAgeExpression {
        expr: expr.to_string(),
        reason: reason.to_string(),
    }
}
