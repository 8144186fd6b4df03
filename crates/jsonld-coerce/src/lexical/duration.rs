use chrono::TimeDelta;

use crate::error::LexicalError;
use crate::model::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    fn from_designator(designator: char, in_time: bool) -> Option<Self> {
        match (designator, in_time) {
            ('Y', false) => Some(Self::Years),
            ('M', false) => Some(Self::Months),
            ('W', false) => Some(Self::Weeks),
            ('D', false) => Some(Self::Days),
            ('H', true) => Some(Self::Hours),
            ('M', true) => Some(Self::Minutes),
            ('S', true) => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Length in seconds of the exact units; calendar units have none.
    fn seconds(self) -> Option<i64> {
        match self {
            Self::Years | Self::Months => None,
            Self::Weeks => Some(7 * 86_400),
            Self::Days => Some(86_400),
            Self::Hours => Some(3_600),
            Self::Minutes => Some(60),
            Self::Seconds => Some(1),
        }
    }
}

/// Parse an ISO-8601 duration such as `P1Y2M3DT4H5M6.5S`, `P2W` or `-PT30M`.
///
/// Components must appear in order and at most once. Fractions (`.` or `,`)
/// are accepted on week, day and time components but not on years or months.
pub fn parse_duration(text: &str) -> Result<Duration, LexicalError> {
    let s = text.trim();
    let invalid = || LexicalError::duration(format!("unable to parse duration string {s:?}"));

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut rest = unsigned.strip_prefix('P').ok_or_else(invalid)?;

    let mut years = 0i64;
    let mut months = 0i64;
    let mut time = TimeDelta::zero();
    let mut in_time = false;
    let mut last_unit: Option<Unit> = None;
    let mut time_components = 0usize;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('T') {
            if in_time {
                return Err(invalid());
            }
            in_time = true;
            rest = after;
            continue;
        }

        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .ok_or_else(invalid)?;
        let (number, tail) = rest.split_at(end);
        let mut chars = tail.chars();
        let designator = chars.next().ok_or_else(invalid)?;
        rest = chars.as_str();

        let unit = Unit::from_designator(designator, in_time).ok_or_else(invalid)?;
        if last_unit.is_some_and(|last| last >= unit) {
            return Err(invalid());
        }
        last_unit = Some(unit);

        let (whole, fraction) = split_number(number).ok_or_else(invalid)?;
        match unit.seconds() {
            None => {
                if fraction.is_some() {
                    return Err(LexicalError::duration(format!(
                        "fractional years or months are not supported in {s:?}"
                    )));
                }
                let value: i64 = whole.parse().map_err(|_| invalid())?;
                if unit == Unit::Years {
                    years = value;
                } else {
                    months = value;
                }
            }
            Some(unit_seconds) => {
                let component =
                    exact_component(whole, fraction, unit_seconds).ok_or_else(invalid)?;
                time = time.checked_add(&component).ok_or_else(invalid)?;
            }
        }
        if in_time {
            time_components += 1;
        }
    }

    // "P" and "PT" carry no component at all
    if last_unit.is_none() || (in_time && time_components == 0) {
        return Err(invalid());
    }

    if negative {
        Ok(Duration::new(-years, -months, -time))
    } else {
        Ok(Duration::new(years, months, time))
    }
}

/// Split `12`, `12.5` or `12,5` into whole and fractional digits.
fn split_number(number: &str) -> Option<(&str, Option<&str>)> {
    let (whole, fraction) = match number.split_once(['.', ',']) {
        Some((w, f)) => (w, Some(f)),
        None => (number, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }
    Some((whole, fraction))
}

/// `whole.fraction` units of `unit_seconds` each, truncated to nanoseconds.
fn exact_component(whole: &str, fraction: Option<&str>, unit_seconds: i64) -> Option<TimeDelta> {
    let whole: i64 = whole.parse().ok()?;
    let mut delta = TimeDelta::try_seconds(whole.checked_mul(unit_seconds)?)?;
    if let Some(fraction) = fraction {
        let digits = &fraction[..fraction.len().min(18)];
        let numerator: i128 = digits.parse().ok()?;
        let denominator = 10i128.pow(digits.len() as u32);
        let nanos = numerator * i128::from(unit_seconds) * 1_000_000_000 / denominator;
        delta = delta.checked_add(&TimeDelta::nanoseconds(i64::try_from(nanos).ok()?))?;
    }
    Some(delta)
}
