use chrono::format::{self, ParseResult, Parsed, StrftimeItems};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::LexicalError;
use crate::model::{DateTimeValue, TimeValue};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parse a date-and-time value: `YYYY-MM-DD[(T| )hh:mm[:ss[.fff]]][Z|±hh[:mm]]`.
///
/// A bare date is read as midnight. Without a timezone suffix the value stays
/// floating.
pub fn parse_date_time(text: &str) -> Result<DateTimeValue, LexicalError> {
    let s = text.trim();

    match s.find(['T', 't', ' ']) {
        Some(sep) => {
            let normalized = format!("{}T{}", &s[..sep], &s[sep + 1..]);
            let (datetime, rest) = parse_leading(
                &normalized,
                &DATE_TIME_FORMATS,
                NaiveDateTime::parse_and_remainder,
            )
            .map_err(|e| invalid(s, e))?;
            Ok(DateTimeValue::new(datetime, parse_offset(s, rest)?))
        }
        None => {
            let (date, rest) =
                NaiveDate::parse_and_remainder(s, DATE_FORMAT).map_err(|e| invalid(s, e))?;
            Ok(DateTimeValue::new(
                date.and_time(NaiveTime::MIN),
                parse_offset(s, rest)?,
            ))
        }
    }
}

/// Parse a time of day, either bare (`hh:mm[:ss[.fff]][offset]`) or as part of a
/// full date-and-time value whose date is then dropped.
pub fn parse_time(text: &str) -> Result<TimeValue, LexicalError> {
    let s = text.trim();
    match parse_leading(s, &TIME_FORMATS, NaiveTime::parse_and_remainder) {
        Ok((time, rest)) => Ok(TimeValue::new(time, parse_offset(s, rest)?)),
        Err(_) => parse_date_time(s).map(|dt| dt.time()),
    }
}

/// Parse a calendar date, either bare or as part of a full date-and-time value
/// whose time and offset are then dropped.
pub fn parse_date(text: &str) -> Result<NaiveDate, LexicalError> {
    parse_date_time(text).map(|dt| dt.date())
}

/// Parse the start of `s` with the full format, then the one without seconds.
/// Returns the value and the unparsed remainder; on failure the error of the
/// full format is kept.
fn parse_leading<'a, T>(
    s: &'a str,
    [full, short]: &[&str; 2],
    parse: fn(&'a str, &str) -> ParseResult<(T, &'a str)>,
) -> ParseResult<(T, &'a str)> {
    parse(s, full).or_else(|e| parse(s, short).map_err(|_| e))
}

/// The timezone suffix left after the date/time: nothing, `Z`, or `±hh[:mm]`.
fn parse_offset(input: &str, suffix: &str) -> Result<Option<FixedOffset>, LexicalError> {
    match suffix {
        "" => Ok(None),
        "Z" | "z" => Ok(FixedOffset::east_opt(0)),
        _ => {
            let mut parsed = Parsed::new();
            format::parse(&mut parsed, suffix, StrftimeItems::new("%#z"))
                .and_then(|()| parsed.to_fixed_offset())
                .map(Some)
                .map_err(|e| {
                    LexicalError::date_time(format!(
                        "invalid timezone suffix {suffix:?} in {input:?}: {e}"
                    ))
                })
        }
    }
}

fn invalid(input: &str, e: format::ParseError) -> LexicalError {
    LexicalError::date_time(format!("{input:?}: {e}"))
}
