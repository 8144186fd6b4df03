use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// XSD namespace constants.
pub mod xsd {
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Conventional compact-IRI prefix bound to [`NAMESPACE`] in JSON-LD contexts.
    pub const PREFIX: &str = "xsd:";

    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
    pub const BASE64_BINARY: &str = "http://www.w3.org/2001/XMLSchema#base64Binary";
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// The XML Schema primitive datatypes this crate knows how to coerce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Datatype {
    String,
    Boolean,
    Decimal,
    Float,
    Double,
    Duration,
    DateTime,
    Time,
    Date,
    HexBinary,
    Base64Binary,
    AnyUri,
}

impl Datatype {
    pub const ALL: [Datatype; 12] = [
        Self::String,
        Self::Boolean,
        Self::Decimal,
        Self::Float,
        Self::Double,
        Self::Duration,
        Self::DateTime,
        Self::Time,
        Self::Date,
        Self::HexBinary,
        Self::Base64Binary,
        Self::AnyUri,
    ];

    /// Look up a datatype by its full IRI.
    pub fn from_iri(iri: &str) -> Option<Self> {
        iri.strip_prefix(xsd::NAMESPACE)
            .and_then(Self::from_local_name)
    }

    /// Look up a datatype by the fragment of its IRI (`dateTime`, `anyURI`, ...).
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| dt.local_name() == name)
    }

    pub fn iri(self) -> &'static str {
        match self {
            Self::String => xsd::STRING,
            Self::Boolean => xsd::BOOLEAN,
            Self::Decimal => xsd::DECIMAL,
            Self::Float => xsd::FLOAT,
            Self::Double => xsd::DOUBLE,
            Self::Duration => xsd::DURATION,
            Self::DateTime => xsd::DATE_TIME,
            Self::Time => xsd::TIME,
            Self::Date => xsd::DATE,
            Self::HexBinary => xsd::HEX_BINARY,
            Self::Base64Binary => xsd::BASE64_BINARY,
            Self::AnyUri => xsd::ANY_URI,
        }
    }

    pub fn local_name(self) -> &'static str {
        &self.iri()[xsd::NAMESPACE.len()..]
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri())
    }
}

/// A literal together with its (optional) datatype IRI, borrowed from a
/// JSON-LD value object for the duration of a single coercion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaggedValue<'a> {
    pub datatype: Option<&'a str>,
    pub literal: &'a Value,
}

static NULL: Value = Value::Null;

impl<'a> TaggedValue<'a> {
    pub fn new(datatype: Option<&'a str>, literal: &'a Value) -> Self {
        Self { datatype, literal }
    }

    pub fn untyped(literal: &'a Value) -> Self {
        Self {
            datatype: None,
            literal,
        }
    }

    /// Split a JSON value into datatype and literal.
    ///
    /// Only an object carrying `@type` is treated as typed; its `@value` becomes
    /// the literal (`null` when missing). Everything else is an untyped literal.
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Object(obj) if obj.contains_key("@type") => Self {
                datatype: obj.get("@type").and_then(Value::as_str),
                literal: obj.get("@value").unwrap_or(&NULL),
            },
            _ => Self::untyped(value),
        }
    }

    /// The literal's lexical form: strings as-is, numbers and booleans in their
    /// JSON rendering. `null`, arrays and objects have none.
    pub fn lexical_form(&self) -> Option<Cow<'a, str>> {
        match self.literal {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            _ => None,
        }
    }
}

/// An ISO-8601 / XSD duration.
///
/// Calendar components (`years`, `months`) are kept apart from the exact part
/// because their length depends on the date they are applied to. Days, weeks
/// and time-of-day components all fold into `time`. A negative duration has
/// every component non-positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub time: TimeDelta,
}

impl Duration {
    pub fn new(years: i64, months: i64, time: TimeDelta) -> Self {
        Self {
            years,
            months,
            time,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.time < TimeDelta::zero()
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.time.is_zero()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        let time = self.time.abs();
        let secs = time.num_seconds();
        let nanos = time.subsec_nanos().unsigned_abs();
        let (days, rem) = (secs / 86_400, secs % 86_400);
        let (hours, minutes, seconds) = (rem / 3_600, rem % 3_600 / 60, rem % 60);

        if self.years != 0 {
            write!(f, "{}Y", self.years.unsigned_abs())?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months.unsigned_abs())?;
        }
        if days != 0 {
            write!(f, "{days}D")?;
        }
        if hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
            if self.is_zero() {
                f.write_str("T0S")?;
            }
            return Ok(());
        }

        f.write_str("T")?;
        if hours != 0 {
            write!(f, "{hours}H")?;
        }
        if minutes != 0 {
            write!(f, "{minutes}M")?;
        }
        if seconds != 0 || nanos != 0 {
            write!(f, "{seconds}")?;
            write_fraction(f, nanos)?;
            f.write_str("S")?;
        }
        Ok(())
    }
}

/// A date and time of day with an optional timezone offset.
///
/// Values written without an offset stay floating (`offset == None`) rather than
/// being pinned to UTC or the local zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateTimeValue {
    pub datetime: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl DateTimeValue {
    pub fn new(datetime: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { datetime, offset }
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn time(&self) -> TimeValue {
        TimeValue::new(self.datetime.time(), self.offset)
    }

    /// The zoned instant, when an offset is known.
    pub fn to_fixed_offset(&self) -> Option<DateTime<FixedOffset>> {
        self.offset
            .and_then(|offset| self.datetime.and_local_timezone(offset).single())
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use chrono::Timelike;

        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S"))?;
        write_fraction(f, self.datetime.nanosecond())?;
        write_offset(f, self.offset)
    }
}

/// A time of day with an optional timezone offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeValue {
    pub time: NaiveTime,
    pub offset: Option<FixedOffset>,
}

impl TimeValue {
    pub fn new(time: NaiveTime, offset: Option<FixedOffset>) -> Self {
        Self { time, offset }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use chrono::Timelike;

        write!(f, "{}", self.time.format("%H:%M:%S"))?;
        write_fraction(f, self.time.nanosecond())?;
        write_offset(f, self.offset)
    }
}

/// Syntactic components of a URI reference. Absent components are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UriParts {
    pub scheme: String,
    /// `userinfo@host:port`, without the leading `//`.
    pub authority: String,
    pub path: String,
    /// Parameters of the last path segment (after `;`).
    pub params: String,
    pub query: String,
    pub fragment: String,
    /// Whether the reference carried a `//` authority marker, even an empty one.
    pub has_authority: bool,
}

impl UriParts {
    /// Host portion of the authority, without userinfo, port or IPv6 brackets.
    pub fn host(&self) -> &str {
        let host_port = self
            .authority
            .rsplit_once('@')
            .map_or(self.authority.as_str(), |(_, hp)| hp);
        if let Some(rest) = host_port.strip_prefix('[') {
            return rest.split_once(']').map_or(rest, |(h, _)| h);
        }
        host_port.split_once(':').map_or(host_port, |(h, _)| h)
    }

    /// Port from the authority, if present and numeric.
    pub fn port(&self) -> Option<u16> {
        let host_port = self
            .authority
            .rsplit_once('@')
            .map_or(self.authority.as_str(), |(_, hp)| hp);
        let after_host = match host_port.strip_prefix('[') {
            Some(rest) => rest.split_once(']').map(|(_, p)| p)?,
            None => host_port,
        };
        after_host.split_once(':')?.1.parse().ok()
    }

    pub fn is_absolute(&self) -> bool {
        !self.scheme.is_empty()
    }

    /// Validate and normalise through the WHATWG URL parser. Only absolute URIs
    /// can be converted.
    pub fn to_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.to_string())
    }
}

impl fmt::Display for UriParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if self.has_authority {
            write!(f, "//{}", self.authority)?;
        }
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            write!(f, ";{}", self.params)?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// The native value a literal was coerced into.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    /// No (known) datatype: the literal, unchanged.
    Untyped(Value),
    String(String),
    Boolean(bool),
    /// Exact, with every digit of the literal kept.
    Decimal(BigDecimal),
    /// `xsd:float` and `xsd:double` both land here.
    Double(f64),
    Duration(Duration),
    DateTime(DateTimeValue),
    Date(NaiveDate),
    Time(TimeValue),
    Bytes(Vec<u8>),
    Uri(UriParts),
}

impl NativeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Untyped(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTimeValue> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&TimeValue> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_uri(&self) -> Option<&UriParts> {
        match self {
            Self::Uri(u) => Some(u),
            _ => None,
        }
    }

    /// Render the value back to an XSD lexical form.
    ///
    /// Bytes render as upper-case hex regardless of the datatype they came from.
    pub fn to_lexical(&self) -> String {
        match self {
            Self::Untyped(Value::String(s)) | Self::String(s) => s.clone(),
            Self::Untyped(v) => v.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Decimal(d) => d.normalized().to_string(),
            Self::Double(v) => format_double(*v),
            Self::Duration(d) => d.to_string(),
            Self::DateTime(dt) => dt.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Time(t) => t.to_string(),
            Self::Bytes(b) => hex::encode_upper(b),
            Self::Uri(u) => u.to_string(),
        }
    }
}

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Untyped(v) => v.serialize(serializer),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Double(v) if v.is_finite() => serializer.serialize_f64(*v),
            _ => serializer.serialize_str(&self.to_lexical()),
        }
    }
}

fn format_double(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        (if v > 0.0 { "INF" } else { "-INF" }).to_string()
    } else {
        v.to_string()
    }
}

fn write_fraction(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }
    let digits = format!("{nanos:09}");
    write!(f, ".{}", digits.trim_end_matches('0'))
}

fn write_offset(f: &mut fmt::Formatter<'_>, offset: Option<FixedOffset>) -> fmt::Result {
    let Some(offset) = offset else {
        return Ok(());
    };
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return f.write_str("Z");
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.unsigned_abs();
    write!(f, "{sign}{:02}:{:02}", secs / 3_600, secs % 3_600 / 60)
}
