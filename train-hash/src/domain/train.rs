//! Train schedule record.

use std::fmt;

use super::error::ParseError;
use super::split::split_fields;

/// One parsed schedule line.
///
/// A line holds five space-separated fields in the order
/// `number date type time duration`. The text of every field is kept
/// verbatim, and four numeric surrogates are derived once at parse time:
///
/// - `number_val`: the number field as an integer
/// - `date_val`: `DD.MM.YYYY` folded into `YYYYMMDD`
/// - `time_val` / `on_road_val`: the three `HH:MM:SS` components
///   concatenated as text and read as one integer, so `"08:30:00"`
///   becomes `83000`
///
/// Equality compares the five text fields only.
///
/// # Examples
///
/// ```
/// use train_hash::domain::Train;
///
/// let train = Train::parse("101 15.03.2024 Express 08:30:00 02:15:00").unwrap();
/// assert_eq!(train.number(), "101");
/// assert_eq!(train.date_val(), 20240315);
/// assert_eq!(train.time_val(), 83000);
/// assert_eq!(train.on_road_val(), 21500);
///
/// // Four fields is not a schedule line
/// assert!(Train::parse("101 15.03.2024 Express 08:30:00").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Train {
    number: String,
    date: String,
    kind: String,
    time: String,
    on_road: String,

    number_val: u32,
    date_val: u32,
    time_val: u32,
    on_road_val: u32,
}

impl Train {
    /// Parse a single schedule line.
    ///
    /// The line must split on single spaces into exactly five fields, and
    /// every numeric component must be plain ASCII digits.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields = split_fields(line, ' ');
        let [number, date, kind, time, on_road] = fields[..] else {
            return Err(ParseError::FieldCount(fields.len()));
        };

        let number_val = parse_number("number", number)?;
        let date_val = parse_date(date)?;
        let time_val = parse_clock("time", time)?;
        let on_road_val = parse_clock("duration", on_road)?;

        Ok(Self {
            number: number.to_string(),
            date: date.to_string(),
            kind: kind.to_string(),
            time: time.to_string(),
            on_road: on_road.to_string(),
            number_val,
            date_val,
            time_val,
            on_road_val,
        })
    }

    /// Train number as written.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Date as written (`DD.MM.YYYY`).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Train type as written.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Departure time as written (`HH:MM:SS`).
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Time on the road as written (`HH:MM:SS`).
    pub fn on_road(&self) -> &str {
        &self.on_road
    }

    /// Train number as an integer.
    pub fn number_val(&self) -> u32 {
        self.number_val
    }

    /// Date folded into `YYYYMMDD`.
    pub fn date_val(&self) -> u32 {
        self.date_val
    }

    /// Departure time digits read as one integer.
    pub fn time_val(&self) -> u32 {
        self.time_val
    }

    /// Time on the road digits read as one integer.
    pub fn on_road_val(&self) -> u32 {
        self.on_road_val
    }
}

impl PartialEq for Train {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.time == other.time
            && self.number == other.number
            && self.on_road == other.on_road
            && self.kind == other.kind
    }
}

impl Eq for Train {}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.number, self.date, self.kind, self.time, self.on_road
        )
    }
}

/// Parse a run of ASCII digits into a u32.
///
/// Signs, spaces and empty strings are rejected; `str::parse` alone would
/// accept a leading `+`.
fn parse_number(field: &'static str, s: &str) -> Result<u32, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber {
            field,
            value: s.to_string(),
        });
    }
    s.parse().map_err(|_| ParseError::OutOfRange {
        field,
        value: s.to_string(),
    })
}

/// Split `s` on `delimiter` into exactly three components.
fn three_components<'a>(
    field: &'static str,
    s: &'a str,
    delimiter: char,
) -> Result<[&'a str; 3], ParseError> {
    let parts = split_fields(s, delimiter);
    match parts[..] {
        [a, b, c] => Ok([a, b, c]),
        _ => Err(ParseError::ComponentCount {
            field,
            delimiter,
            found: parts.len(),
        }),
    }
}

/// `DD.MM.YYYY` -> `10000 * year + 100 * month + day`.
fn parse_date(s: &str) -> Result<u32, ParseError> {
    let [day, month, year] = three_components("date", s, '.')?;
    let day = parse_number("date", day)?;
    let month = parse_number("date", month)?;
    let year = parse_number("date", year)?;

    year.checked_mul(10_000)
        .and_then(|v| v.checked_add(month.checked_mul(100)?))
        .and_then(|v| v.checked_add(day))
        .ok_or_else(|| ParseError::OutOfRange {
            field: "date",
            value: s.to_string(),
        })
}

/// `HH:MM:SS` -> the three components' digits concatenated and read as one
/// integer. Leading zeros of the first component vanish; the others keep
/// whatever padding the text had.
fn parse_clock(field: &'static str, s: &str) -> Result<u32, ParseError> {
    let components = three_components(field, s, ':')?;
    for component in components {
        // Checked individually so "1:+2:3" is not accepted once joined.
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidNumber {
                field,
                value: s.to_string(),
            });
        }
    }
    let joined = components.concat();
    joined.parse().map_err(|_| ParseError::OutOfRange {
        field,
        value: s.to_string(),
    })
}
