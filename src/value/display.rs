//! `String(value)` conversion.

use std::fmt;

use super::Value;

const MILLIS_PER_DAY: i64 = 86_400_000;

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => formatter.write_str(&format_number(*number)),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(",")?;
                    }
                    if !item.is_nil() {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Date(millis) => formatter.write_str(&iso_timestamp(*millis)),
            Self::RegExp(pattern) => write!(formatter, "/{}/", pattern.as_str()),
            Self::Set(_) => formatter.write_str("[object Set]"),
            Self::Error(error) if error.message.is_empty() => formatter.write_str(&error.name),
            Self::Error(error) => write!(formatter, "{}: {}", error.name, error.message),
            Self::Symbol(symbol) => {
                write!(formatter, "Symbol({})", symbol.description().unwrap_or_default())
            }
            Self::Function(function) => {
                write!(formatter, "function {}() {{ [native code] }}", function.name())
            }
            Self::Promise(_) => formatter.write_str("[object Promise]"),
        }
    }
}

/// Formats a number the way JavaScript's `String(number)` does for the
/// common cases: integral values print without a fraction, `-0` prints as
/// `0`, and non-finite values use their JavaScript names.
#[must_use]
pub(crate) fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    if number.fract() == 0.0 && number.abs() < 1e21 {
        return format!("{number:.0}");
    }
    format!("{number}")
}

/// Renders a millisecond timestamp as an ISO-8601 UTC string.
fn iso_timestamp(millis: i64) -> String {
    let days = millis.div_euclid(MILLIS_PER_DAY);
    let time_of_day = millis.rem_euclid(MILLIS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
        time_of_day / 3_600_000,
        (time_of_day / 60_000) % 60,
        (time_of_day / 1000) % 60,
        time_of_day % 1000
    )
}

// Proleptic Gregorian calendar, days counted from 1970-01-01.
const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_numbers_print_like_javascript() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_arrays_join_with_commas() {
        assert_eq!(value!([1, null, [2, 3], "x"]).to_string(), "1,,2,3,x");
    }

    #[test]
    fn test_dates_use_iso_format() {
        assert_eq!(Value::Date(0).to_string(), "1970-01-01T00:00:00.000Z");
        assert_eq!(
            Value::Date(1_700_000_000_123).to_string(),
            "2023-11-14T22:13:20.123Z"
        );
    }
}
