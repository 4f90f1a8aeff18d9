use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, NaiveDate, Utc};

/// Calendar-date scalar. Serializes as the integer epoch-millisecond
/// timestamp; parsing accepts integer millis or an ISO-style string
/// (RFC 3339, or `YYYY-MM-DD` taken as midnight UTC). Any other value
/// kind is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub DateTime<Utc>);

#[Scalar]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::Number(ref n) => {
                let millis = n
                    .as_i64()
                    .ok_or_else(|| InputValueError::custom("Date timestamp out of range"))?;
                DateTime::from_timestamp_millis(millis)
                    .map(Date)
                    .ok_or_else(|| InputValueError::custom("Date timestamp out of range"))
            }
            Value::String(ref s) => parse_date_string(s)
                .map(Date)
                .ok_or_else(|| InputValueError::custom(format!("Invalid date string: {s:?}"))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(self.0.timestamp_millis().into())
    }
}

fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_epoch_millis() {
        let date = Date(fixture("1983-10-10"));
        match date.to_value() {
            Value::Number(n) => assert_eq!(n.as_i64(), Some(434_592_000_000)),
            other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trips_through_epoch_millis() {
        let date = Date(fixture("1983-10-10"));
        let parsed = Date::parse(date.to_value()).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_parses_rfc3339_string() {
        let parsed = Date::parse(Value::String("1983-10-10T00:00:00Z".to_string())).unwrap();
        assert_eq!(parsed.0, fixture("1983-10-10"));
    }

    #[test]
    fn test_parses_plain_date_string_as_midnight_utc() {
        let parsed = Date::parse(Value::String("1983-10-10".to_string())).unwrap();
        assert_eq!(parsed.0, fixture("1983-10-10"));
    }

    #[test]
    fn test_rejects_unparseable_string() {
        assert!(Date::parse(Value::String("not a date".to_string())).is_err());
    }

    #[test]
    fn test_rejects_non_date_value_kinds() {
        assert!(Date::parse(Value::Boolean(true)).is_err());
        assert!(Date::parse(Value::Null).is_err());
    }

    fn fixture(s: &str) -> DateTime<Utc> {
        parse_date_string(s).unwrap()
    }
}
