//! Time period with RFC 3339 timestamps

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::docs::{Documented, FieldDoc};
use crate::validation::{ValidationError, ValidationResult};

/// A start instant and an optional end instant.
///
/// Both must be RFC 3339 timestamps with an explicit offset or `Z`. A
/// period without `endDate` has no ending. The ordering of the two
/// instants is not constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    #[serde(with = "rfc3339")]
    pub start_date: DateTime<FixedOffset>,
    #[serde(default, with = "rfc3339_option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<FixedOffset>>,
}

impl TimePeriod {
    pub fn new(start_date: DateTime<FixedOffset>, end_date: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Parses both timestamps strictly as RFC 3339.
    pub fn parse(start_date: &str, end_date: Option<&str>) -> ValidationResult<Self> {
        Ok(Self {
            start_date: parse_timestamp("startDate", start_date)?,
            end_date: end_date.map(|raw| parse_timestamp("endDate", raw)).transpose()?,
        })
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }
}

fn parse_timestamp(field: &str, raw: &str) -> ValidationResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|e| ValidationError::invalid_timestamp(field, raw, e))
}

/// RFC 3339 with `Z` for a zero offset and only as many fractional
/// digits as needed.
fn format_timestamp(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

mod rfc3339 {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| de::Error::custom(format!("'{}' is not RFC 3339: {}", raw, e)))
    }
}

mod rfc3339_option {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::rfc3339::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::rfc3339")] DateTime<FixedOffset>);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(value)| value))
    }
}

impl Documented for TimePeriod {
    const NAME: &'static str = "TimePeriod";

    fn description() -> &'static str {
        "Time period with start and optional end date, both RFC 3339 with time zone"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[
            FieldDoc::required(
                "startDate",
                "An instant of time, starting of the TimePeriod. \
                 It must follow RFC 3339 and must have time zone.",
            ),
            FieldDoc::optional(
                "endDate",
                "An instant of time, ending of the TimePeriod. \
                 If not included, then the period has no ending date.",
            ),
        ];
        FIELDS
    }

    fn example() -> Value {
        json!({
            "startDate": "2023-01-01T12:00:00Z",
            "endDate": "2023-01-02T12:00:00Z"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationRule;

    #[test]
    fn test_parse_with_offsets() {
        let period =
            TimePeriod::parse("2023-01-01T12:00:00Z", Some("2023-01-02T12:00:00+02:00")).unwrap();
        assert_eq!(period.end_date.map(|d| d.offset().local_minus_utc()), Some(7200));
        assert!(!period.is_open_ended());
    }

    #[test]
    fn test_open_ended() {
        let period = TimePeriod::parse("2023-01-01T12:00:00-05:00", None).unwrap();
        assert!(period.is_open_ended());
    }

    #[test]
    fn test_missing_offset_rejected() {
        let err = TimePeriod::parse("2023-01-01T12:00:00", None).unwrap_err();
        assert_eq!(err.rule(), ValidationRule::InvalidTimestamp);
        assert_eq!(err.field(), "startDate");

        let err = TimePeriod::parse("2023-01-01T12:00:00Z", Some("2023-01-02")).unwrap_err();
        assert_eq!(err.field(), "endDate");
    }

    #[test]
    fn test_json_shape() {
        let period: TimePeriod = serde_json::from_value(TimePeriod::example()).unwrap();
        let value = serde_json::to_value(period).unwrap();
        assert_eq!(value, TimePeriod::example());

        let no_end: TimePeriod =
            serde_json::from_value(json!({ "startDate": "2023-01-01T12:00:00Z" })).unwrap();
        assert!(serde_json::to_value(no_end).unwrap().get("endDate").is_none());

        let bad = json!({ "startDate": "2023-01-01 12:00:00" });
        assert!(serde_json::from_value::<TimePeriod>(bad).is_err());
    }
}
