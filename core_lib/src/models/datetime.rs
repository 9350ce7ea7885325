//! ISO-8601 timestamp codec for stored documents.
//!
//! The document store keeps timestamps as RFC 3339 strings inside the
//! JSON body. Decoding takes the string path when the stored value is a
//! string and falls back to unix seconds when a writer stored a number
//! instead, so older documents stay readable.

use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};
use serde_json::Value;

pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom),
        Value::Number(number) => {
            let seconds = number
                .as_i64()
                .ok_or_else(|| de::Error::custom("timestamp is not a whole number of seconds"))?;
            Utc.timestamp_opt(seconds, 0)
                .single()
                .ok_or_else(|| de::Error::custom("timestamp out of range"))
        }
        other => Err(de::Error::custom(format!(
            "unsupported timestamp representation: {}",
            other
        ))),
    }
}
