//! Typed input schema for reconstruction records.
//!
//! A record is a JSON object with one fixed metadata entry, `keys`, and any
//! number of share entries keyed by a decimal integer. Document order of the
//! share entries is significant because threshold truncation keeps the first
//! `k` shares as they appear, so deserialization collects them into a `Vec`
//! instead of a map.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Record metadata: the total number of shares `n` (informational only) and
/// the reconstruction threshold `k`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keys {
    #[serde(deserialize_with = "int_from_str_or_number")]
    pub n: usize,
    #[serde(deserialize_with = "int_from_str_or_number")]
    pub k: usize,
}

/// One raw share: the base its value string is written in and the digit
/// string itself. The base may be encoded as a JSON number or as a decimal
/// string; the input format uses both interchangeably.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShareEntry {
    #[serde(deserialize_with = "int_from_str_or_number")]
    pub base: u32,
    pub value: String,
}

/// A full reconstruction record: metadata plus the shares in document order,
/// each keyed by its x coordinate.
///
/// Membership is structural. Every top-level entry other than `keys` is a
/// share, and its key must parse as a non-negative integer; a key that does
/// not is a deserialization error rather than a silently skipped entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub keys: Keys,
    pub shares: Vec<(u64, ShareEntry)>,
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object with a `keys` entry and integer-keyed shares")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut keys: Option<Keys> = None;
                let mut shares = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "keys" {
                        if keys.is_some() {
                            return Err(de::Error::duplicate_field("keys"));
                        }
                        keys = Some(map.next_value()?);
                    } else {
                        let x = key.parse::<u64>().map_err(|_| {
                            de::Error::custom(format_args!(
                                "share key is not an integer: {:?}",
                                key
                            ))
                        })?;
                        shares.push((x, map.next_value()?));
                    }
                }

                let keys = keys.ok_or_else(|| de::Error::missing_field("keys"))?;
                Ok(Record { keys, shares })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Accept an integer encoded either as a JSON number or as a decimal string.
fn int_from_str_or_number<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr + TryFrom<u64>,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Num(u64),
        Str(String),
    }

    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Num(number) => T::try_from(number)
            .map_err(|_| de::Error::custom(format_args!("integer out of range: {}", number))),
        StrOrNum::Str(string) => string
            .parse::<T>()
            .map_err(|_| de::Error::custom(format_args!("invalid integer: {:?}", string))),
    }
}
