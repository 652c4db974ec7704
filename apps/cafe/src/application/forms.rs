//! Serde helpers for HTML form payloads.
//!
//! Browsers submit every text input, so an untouched optional field arrives as
//! an empty string. These helpers normalise that to `None` and trim
//! surrounding whitespace before validation runs.

use serde::{Deserialize, Deserializer};

pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
