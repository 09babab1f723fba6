use anyhow::Context;
use cardia_core::enums::{Comparison, Diagnosis};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// A label given by name (`disease`, `no-disease`) or by code (`1`, `0`).
pub fn parse_diagnosis(raw: &str, field: &str) -> anyhow::Result<Diagnosis> {
    if let Ok(code) = raw.trim().parse::<i64>() {
        return Diagnosis::from_i64(code).map_err(anyhow::Error::from);
    }
    parse_enum(raw, field)
}

/// A comparison given by name (`gt`) or by symbol (`>`).
pub fn parse_comparison(raw: &str) -> anyhow::Result<Comparison> {
    let comparison = match raw.trim() {
        "=" | "==" => Comparison::Eq,
        ">" => Comparison::Gt,
        ">=" => Comparison::Ge,
        "<" => Comparison::Lt,
        "<=" => Comparison::Le,
        other => return parse_enum(other, "operator"),
    };
    Ok(comparison)
}

/// Split `column=value` into its parts.
pub fn parse_assignment(raw: &str) -> anyhow::Result<(&str, f64)> {
    let (column, value) = raw
        .split_once('=')
        .with_context(|| format!("invalid assignment '{raw}': expected column=value"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid assignment '{raw}': value is not a number"))?;
    Ok((column.trim(), value))
}

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}': expected YYYY-MM-DD"))
}
